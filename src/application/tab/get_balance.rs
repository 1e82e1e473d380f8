use std::sync::Arc;

use rust_decimal::Decimal;

use crate::infrastructure::services::GameSession;

/// Get balance use case
pub struct GetBalance {
    session: Arc<GameSession>,
}

impl GetBalance {
    pub fn new(session: Arc<GameSession>) -> Self {
        Self { session }
    }

    pub async fn execute(&self) -> Decimal {
        self.session.read(|store| store.balance()).await
    }
}
