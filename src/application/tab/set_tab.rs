use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::services::GameError;
use crate::infrastructure::services::GameSession;

/// Set tab use case - admin overwrite of the balance
pub struct SetTab {
    session: Arc<GameSession>,
}

impl SetTab {
    pub fn new(session: Arc<GameSession>) -> Self {
        Self { session }
    }

    pub async fn execute(&self, amount: Decimal) -> Result<Decimal, GameError> {
        let balance = self
            .session
            .mutate(|store| store.set_balance(amount))
            .await?;

        tracing::info!("Tab total set to {}", balance);
        Ok(balance)
    }
}
