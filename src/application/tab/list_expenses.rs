use std::sync::Arc;

use crate::domain::entities::Expense;
use crate::infrastructure::services::GameSession;

/// List expenses use case
pub struct ListExpenses {
    session: Arc<GameSession>,
}

impl ListExpenses {
    pub fn new(session: Arc<GameSession>) -> Self {
        Self { session }
    }

    pub async fn execute(&self) -> Vec<Expense> {
        self.session.read(|store| store.list_expenses().to_vec()).await
    }
}
