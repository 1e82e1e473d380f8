use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::entities::Expense;
use crate::domain::services::GameError;
use crate::infrastructure::services::GameSession;

/// Record expense input
pub struct RecordExpenseInput {
    pub amount: Decimal,
    pub description: String,
    pub player_name: String,
}

/// Record expense use case
pub struct RecordExpense {
    session: Arc<GameSession>,
}

impl RecordExpense {
    pub fn new(session: Arc<GameSession>) -> Self {
        Self { session }
    }

    pub async fn execute(&self, input: RecordExpenseInput) -> Result<Expense, GameError> {
        let expense = self
            .session
            .mutate(|store| {
                store.record_expense(input.amount, &input.description, &input.player_name)
            })
            .await?;

        tracing::info!(
            "Expense recorded: {} for '{}' by {}",
            expense.amount,
            expense.description,
            expense.player_name
        );
        Ok(expense)
    }
}
