use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::services::GameError;
use crate::infrastructure::services::GameSession;

/// Deposit input
pub struct DepositInput {
    pub amount: Decimal,
    pub player_id: Option<String>,
}

/// Deposit use case - credits the shared tab
///
/// Checkout with a payment provider happens outside this service; by the
/// time a deposit reaches us it is treated as settled.
pub struct Deposit {
    session: Arc<GameSession>,
}

impl Deposit {
    pub fn new(session: Arc<GameSession>) -> Self {
        Self { session }
    }

    pub async fn execute(&self, input: DepositInput) -> Result<Decimal, GameError> {
        let balance = self
            .session
            .mutate(|store| store.adjust_balance(input.amount))
            .await?;

        tracing::info!(
            "Deposit of {} from {} - new balance {}",
            input.amount,
            input.player_id.as_deref().unwrap_or("anonymous"),
            balance
        );
        Ok(balance)
    }
}
