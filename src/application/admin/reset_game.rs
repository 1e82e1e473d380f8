use std::sync::Arc;

use crate::infrastructure::services::GameSession;

/// Reset game use case - wipes everything for a new game
pub struct ResetGame {
    session: Arc<GameSession>,
}

impl ResetGame {
    pub fn new(session: Arc<GameSession>) -> Self {
        Self { session }
    }

    pub async fn execute(&self) {
        self.session.apply(|store| store.reset_game()).await;

        tracing::info!("Game reset");
    }
}
