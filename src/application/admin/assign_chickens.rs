use std::sync::Arc;

use crate::domain::entities::Player;
use crate::infrastructure::services::GameSession;

/// Assign chickens output
pub struct AssignChickensOutput {
    /// False when chickens were already assigned or too few players joined
    pub assigned: bool,
    pub chickens: Vec<Player>,
}

/// Assign chickens use case - random draw among all players
pub struct AssignChickens {
    session: Arc<GameSession>,
}

impl AssignChickens {
    pub fn new(session: Arc<GameSession>) -> Self {
        Self { session }
    }

    pub async fn execute(&self) -> AssignChickensOutput {
        self.session
            .apply(|store| {
                let assigned = store.assign_chickens_randomly();
                let chickens = store.chickens().into_iter().cloned().collect();
                AssignChickensOutput { assigned, chickens }
            })
            .await
    }
}
