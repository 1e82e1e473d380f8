use std::sync::Arc;

use crate::domain::entities::Player;
use crate::infrastructure::services::GameSession;

/// List players use case
pub struct ListPlayers {
    session: Arc<GameSession>,
}

impl ListPlayers {
    pub fn new(session: Arc<GameSession>) -> Self {
        Self { session }
    }

    /// All players, in join order
    pub async fn execute(&self) -> Vec<Player> {
        self.session.read(|store| store.list_players().to_vec()).await
    }

    /// A single player by id
    pub async fn find(&self, player_id: &str) -> Option<Player> {
        self.session
            .read(|store| store.get_player(player_id).cloned())
            .await
    }
}
