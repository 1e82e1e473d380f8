use std::sync::Arc;

use crate::domain::entities::Player;
use crate::domain::services::GameError;
use crate::infrastructure::auth::JwtService;
use crate::infrastructure::services::GameSession;

/// Join game input
pub struct JoinGameInput {
    pub name: String,
}

/// Join game output
pub struct JoinGameOutput {
    /// The new player, with the role as it stands after the chicken draw
    pub player: Player,
    pub token: String,
    /// Whether this join triggered the chicken draw
    pub chickens_drawn: bool,
}

/// Join game use case
///
/// Adds the player, then attempts the automatic chicken draw, so the second
/// player to join sets the hunt off.
pub struct JoinGame {
    session: Arc<GameSession>,
    jwt_service: Arc<JwtService>,
}

impl JoinGame {
    pub fn new(session: Arc<GameSession>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            session,
            jwt_service,
        }
    }

    pub async fn execute(&self, input: JoinGameInput) -> Result<JoinGameOutput, JoinGameError> {
        let (player, chickens_drawn) = self
            .session
            .mutate(|store| {
                let player = store.add_player(&input.name)?;
                let chickens_drawn = store.assign_chickens_randomly();
                let player = store.get_player(&player.id).cloned().unwrap_or(player);
                Ok::<_, GameError>((player, chickens_drawn))
            })
            .await?;

        tracing::info!("Player joined: {} ({})", player.name, player.id);

        let token = self
            .jwt_service
            .sign_player(&player.id, &player.name)
            .map_err(|e| JoinGameError::Internal(e.to_string()))?;

        Ok(JoinGameOutput {
            player,
            token,
            chickens_drawn,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JoinGameError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Internal error: {0}")]
    Internal(String),
}
