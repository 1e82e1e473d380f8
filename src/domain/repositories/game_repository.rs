use async_trait::async_trait;

use crate::domain::entities::{Photo, Player};
use crate::domain::value_objects::GameMeta;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Storage request failed: {0}")]
    Http(String),
}

impl From<serde_json::Error> for RepositoryError {
    fn from(e: serde_json::Error) -> Self {
        RepositoryError::Serialization(e.to_string())
    }
}

/// Game repository trait
///
/// One load/save pair per aggregate. `Ok(None)` means nothing has been
/// stored for that aggregate yet.
#[async_trait]
pub trait GameRepository: Send + Sync {
    // ========== Players ==========

    async fn load_players(&self) -> Result<Option<Vec<Player>>, RepositoryError>;

    async fn save_players(&self, players: &[Player]) -> Result<(), RepositoryError>;

    // ========== Photos ==========

    async fn load_photos(&self) -> Result<Option<Vec<Photo>>, RepositoryError>;

    async fn save_photos(&self, photos: &[Photo]) -> Result<(), RepositoryError>;

    // ========== Game meta ==========

    /// Balance, expenses, partner choices, chicken flag and announcement
    async fn load_meta(&self) -> Result<Option<GameMeta>, RepositoryError>;

    async fn save_meta(&self, meta: &GameMeta) -> Result<(), RepositoryError>;
}
