use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Photo, Player};
use crate::domain::repositories::{GameRepository, RepositoryError};
use crate::domain::value_objects::GameMeta;

/// In-process implementation of GameRepository
///
/// Nothing survives a restart. Used when no durable backend is configured.
#[derive(Default)]
pub struct MemoryGameRepository {
    players: RwLock<Option<Vec<Player>>>,
    photos: RwLock<Option<Vec<Photo>>>,
    meta: RwLock<Option<GameMeta>>,
}

impl MemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for MemoryGameRepository {
    async fn load_players(&self) -> Result<Option<Vec<Player>>, RepositoryError> {
        Ok(self.players.read().await.clone())
    }

    async fn save_players(&self, players: &[Player]) -> Result<(), RepositoryError> {
        *self.players.write().await = Some(players.to_vec());
        Ok(())
    }

    async fn load_photos(&self) -> Result<Option<Vec<Photo>>, RepositoryError> {
        Ok(self.photos.read().await.clone())
    }

    async fn save_photos(&self, photos: &[Photo]) -> Result<(), RepositoryError> {
        *self.photos.write().await = Some(photos.to_vec());
        Ok(())
    }

    async fn load_meta(&self) -> Result<Option<GameMeta>, RepositoryError> {
        Ok(self.meta.read().await.clone())
    }

    async fn save_meta(&self, meta: &GameMeta) -> Result<(), RepositoryError> {
        *self.meta.write().await = Some(meta.clone());
        Ok(())
    }
}
