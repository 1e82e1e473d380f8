use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::repositories::GameRepository;
use crate::domain::services::GameStore;

/// The live game, shared by every request handler
///
/// Requests are served one at a time. Before each operation the store is
/// reloaded from the repository; after each successful mutation all three
/// aggregates are written back. Storage failures are logged and ignored, so
/// the in-memory store stays authoritative for the life of the process.
pub struct GameSession {
    store: Mutex<GameStore>,
    repo: Arc<dyn GameRepository>,
}

impl GameSession {
    pub fn new(store: GameStore, repo: Arc<dyn GameRepository>) -> Self {
        Self {
            store: Mutex::new(store),
            repo,
        }
    }

    /// Run a read-only operation against freshly loaded state
    pub async fn read<T>(&self, f: impl FnOnce(&GameStore) -> T) -> T {
        let mut store = self.store.lock().await;
        self.refresh(&mut store).await;
        f(&store)
    }

    /// Run a mutation and persist the result. Nothing is written if `f` fails.
    pub async fn mutate<T, E>(
        &self,
        f: impl FnOnce(&mut GameStore) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut store = self.store.lock().await;
        self.refresh(&mut store).await;
        let result = f(&mut store)?;
        self.persist(&store).await;
        Ok(result)
    }

    /// Run an infallible mutation and persist the result
    pub async fn apply<T>(&self, f: impl FnOnce(&mut GameStore) -> T) -> T {
        let mut store = self.store.lock().await;
        self.refresh(&mut store).await;
        let result = f(&mut store);
        self.persist(&store).await;
        result
    }

    async fn refresh(&self, store: &mut GameStore) {
        let (players, photos, meta) = tokio::join!(
            self.repo.load_players(),
            self.repo.load_photos(),
            self.repo.load_meta()
        );

        match players {
            Ok(Some(players)) => store.replace_players(players),
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to load players, keeping in-memory copy: {}", e),
        }
        match photos {
            Ok(Some(photos)) => store.replace_photos(photos),
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to load photos, keeping in-memory copy: {}", e),
        }
        match meta {
            Ok(Some(meta)) => store.replace_meta(meta),
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to load game meta, keeping in-memory copy: {}", e),
        }
    }

    async fn persist(&self, store: &GameStore) {
        let snapshot = store.snapshot();
        let (players, photos, meta) = tokio::join!(
            self.repo.save_players(&snapshot.players),
            self.repo.save_photos(&snapshot.photos),
            self.repo.save_meta(&snapshot.meta)
        );

        for (aggregate, result) in [("players", players), ("photos", photos), ("game meta", meta)] {
            if let Err(e) = result {
                tracing::error!("Failed to save {}: {}", aggregate, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal::Decimal;

    use crate::domain::entities::{Photo, Player};
    use crate::domain::repositories::RepositoryError;
    use crate::domain::services::GameError;
    use crate::domain::value_objects::GameMeta;
    use crate::infrastructure::database::repositories::MemoryGameRepository;

    /// Repository whose storage is always down
    struct BrokenRepository;

    #[async_trait]
    impl GameRepository for BrokenRepository {
        async fn load_players(&self) -> Result<Option<Vec<Player>>, RepositoryError> {
            Err(RepositoryError::Http("unreachable".into()))
        }
        async fn save_players(&self, _: &[Player]) -> Result<(), RepositoryError> {
            Err(RepositoryError::Http("unreachable".into()))
        }
        async fn load_photos(&self) -> Result<Option<Vec<Photo>>, RepositoryError> {
            Err(RepositoryError::Http("unreachable".into()))
        }
        async fn save_photos(&self, _: &[Photo]) -> Result<(), RepositoryError> {
            Err(RepositoryError::Http("unreachable".into()))
        }
        async fn load_meta(&self) -> Result<Option<GameMeta>, RepositoryError> {
            Err(RepositoryError::Http("unreachable".into()))
        }
        async fn save_meta(&self, _: &GameMeta) -> Result<(), RepositoryError> {
            Err(RepositoryError::Http("unreachable".into()))
        }
    }

    #[tokio::test]
    async fn test_storage_failures_leave_memory_authoritative() {
        let session = GameSession::new(GameStore::new(Some(1)), Arc::new(BrokenRepository));

        session.mutate(|s| s.add_player("Al")).await.unwrap();
        session.mutate(|s| s.adjust_balance(Decimal::from(30))).await.unwrap();

        let (count, balance) = session
            .read(|s| (s.list_players().len(), s.balance()))
            .await;
        assert_eq!(count, 1);
        assert_eq!(balance, Decimal::from(30));
    }

    #[tokio::test]
    async fn test_mutations_are_persisted() {
        let repo = Arc::new(MemoryGameRepository::new());
        let session = GameSession::new(GameStore::new(Some(1)), repo.clone());

        let player = session.mutate(|s| s.add_player("Bea")).await.unwrap();

        let stored = repo.load_players().await.unwrap().unwrap();
        assert_eq!(stored, vec![player]);
    }

    #[tokio::test]
    async fn test_failed_mutation_writes_nothing() {
        let repo = Arc::new(MemoryGameRepository::new());
        let session = GameSession::new(GameStore::new(Some(1)), repo.clone());

        let err = session.mutate(|s| s.add_player(" ")).await.unwrap_err();
        assert!(matches!(err, GameError::Validation(_)));
        assert!(repo.load_players().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reload_picks_up_other_writers() {
        let repo = Arc::new(MemoryGameRepository::new());
        let first = GameSession::new(GameStore::new(Some(1)), repo.clone());
        let second = GameSession::new(GameStore::new(Some(2)), repo.clone());

        first.mutate(|s| s.add_player("Al")).await.unwrap();

        let names = second
            .read(|s| s.list_players().iter().map(|p| p.name.clone()).collect::<Vec<_>>())
            .await;
        assert_eq!(names, vec!["Al".to_string()]);
    }
}
