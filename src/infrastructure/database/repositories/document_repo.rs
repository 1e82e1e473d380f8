use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::entities::{Photo, Player};
use crate::domain::repositories::{GameRepository, RepositoryError};
use crate::domain::value_objects::GameMeta;
use crate::infrastructure::database::documents::DocumentStore;

pub const PLAYERS_DOCUMENT: &str = "players.json";
pub const PHOTOS_DOCUMENT: &str = "photos.json";
pub const GAME_DOCUMENT: &str = "game.json";

/// GameRepository over a whole-document store
///
/// Each aggregate is one JSON document, rewritten in full on every save.
/// There is no version check: concurrent writers are last-write-wins.
pub struct DocumentGameRepository<D: DocumentStore> {
    store: Arc<D>,
}

impl<D: DocumentStore> DocumentGameRepository<D> {
    pub fn new(store: Arc<D>) -> Self {
        Self { store }
    }

    async fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, RepositoryError> {
        match self.store.read_document(name).await? {
            Some(body) => Ok(Some(serde_json::from_value(body)?)),
            None => Ok(None),
        }
    }

    async fn save<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<(), RepositoryError> {
        let body = serde_json::to_value(value)?;
        self.store.write_document(name, &body).await
    }
}

#[async_trait]
impl<D: DocumentStore> GameRepository for DocumentGameRepository<D> {
    async fn load_players(&self) -> Result<Option<Vec<Player>>, RepositoryError> {
        self.load(PLAYERS_DOCUMENT).await
    }

    async fn save_players(&self, players: &[Player]) -> Result<(), RepositoryError> {
        self.save(PLAYERS_DOCUMENT, players).await
    }

    async fn load_photos(&self) -> Result<Option<Vec<Photo>>, RepositoryError> {
        self.load(PHOTOS_DOCUMENT).await
    }

    async fn save_photos(&self, photos: &[Photo]) -> Result<(), RepositoryError> {
        self.save(PHOTOS_DOCUMENT, photos).await
    }

    async fn load_meta(&self) -> Result<Option<GameMeta>, RepositoryError> {
        self.load(GAME_DOCUMENT).await
    }

    async fn save_meta(&self, meta: &GameMeta) -> Result<(), RepositoryError> {
        self.save(GAME_DOCUMENT, meta).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::GameStore;
    use crate::infrastructure::database::documents::SqliteDocumentStore;
    use rust_decimal::Decimal;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn sqlite_store() -> Arc<SqliteDocumentStore> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let store = SqliteDocumentStore::new(pool);
        store.init().await.unwrap();
        Arc::new(store)
    }

    #[tokio::test]
    async fn test_empty_store_loads_nothing() {
        let repo = DocumentGameRepository::new(sqlite_store().await);
        assert!(repo.load_players().await.unwrap().is_none());
        assert!(repo.load_photos().await.unwrap().is_none());
        assert!(repo.load_meta().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_documents_survive_a_fresh_repository() {
        let documents = sqlite_store().await;

        let mut game = GameStore::new(Some(5));
        let al = game.add_player("Al").unwrap();
        let bea = game.add_player("Bea").unwrap();
        game.set_partner(&al.id, &bea.id).unwrap();
        game.set_partner(&bea.id, &al.id).unwrap();
        game.set_balance(Decimal::new(5050, 2)).unwrap();
        game.record_expense(Decimal::from(10), "pizza", "Al").unwrap();
        game.add_photo("Tap Room", Some(40.7), Some(-74.0), None).unwrap();
        game.choose_chickens_from_teams().unwrap();
        let snapshot = game.snapshot();

        let writer = DocumentGameRepository::new(documents.clone());
        writer.save_players(&snapshot.players).await.unwrap();
        writer.save_photos(&snapshot.photos).await.unwrap();
        writer.save_meta(&snapshot.meta).await.unwrap();

        let reader = DocumentGameRepository::new(documents);
        assert_eq!(reader.load_players().await.unwrap().unwrap(), snapshot.players);
        assert_eq!(reader.load_photos().await.unwrap().unwrap(), snapshot.photos);

        let meta = reader.load_meta().await.unwrap().unwrap();
        assert_eq!(meta.balance, Decimal::new(4050, 2));
        assert_eq!(meta.expenses.len(), 1);
        assert!(meta.chickens_assigned);
        assert_eq!(meta.partner_choices, snapshot.meta.partner_choices);
        assert_eq!(meta.announcement, snapshot.meta.announcement);
    }

    #[tokio::test]
    async fn test_game_document_uses_camel_case() {
        let documents = sqlite_store().await;
        let repo = DocumentGameRepository::new(documents.clone());

        repo.save_meta(&GameMeta {
            chickens_assigned: true,
            ..Default::default()
        })
        .await
        .unwrap();

        let raw = documents.read_document(GAME_DOCUMENT).await.unwrap().unwrap();
        assert_eq!(raw["chickensAssigned"], true);
        assert_eq!(raw["balance"], 0.0);
    }
}
