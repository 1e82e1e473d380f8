use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};

use crate::domain::repositories::GameRepository;
use crate::domain::services::GameStore;
use crate::infrastructure::auth::JwtService;
use crate::infrastructure::config::{AppConfig, StorageBackend};
use crate::infrastructure::database::documents::{BlobDocumentStore, SqliteDocumentStore};
use crate::infrastructure::database::repositories::{DocumentGameRepository, MemoryGameRepository};
use crate::infrastructure::services::GameSession;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// The live game
    pub game: Arc<GameSession>,

    /// JWT service for capability tokens
    pub jwt_service: Arc<JwtService>,

    /// Admin credentials and the rest of the runtime configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        let repo = Self::build_repository(&config).await?;
        Ok(Self::with_repository(config, repo))
    }

    /// Build state over an already constructed repository
    pub fn with_repository(config: AppConfig, repo: Arc<dyn GameRepository>) -> Self {
        let game = Arc::new(GameSession::new(GameStore::new(config.game_seed), repo));
        let jwt_service = Arc::new(JwtService::new(&config.jwt_secret));

        Self {
            game,
            jwt_service,
            config: Arc::new(config),
        }
    }

    async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn GameRepository>> {
        let repo: Arc<dyn GameRepository> = match config.storage {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory game storage");
                Arc::new(MemoryGameRepository::new())
            }
            StorageBackend::Sqlite => {
                tracing::info!("Connecting to database: {}", config.database_url);
                ensure_database_dir(&config.database_url)?;
                let options = SqliteConnectOptions::from_str(&config.database_url)?
                    .create_if_missing(true);
                let pool = SqlitePool::connect_with(options).await?;
                let store = SqliteDocumentStore::new(pool);
                store.init().await?;
                Arc::new(DocumentGameRepository::new(Arc::new(store)))
            }
            StorageBackend::Blob => match &config.blob {
                Some(blob) => {
                    tracing::info!(
                        "Using blob storage: {}/{}",
                        blob.base_url,
                        blob.container
                    );
                    let store = BlobDocumentStore::new(blob.clone())?;
                    Arc::new(DocumentGameRepository::new(Arc::new(store)))
                }
                None => {
                    tracing::warn!(
                        "Blob storage selected but BLOB_STORAGE_URL/BLOB_SAS_TOKEN not set - using in-memory storage"
                    );
                    Arc::new(MemoryGameRepository::new())
                }
            },
        };

        Ok(repo)
    }
}

/// SQLite creates the file but not its parent directory
fn ensure_database_dir(database_url: &str) -> std::io::Result<()> {
    let path = database_url
        .trim_start_matches("sqlite:")
        .trim_start_matches("//");
    let path = path.split('?').next().unwrap_or(path);

    if path.is_empty() || path.starts_with(":memory:") {
        return Ok(());
    }

    match std::path::Path::new(path).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir),
        _ => Ok(()),
    }
}
