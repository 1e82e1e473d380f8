//! Runtime configuration, read from the environment (and `.env` via dotenvy)

use crate::infrastructure::database::documents::BlobConfig;

/// Which persistence backend holds the game documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Sqlite,
    Blob,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Sqlite => "sqlite",
            StorageBackend::Blob => "blob",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Some(StorageBackend::Memory),
            "sqlite" => Some(StorageBackend::Sqlite),
            "blob" => Some(StorageBackend::Blob),
            _ => None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub storage: StorageBackend,
    pub database_url: String,
    /// Present only when both the container URL and SAS token are set
    pub blob: Option<BlobConfig>,
    pub jwt_secret: String,
    pub admin_name: String,
    pub admin_secret: String,
    /// Fixed seed for chicken draws, for reproducible games
    pub game_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            storage: StorageBackend::Memory,
            database_url: "sqlite:./data/chicken_game.db".to_string(),
            blob: None,
            jwt_secret: "chicken-game-secret-change-in-production".to_string(),
            admin_name: "GameAdmin".to_string(),
            admin_secret: "chicken-admin-change-in-production".to_string(),
            game_seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let storage = match std::env::var("STORAGE_BACKEND") {
            Ok(value) => StorageBackend::from_str(&value).unwrap_or_else(|| {
                tracing::warn!("Unknown STORAGE_BACKEND '{}', using memory", value);
                StorageBackend::Memory
            }),
            Err(_) => defaults.storage,
        };

        // Ensure path has sqlite: prefix
        let database_url = std::env::var("DATABASE_URL")
            .map(|url| {
                if url.starts_with("sqlite:") {
                    url
                } else {
                    format!("sqlite:{}", url)
                }
            })
            .unwrap_or(defaults.database_url);

        let blob = match (
            std::env::var("BLOB_STORAGE_URL").ok().filter(|v| !v.is_empty()),
            std::env::var("BLOB_SAS_TOKEN").ok().filter(|v| !v.is_empty()),
        ) {
            (Some(base_url), Some(sas_token)) => Some(BlobConfig {
                base_url,
                container: std::env::var("BLOB_CONTAINER")
                    .unwrap_or_else(|_| "chicken-game-blob".to_string()),
                sas_token,
                timeout_secs: 10,
            }),
            _ => None,
        };

        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            storage,
            database_url,
            blob,
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            admin_name: std::env::var("ADMIN_NAME").unwrap_or(defaults.admin_name),
            admin_secret: std::env::var("ADMIN_SECRET").unwrap_or(defaults.admin_secret),
            game_seed: std::env::var("GAME_SEED").ok().and_then(|s| s.parse().ok()),
        }
    }
}
