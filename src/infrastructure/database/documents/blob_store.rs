use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::DocumentStore;
use crate::domain::repositories::RepositoryError;

/// Blob container configuration
#[derive(Debug, Clone)]
pub struct BlobConfig {
    pub base_url: String,
    pub container: String,
    pub sas_token: String,
    pub timeout_secs: u64,
}

/// HTTP blob container implementation of DocumentStore
///
/// Documents are block blobs addressed as `{base}/{container}/{name}?{sas}`.
pub struct BlobDocumentStore {
    client: Client,
    config: BlobConfig,
}

impl BlobDocumentStore {
    pub fn new(config: BlobConfig) -> Result<Self, RepositoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RepositoryError::Http(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn blob_url(&self, name: &str) -> String {
        format!(
            "{}/{}/{}?{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.container,
            name,
            self.config.sas_token.trim_start_matches('?')
        )
    }
}

#[async_trait]
impl DocumentStore for BlobDocumentStore {
    async fn read_document(&self, name: &str) -> Result<Option<serde_json::Value>, RepositoryError> {
        debug!("Fetching blob {}", name);

        let response = self
            .client
            .get(self.blob_url(name))
            .send()
            .await
            .map_err(|e| RepositoryError::Http(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            warn!("Blob {} fetch returned {}", name, status);
            return Ok(None);
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        Ok(Some(body))
    }

    async fn write_document(&self, name: &str, body: &serde_json::Value) -> Result<(), RepositoryError> {
        debug!("Uploading blob {}", name);

        let response = self
            .client
            .put(self.blob_url(name))
            .header("x-ms-blob-type", "BlockBlob")
            .json(body)
            .send()
            .await
            .map_err(|e| RepositoryError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RepositoryError::Http(format!(
                "upload of {} returned {}",
                name,
                response.status()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_url() {
        let store = BlobDocumentStore::new(BlobConfig {
            base_url: "https://acct.blob.core.windows.net/".to_string(),
            container: "chicken-game-blob".to_string(),
            sas_token: "?sv=2024&sig=abc".to_string(),
            timeout_secs: 5,
        })
        .unwrap();

        assert_eq!(
            store.blob_url("players.json"),
            "https://acct.blob.core.windows.net/chicken-game-blob/players.json?sv=2024&sig=abc"
        );
    }
}
