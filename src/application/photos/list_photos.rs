use std::sync::Arc;

use crate::domain::entities::Photo;
use crate::infrastructure::services::GameSession;

/// List photos use case
pub struct ListPhotos {
    session: Arc<GameSession>,
}

impl ListPhotos {
    pub fn new(session: Arc<GameSession>) -> Self {
        Self { session }
    }

    pub async fn execute(&self) -> Vec<Photo> {
        self.session.read(|store| store.list_photos().to_vec()).await
    }
}
