use std::sync::Arc;

use crate::domain::entities::Photo;
use crate::domain::services::GameError;
use crate::infrastructure::services::GameSession;

/// Add photo input
pub struct AddPhotoInput {
    pub bar_name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub url: Option<String>,
}

/// Add photo use case - a bar check-in
pub struct AddPhoto {
    session: Arc<GameSession>,
}

impl AddPhoto {
    pub fn new(session: Arc<GameSession>) -> Self {
        Self { session }
    }

    pub async fn execute(&self, input: AddPhotoInput) -> Result<Photo, GameError> {
        let photo = self
            .session
            .mutate(|store| store.add_photo(&input.bar_name, input.lat, input.lng, input.url))
            .await?;

        tracing::info!("Photo checked in at {} ({}, {})", photo.bar_name, photo.lat, photo.lng);
        Ok(photo)
    }
}
