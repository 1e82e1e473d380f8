use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::api::dto::optional_f64;
use crate::api::error::ApiError;
use crate::api::AppState;
use crate::application::photos::{AddPhoto, AddPhotoInput, ListPhotos};
use crate::domain::entities::Photo;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPhotoRequest {
    #[serde(default)]
    pub bar_name: String,
    #[serde(default, deserialize_with = "optional_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub lng: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddPhotoResponse {
    pub success: bool,
    pub photo: Photo,
}

/// GET /api/photos
pub async fn list_photos(State(state): State<Arc<AppState>>) -> Json<Vec<Photo>> {
    let use_case = ListPhotos::new(state.game.clone());
    Json(use_case.execute().await)
}

/// POST /api/photos - Pin a bar photo to the map
pub async fn add_photo(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddPhotoRequest>,
) -> Result<Json<AddPhotoResponse>, ApiError> {
    let use_case = AddPhoto::new(state.game.clone());
    let photo = use_case
        .execute(AddPhotoInput {
            bar_name: req.bar_name,
            lat: req.lat,
            lng: req.lng,
            url: req.url,
        })
        .await?;

    Ok(Json(AddPhotoResponse {
        success: true,
        photo,
    }))
}
