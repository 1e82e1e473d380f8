use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::application::players::{JoinGame, JoinGameInput, ListPlayers};
use crate::domain::entities::Player;

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinResponse {
    pub player: Player,
    pub token: String,
    pub chickens_drawn: bool,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/join - Join the game, drawing chickens once two players are in
pub async fn join(
    State(state): State<Arc<AppState>>,
    Json(req): Json<JoinRequest>,
) -> Result<Json<JoinResponse>, ApiError> {
    let use_case = JoinGame::new(state.game.clone(), state.jwt_service.clone());
    let output = use_case.execute(JoinGameInput { name: req.name }).await?;

    Ok(Json(JoinResponse {
        player: output.player,
        token: output.token,
        chickens_drawn: output.chickens_drawn,
    }))
}

/// GET /api/players - List everyone who joined
pub async fn list_players(State(state): State<Arc<AppState>>) -> Json<Vec<Player>> {
    let use_case = ListPlayers::new(state.game.clone());
    Json(use_case.execute().await)
}

/// GET /api/players/:playerId - Look up a single player
pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let use_case = ListPlayers::new(state.game.clone());
    use_case
        .find(&player_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Player not found".to_string()))
}
