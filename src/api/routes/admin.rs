use std::sync::Arc;

use axum::{extract::State, response::Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::dto::{optional_decimal, MessageResponse};
use crate::api::error::ApiError;
use crate::api::AppState;
use crate::application::admin::{AdminLogin, AdminLoginInput, AssignChickens, ResetGame};
use crate::application::tab::SetTab;
use crate::domain::entities::Player;

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub secret: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct SetTabRequest {
    #[serde(default, deserialize_with = "optional_decimal")]
    pub amount: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct SetTabResponse {
    pub message: String,
    pub balance: Decimal,
}

#[derive(Debug, Serialize)]
pub struct AssignChickensResponse {
    pub assigned: bool,
    pub chickens: Vec<Player>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/admin/login - Exchange the admin credentials for an admin token
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AdminLoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let use_case = AdminLogin::new(
        &state.config.admin_name,
        &state.config.admin_secret,
        state.jwt_service.clone(),
    );
    let token = use_case.execute(AdminLoginInput {
        name: req.name,
        secret: req.secret,
    })?;

    Ok(Json(TokenResponse { token }))
}

/// POST /api/set-tab - Overwrite the tab total (admin)
pub async fn set_tab(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetTabRequest>,
) -> Result<Json<SetTabResponse>, ApiError> {
    let amount = req
        .amount
        .ok_or_else(|| ApiError::Validation("Invalid amount".to_string()))?;

    let use_case = SetTab::new(state.game.clone());
    let balance = use_case.execute(amount).await?;

    Ok(Json(SetTabResponse {
        message: format!("Tab total set to {}", balance),
        balance,
    }))
}

/// POST /api/reset-game - Wipe the game (admin)
pub async fn reset_game(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    let use_case = ResetGame::new(state.game.clone());
    use_case.execute().await;

    Json(MessageResponse {
        message: "Game reset".to_string(),
    })
}

/// POST /api/admin/assign-chickens - Random draw among all players (admin)
pub async fn assign_chickens(State(state): State<Arc<AppState>>) -> Json<AssignChickensResponse> {
    let use_case = AssignChickens::new(state.game.clone());
    let output = use_case.execute().await;

    Json(AssignChickensResponse {
        assigned: output.assigned,
        chickens: output.chickens,
    })
}
