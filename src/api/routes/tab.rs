use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::dto::optional_decimal;
use crate::api::error::ApiError;
use crate::api::AppState;
use crate::application::tab::{
    Deposit, DepositInput, GetBalance, ListExpenses, RecordExpense, RecordExpenseInput,
};
use crate::domain::entities::Expense;

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub balance: Decimal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    #[serde(default, deserialize_with = "optional_decimal")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub player_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DepositResponse {
    pub success: bool,
    pub balance: Decimal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    #[serde(default, deserialize_with = "optional_decimal")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub player_name: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/balance
pub async fn get_balance(State(state): State<Arc<AppState>>) -> Json<BalanceResponse> {
    let use_case = GetBalance::new(state.game.clone());
    Json(BalanceResponse {
        balance: use_case.execute().await,
    })
}

/// POST /api/deposit - Credit the shared tab
pub async fn deposit(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DepositRequest>,
) -> Result<Json<DepositResponse>, ApiError> {
    let amount = req
        .amount
        .ok_or_else(|| ApiError::Validation("Invalid amount".to_string()))?;

    let use_case = Deposit::new(state.game.clone());
    let balance = use_case
        .execute(DepositInput {
            amount,
            player_id: req.player_id,
        })
        .await?;

    Ok(Json(DepositResponse {
        success: true,
        balance,
    }))
}

/// GET /api/expenses
pub async fn list_expenses(State(state): State<Arc<AppState>>) -> Json<Vec<Expense>> {
    let use_case = ListExpenses::new(state.game.clone());
    Json(use_case.execute().await)
}

/// POST /api/expenses - Spend from the tab
pub async fn record_expense(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let amount = req.amount.ok_or_else(|| {
        ApiError::Validation("Missing required fields: amount, description, playerName".to_string())
    })?;

    let use_case = RecordExpense::new(state.game.clone());
    let expense = use_case
        .execute(RecordExpenseInput {
            amount,
            description: req.description,
            player_name: req.player_name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(expense)))
}
