pub mod admin;
pub mod health;
pub mod photos;
pub mod players;
pub mod tab;
pub mod teams;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, MethodRouter},
    Router,
};

use crate::api::middleware::{admin_middleware, auth_middleware};
use crate::api::AppState;

/// Create the main API router
pub fn create_api_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        // Players
        .route("/join", post(players::join))
        .route("/players", get(players::list_players))
        .route("/players/:playerId", get(players::get_player))
        // Photos
        .route("/photos", get(photos::list_photos).post(photos::add_photo))
        // Tab
        .route("/balance", get(tab::get_balance))
        .route("/deposit", post(tab::deposit))
        .route(
            "/expenses",
            get(tab::list_expenses).post(tab::record_expense),
        )
        // Teams
        .route("/partners", get(teams::list_teams).post(teams::set_partner))
        .route("/choose-chickens", get(teams::get_announcement))
        .route(
            "/choose-chickens",
            admin_only(post(teams::choose_chickens), &state),
        )
        // Admin
        .route("/set-tab", admin_only(post(admin::set_tab), &state))
        .route("/reset-game", admin_only(post(admin::reset_game), &state))
        .nest("/admin", create_admin_router(state.clone()))
        .route("/health", get(health::health_handler))
        .with_state(state)
}

/// Create admin router
fn create_admin_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(admin::login))
        .route(
            "/assign-chickens",
            admin_only(post(admin::assign_chickens), &state),
        )
        .with_state(state)
}

/// Guard a route behind the admin capability.
/// Layers run outermost-last, so auth_middleware decodes the token before admin_middleware reads it.
/// Route layers leave the method fallback alone, so a wrong method is still a 405.
fn admin_only(
    route: MethodRouter<Arc<AppState>>,
    state: &Arc<AppState>,
) -> MethodRouter<Arc<AppState>> {
    route
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}
