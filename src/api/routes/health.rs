use std::sync::{Arc, OnceLock};
use std::time::Instant;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    storage: &'static str,
    uptime_seconds: u64,
}

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the process start so uptime counts from boot, not the first probe
pub fn mark_started() {
    START_TIME.get_or_init(Instant::now);
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let start = START_TIME.get_or_init(Instant::now);

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.config.storage.as_str(),
        uptime_seconds: start.elapsed().as_secs(),
    })
}
