//! Axum router and HTTP handlers.
//!
//! `build_router` is the single entry point; `main.rs` attaches middleware
//! layers on top so tests can drive the bare router in-process.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use movements_core::models::{filter::MovementsRequest, movement::PagedMovements};
use tracing::info;

use crate::{
    api_types::HealthResponse,
    error::ApiErrorResponse,
    state::{AppState, SERVICE_NAME},
};

pub const GET_MOVEMENTS_PATH: &str = "/v1.0/GetMovements";

/// Build the application router wired to the given shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(GET_MOVEMENTS_PATH, get(get_movements))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

pub(crate) async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

// ---------------------------------------------------------------------------
// GET /v1.0/GetMovements
// ---------------------------------------------------------------------------

/// Echoes the upstream page verbatim on success.
///
/// 400 for missing/malformed parameters, 404 for an unknown product, 502 when
/// the upstream call fails.
pub(crate) async fn get_movements(
    State(st): State<Arc<AppState>>,
    query: Result<Query<MovementsRequest>, QueryRejection>,
) -> Result<Json<PagedMovements>, ApiErrorResponse> {
    let Query(request) = query?;
    info!(product_id = ?request.product_id, "GetMovements");
    let page = st.core.get_movements(request).await?;
    Ok(Json(page))
}
