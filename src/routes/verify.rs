use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use tracing::info;

use crate::models::{AppState, VerifyQuery};
use crate::types::{AppError, AppResult};
use crate::verification::VerifyResponse;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/verify", get(verify_code))
        .with_state(state)
}

/// GET /api/verify?code=... - Exact-match certificate lookup
///
/// A missing `code` is an invalid code; an unparseable query string is a 400.
async fn verify_code(
    State(state): State<AppState>,
    query: Result<Query<VerifyQuery>, QueryRejection>,
) -> AppResult<Json<VerifyResponse>> {
    let Query(query) = query.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    let record = state.lookup.find(&query.code).await;
    info!(valid = record.is_some(), "Verification lookup");
    Ok(Json(VerifyResponse::from(record)))
}
