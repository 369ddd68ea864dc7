use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use crate::models::AppState;
use crate::storage::UploadGrant;
use crate::types::AppResult;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/upload", post(issue_upload_url))
        .with_state(state)
}

/// POST /api/upload - Issue a signed, 60 second write URL for a new object key
async fn issue_upload_url(State(state): State<AppState>) -> AppResult<Json<UploadGrant>> {
    info!("Upload URL requested");
    let grant = state.issuer.issue().await?;
    Ok(Json(grant))
}
