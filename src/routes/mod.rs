//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/api/upload` - Signed upload URL issuing
//! - `/api/verify` - Certificate code lookup
//! - `/api/report` - Sample PDF report
//! - `/api/health` - Health checks
//! - `/`, `/upload`, `/verify`, `/terms`, `/privacy` - Marketing pages
//! - `/assets` - Static files

pub mod health;
pub mod pages;
pub mod report;
pub mod static_files;
pub mod upload;
pub mod verify;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::apply_cors;
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let static_dir = state.config.server.static_dir.clone();
    let origins = state.config.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .merge(upload::router(state.clone()))
        .merge(verify::router(state))
        .merge(report::router())
        .merge(health::router());

    let app = Router::new()
        .merge(api_router)
        .merge(pages::router())
        .merge(static_files::router(&static_dir));

    apply_cors(app, &origins).layer(TraceLayer::new_for_http())
}
