//! Static asset serving
//!
//! Images and stylesheets for the marketing pages live under `STATIC_DIR`
//! and are exposed at `/assets`. Pages themselves are rendered in
//! [`super::pages`], so a missing directory only costs the assets.

use std::path::{Path, PathBuf};

use axum::Router;
use tower_http::services::ServeDir;
use tracing::{info, warn};

/// Create router for serving static files
pub fn router(static_dir: &Path) -> Router {
    let assets_dir = assets_dir(static_dir);
    Router::new().nest_service("/assets", ServeDir::new(assets_dir))
}

fn assets_dir(static_dir: &Path) -> PathBuf {
    let assets = static_dir.join("assets");
    if assets.is_dir() {
        info!(path = %assets.display(), "Serving static assets");
    } else {
        warn!(path = %assets.display(), "Static assets directory not found, /assets will 404");
    }
    assets
}
