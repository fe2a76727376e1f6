//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::SiteState;

/// Build the top-level axum [`Router`].
///
/// Serves `/health` and every other path from the bundle directory, with
/// `index.html` as the fallback for paths that match no file.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: &SiteState) -> Router {
    tracing::debug!(dist_dir = %state.dist_dir().display(), "serving bundle");

    let assets = ServeDir::new(state.dist_dir()).fallback(ServeFile::new(state.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}
