use std::path::Path;

use axum::{middleware as axum_middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub mod auth;
pub mod config;
pub mod middleware;
pub mod state;

use state::EdgeState;

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Serves the built frontend from `static_dir`, falling back to `index.html`
/// so client-side routes resolve, with the edge gate in front of every page.
pub fn app(state: EdgeState, static_dir: &Path) -> Router {
    let pages = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(pages)
        .layer(axum_middleware::from_fn_with_state(
            state,
            middleware::edge_gate,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(TraceLayer::new_for_http()),
        )
}
