//! Root endpoint: service metadata and the list of available routes.

use crate::routes::ROUTES;
use crate::state::AppState;
use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(root_handler))
}

/// Handler for GET /
async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    let routes: Vec<Value> = ROUTES
        .iter()
        .map(|(method, path)| json!({ "method": method, "path": path }))
        .collect();

    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "listen": format!("{}:{}", state.config.http.bind_host, state.config.http.port),
        "routes": routes
    }))
}
