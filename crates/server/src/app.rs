use axum::{Router, http::Method, middleware};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers::common, logging, routes, state::AppState};

/// Assemble the router: routes, permissive CORS, request logging and the
/// envelope 404 fallback.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
        ]);

    Router::new()
        .merge(routes::root::routes())
        .merge(routes::health::routes())
        .merge(routes::auctions::routes())
        .fallback(common::route_not_found)
        .layer(cors)
        .layer(middleware::from_fn(logging::http_logger_middleware))
        .with_state(state)
}
