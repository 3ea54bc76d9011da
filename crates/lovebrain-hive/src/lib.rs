pub mod auth;
pub mod db;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
pub mod store;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn app(state: Arc<AppState>) -> Router {
    routes::system_routes()
        .merge(routes::api_routes())
        .fallback(routes::not_found)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
