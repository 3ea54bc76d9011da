pub mod access;
pub mod rankings;
pub mod system;

use crate::error::AppError;
use crate::state::AppState;
use axum::http::{Method, Uri};
use axum::Router;
use std::sync::Arc;

pub fn system_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", axum::routing::get(system::root))
        .route("/health", axum::routing::get(system::health))
        .route("/api/status", axum::routing::get(system::status))
}

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/check-access-code",
            axum::routing::post(access::check_access_code),
        )
        .route(
            "/api/lovebrain-rankings",
            axum::routing::post(rankings::compute),
        )
}

pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("No route: {} {}", method, uri.path()))
}
