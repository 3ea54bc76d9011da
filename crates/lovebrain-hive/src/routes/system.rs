use crate::state::AppState;
use axum::{extract::State, Json};
use lovebrain_core::protocol::{DatabaseState, HealthResponse, RootResponse, StatusResponse};
use std::sync::Arc;
use tracing::warn;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn database_state(state: &AppState) -> DatabaseState {
    if state.is_connected() {
        DatabaseState::Connected
    } else {
        DatabaseState::Disconnected
    }
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub async fn root(State(state): State<Arc<AppState>>) -> Json<RootResponse> {
    Json(RootResponse {
        status: "running".to_string(),
        message: "LoveBrain ranking API is running".to_string(),
        timestamp: now(),
        database: database_state(&state),
        version: VERSION.to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
    })
}

pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let population_size = match state.population() {
        Some(population) => match population.population_size().await {
            Ok(n) => Some(n),
            Err(e) => {
                warn!("Could not count population: {}", e);
                None
            }
        },
        None => None,
    };

    let total_simulations = state.engine.total_simulations();
    if let Some(n) = population_size {
        if n != total_simulations {
            warn!(
                "⚠️  Population holds {} records but TOTAL_SIMULATIONS is {}; percentiles are skewed.",
                n, total_simulations
            );
        }
    }

    Json(StatusResponse {
        success: true,
        status: "running".to_string(),
        database: database_state(&state),
        population_size,
        total_simulations,
        access_code_configured: state.gate.is_configured(),
        port: state.port,
        timestamp: now(),
    })
}
