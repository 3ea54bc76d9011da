use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;
use axum::{extract::State, Json};
use lovebrain_core::dimension::ScoreVector;
use lovebrain_core::protocol::RankingsResponse;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub async fn compute(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<Value>,
) -> AppResult<Json<RankingsResponse>> {
    let scores =
        ScoreVector::from_json(&payload).map_err(|e| AppError::Validation(e.to_string()))?;

    let result = state.engine.rank(&scores, state.population_store()).await?;

    info!("📊 Rankings ({}): {:?}", result.source, result.rankings);
    Ok(Json(RankingsResponse::new(result, scores)))
}
