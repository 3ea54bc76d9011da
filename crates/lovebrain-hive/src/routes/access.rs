use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;
use axum::{extract::State, Json};
use lovebrain_core::protocol::AckResponse;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn check_access_code(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<Value>,
) -> AppResult<Json<AckResponse>> {
    let presented = match payload.get("accessCode") {
        None | Some(Value::Null) => None,
        Some(Value::String(code)) => Some(code.as_str()),
        // A non-string code can never match.
        Some(_) => {
            warn!("⛔ Access check failed: code is not a string");
            return Err(AppError::Unauthorized("Invalid access code".into()));
        }
    };
    state.gate.check(presented)?;

    info!("🔓 Access code accepted");
    Ok(Json(AckResponse {
        success: true,
        message: "Access granted".to_string(),
    }))
}
