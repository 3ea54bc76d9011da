use crate::error::{AppError, AppResult};
use tracing::warn;

/// Single shared access code, supplied by the environment.
///
/// With no code configured every attempt is rejected.
#[derive(Clone, Default)]
pub struct AccessGate {
    secret: Option<String>,
}

impl AccessGate {
    pub fn new(secret: Option<String>) -> Self {
        let secret = secret.filter(|s| !s.trim().is_empty());
        if secret.is_none() {
            warn!("⚠️  No ACCESS_CODE configured; every access check will be rejected.");
        }
        Self { secret }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    pub fn check(&self, presented: Option<&str>) -> AppResult<()> {
        // Compared byte for byte; surrounding whitespace is not stripped.
        let presented = match presented {
            Some(code) if !code.is_empty() => code,
            _ => return Err(AppError::Validation("No access code provided".into())),
        };

        let secret = match &self.secret {
            Some(s) => s,
            None => {
                warn!("⛔ Access check failed: no access code configured");
                return Err(AppError::Unauthorized("Invalid access code".into()));
            }
        };

        if constant_time_eq(presented.as_bytes(), secret.as_bytes()) {
            Ok(())
        } else {
            warn!("⛔ Access check failed: code mismatch");
            Err(AppError::Unauthorized("Invalid access code".into()))
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
