use crate::dimension::{Rankings, ScoreVector};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Where a set of percentiles came from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RankSource {
    /// Empirical percentiles against the live reference population.
    Database,
    /// Estimated percentiles (population unreachable).
    Mock,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankResult {
    pub rankings: Rankings,
    pub source: RankSource,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RankingsResponse {
    pub success: bool,
    pub message: String,
    pub rankings: Rankings,
    pub user_scores: ScoreVector,
    pub source: RankSource,
}

impl RankingsResponse {
    pub fn new(result: RankResult, user_scores: ScoreVector) -> Self {
        Self {
            success: true,
            message: "Rankings computed".to_string(),
            rankings: result.rankings,
            user_scores,
            source: result.source,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AckResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DatabaseState {
    Connected,
    Disconnected,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RootResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
    pub database: DatabaseState,
    pub version: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatusResponse {
    pub success: bool,
    pub status: String,
    pub database: DatabaseState,
    /// Live record count, `None` while the population is unreachable.
    pub population_size: Option<u64>,
    pub total_simulations: u64,
    pub access_code_configured: bool,
    pub port: u16,
    pub timestamp: String,
}
