use crate::consts::{
    DEFAULT_QUERY_TIMEOUT_MS, DEFAULT_TOTAL_SIMULATIONS, MAX_DIMENSION_SCORE, PERCENTILE_CEIL,
    PERCENTILE_FLOOR,
};
use crate::error::{LbResult, LoveBrainError};
use clap::Args;
use std::time::Duration;

#[derive(Args, Debug, Clone)]
pub struct RankingConfig {
    /// Size of the reference population; the percentile denominator.
    /// Must match the number of seeded records.
    #[arg(long, env = "TOTAL_SIMULATIONS", default_value_t = DEFAULT_TOTAL_SIMULATIONS)]
    pub total_simulations: u64,

    #[arg(long, default_value_t = DEFAULT_QUERY_TIMEOUT_MS)]
    pub query_timeout_ms: u64,

    #[command(flatten)]
    pub fallback: FallbackConfig,
}

/// Step function used when the population cannot be queried.
///
/// A score `<= thresholds[i]` maps to `bases[i]`; anything above the last
/// threshold maps to the last base.
#[derive(Args, Debug, Clone)]
pub struct FallbackConfig {
    #[arg(long, value_delimiter = ',', default_values_t = [1.5, 2.5, 3.5, 4.5])]
    pub fallback_thresholds: Vec<f64>,

    #[arg(long, value_delimiter = ',', default_values_t = [15u8, 35, 55, 75, 90])]
    pub fallback_bases: Vec<u8>,

    /// Uniform integer jitter applied as [-j, +j].
    #[arg(long, default_value_t = 8)]
    pub fallback_jitter: u8,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            total_simulations: DEFAULT_TOTAL_SIMULATIONS,
            query_timeout_ms: DEFAULT_QUERY_TIMEOUT_MS,
            fallback: FallbackConfig::default(),
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            fallback_thresholds: vec![1.5, 2.5, 3.5, 4.5],
            fallback_bases: vec![15, 35, 55, 75, 90],
            fallback_jitter: 8,
        }
    }
}

impl RankingConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn validate(&self) -> LbResult<()> {
        if self.total_simulations == 0 {
            return Err(LoveBrainError::Config(
                "total_simulations must be greater than zero".into(),
            ));
        }
        if self.query_timeout_ms == 0 {
            return Err(LoveBrainError::Config(
                "query_timeout_ms must be greater than zero".into(),
            ));
        }
        self.fallback.validate()
    }
}

impl FallbackConfig {
    pub fn validate(&self) -> LbResult<()> {
        let thresholds = &self.fallback_thresholds;
        let bases = &self.fallback_bases;

        if bases.len() != thresholds.len() + 1 {
            return Err(LoveBrainError::Config(format!(
                "--fallback-bases requires {} values (one more than --fallback-thresholds), got {}",
                thresholds.len() + 1,
                bases.len()
            )));
        }
        if thresholds.iter().any(|t| !t.is_finite()) {
            return Err(LoveBrainError::Config(
                "--fallback-thresholds must be finite numbers".into(),
            ));
        }
        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(LoveBrainError::Config(
                "--fallback-thresholds must be strictly ascending".into(),
            ));
        }
        let (lo, hi) = (PERCENTILE_FLOOR, PERCENTILE_CEIL);
        if let Some(b) = bases.iter().find(|&&b| (b as i32) < lo || (b as i32) > hi) {
            return Err(LoveBrainError::Config(format!(
                "fallback base {} is outside [{}, {}]",
                b, lo, hi
            )));
        }
        if self.fallback_jitter as i32 > hi {
            return Err(LoveBrainError::Config(format!(
                "--fallback-jitter must be at most {}",
                hi
            )));
        }
        Ok(())
    }

    /// True when the buckets top out far below the raw 0..=32 score range,
    /// i.e. almost every real score lands in the last bucket.
    pub fn has_scale_mismatch(&self) -> bool {
        self.fallback_thresholds
            .last()
            .is_some_and(|&t| t < MAX_DIMENSION_SCORE / 4.0)
    }
}
