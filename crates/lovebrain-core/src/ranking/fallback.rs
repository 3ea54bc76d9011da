use crate::config::FallbackConfig;
use crate::dimension::{Rankings, ScoreVector};
use crate::error::LbResult;
use crate::protocol::{RankResult, RankSource};
use crate::ranking::percentile::clamp_percentile;

/// Coarse percentile estimate used when the population cannot be queried.
#[derive(Debug, Clone)]
pub struct FallbackEstimator {
    thresholds: Vec<f64>,
    bases: Vec<u8>,
    jitter: i32,
}

impl FallbackEstimator {
    pub fn new(config: &FallbackConfig) -> LbResult<Self> {
        config.validate()?;
        Ok(Self {
            thresholds: config.fallback_thresholds.clone(),
            bases: config.fallback_bases.clone(),
            jitter: config.fallback_jitter as i32,
        })
    }

    /// Deterministic bucket value for a score, before jitter.
    pub fn base_percentile(&self, score: f64) -> u8 {
        let bucket = self
            .thresholds
            .iter()
            .position(|&t| score <= t)
            .unwrap_or(self.thresholds.len());
        self.bases[bucket]
    }

    pub fn jitter(&self) -> i32 {
        self.jitter
    }

    pub fn estimate(&self, scores: &ScoreVector, rng: &mut fastrand::Rng) -> RankResult {
        let rankings = Rankings::from_fn(|dimension| {
            let base = self.base_percentile(scores.get(dimension)) as i32;
            let noise = rng.i32(-self.jitter..=self.jitter);
            clamp_percentile(base + noise)
        });

        RankResult {
            rankings,
            source: RankSource::Mock,
        }
    }
}

impl Default for FallbackEstimator {
    fn default() -> Self {
        let config = FallbackConfig::default();
        Self {
            thresholds: config.fallback_thresholds,
            bases: config.fallback_bases,
            jitter: config.fallback_jitter as i32,
        }
    }
}
