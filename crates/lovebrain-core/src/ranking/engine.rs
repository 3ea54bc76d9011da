use crate::config::RankingConfig;
use crate::dimension::{Dimension, Rankings, ScoreVector};
use crate::error::LbResult;
use crate::protocol::{RankResult, RankSource};
use crate::ranking::fallback::FallbackEstimator;
use crate::ranking::percentile::empirical_percentile;
use crate::store::{PopulationQuery, PopulationStore, StoreError};
use futures::future::try_join_all;
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::{debug, warn};

/// Converts raw dimension scores into percentile ranks.
///
/// Holds no per-request state; a single engine is shared by all callers.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    total_simulations: u64,
    query_timeout: Duration,
    fallback: FallbackEstimator,
}

impl RankingEngine {
    pub fn new(config: &RankingConfig) -> LbResult<Self> {
        config.validate()?;

        if config.fallback.has_scale_mismatch() {
            warn!(
                "Fallback thresholds {:?} sit far below the 0-32 raw score range; most scores will land in the top bucket.",
                config.fallback.fallback_thresholds
            );
        }

        Ok(Self {
            total_simulations: config.total_simulations,
            query_timeout: config.query_timeout(),
            fallback: FallbackEstimator::new(&config.fallback)?,
        })
    }

    pub fn total_simulations(&self) -> u64 {
        self.total_simulations
    }

    pub fn fallback(&self) -> &FallbackEstimator {
        &self.fallback
    }

    /// Ranks `scores` against `store`, falling back to the estimator when the
    /// store is unavailable or any query fails.
    ///
    /// Only malformed input is reported as an error.
    pub async fn rank(&self, scores: &ScoreVector, store: PopulationStore<'_>) -> LbResult<RankResult> {
        let mut rng = fastrand::Rng::new();
        self.rank_with_rng(scores, store, &mut rng).await
    }

    /// Same as [`rank`](Self::rank) with an explicit jitter source.
    pub async fn rank_with_rng(
        &self,
        scores: &ScoreVector,
        store: PopulationStore<'_>,
        rng: &mut fastrand::Rng,
    ) -> LbResult<RankResult> {
        scores.validate()?;

        match store {
            PopulationStore::Live(query) => match self.rank_live(scores, query).await {
                Ok(rankings) => {
                    debug!("Live rankings: {:?}", rankings);
                    return Ok(RankResult {
                        rankings,
                        source: RankSource::Database,
                    });
                }
                Err(e) => warn!("Population query failed, using estimated rankings: {}", e),
            },
            PopulationStore::Unavailable => {
                debug!("Population unavailable, using estimated rankings");
            }
        }

        Ok(self.fallback.estimate(scores, rng))
    }

    /// All five counts or nothing: the first failure drops the rest.
    async fn rank_live(
        &self,
        scores: &ScoreVector,
        query: &dyn PopulationQuery,
    ) -> Result<Rankings, StoreError> {
        let lookups = Dimension::iter().map(|dimension| async move {
            let below = self
                .count_with_timeout(query, dimension, scores.get(dimension))
                .await?;
            Ok::<_, StoreError>((dimension, empirical_percentile(below, self.total_simulations)))
        });

        let mut rankings = Rankings::default();
        for (dimension, percentile) in try_join_all(lookups).await? {
            rankings.set(dimension, percentile);
        }
        Ok(rankings)
    }

    async fn count_with_timeout(
        &self,
        query: &dyn PopulationQuery,
        dimension: Dimension,
        value: f64,
    ) -> Result<u64, StoreError> {
        tokio::time::timeout(self.query_timeout, query.count_below(dimension, value))
            .await
            .map_err(|_| StoreError::Timeout {
                dimension,
                millis: self.query_timeout.as_millis() as u64,
            })?
    }
}
