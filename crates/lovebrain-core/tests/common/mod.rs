#![allow(dead_code)]

use async_trait::async_trait;
use lovebrain_core::dimension::{Dimension, ScoreVector};
use lovebrain_core::store::{MemoryPopulation, PopulationQuery, StoreError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn uniform_scores(value: f64) -> ScoreVector {
    ScoreVector::from_fn(|_| value)
}

/// The worked example: `{1.0, 3.0, 4.6, 2.4, 5.0}`.
pub fn example_scores() -> ScoreVector {
    ScoreVector::from_slice(&[1.0, 3.0, 4.6, 2.4, 5.0]).unwrap()
}

/// `total` records where exactly `below` have `dimension` strictly under `cut`
/// and every other value sits at `cut`.
pub fn population_with_split(
    total: usize,
    below: usize,
    dimension: Dimension,
    cut: f64,
) -> MemoryPopulation {
    let records = (0..total)
        .map(|i| {
            let mut r = uniform_scores(cut);
            if i < below {
                r.set(dimension, cut - 1.0);
            }
            r
        })
        .collect();
    MemoryPopulation::new(records)
}

/// Delegates to an in-memory population but errors on one dimension.
pub struct FailingPopulation {
    pub inner: MemoryPopulation,
    pub fail_on: Dimension,
    pub calls: AtomicUsize,
}

impl FailingPopulation {
    pub fn new(inner: MemoryPopulation, fail_on: Dimension) -> Self {
        Self {
            inner,
            fail_on,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PopulationQuery for FailingPopulation {
    async fn count_below(&self, dimension: Dimension, value: f64) -> Result<u64, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if dimension == self.fail_on {
            return Err(StoreError::Query {
                dimension,
                message: "connection reset".into(),
            });
        }
        self.inner.count_below(dimension, value).await
    }

    async fn population_size(&self) -> Result<u64, StoreError> {
        self.inner.population_size().await
    }
}

/// Never answers within any reasonable timeout for one dimension.
pub struct StalledPopulation {
    pub inner: MemoryPopulation,
    pub stall_on: Dimension,
}

#[async_trait]
impl PopulationQuery for StalledPopulation {
    async fn count_below(&self, dimension: Dimension, value: f64) -> Result<u64, StoreError> {
        if dimension == self.stall_on {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        self.inner.count_below(dimension, value).await
    }

    async fn population_size(&self) -> Result<u64, StoreError> {
        self.inner.population_size().await
    }
}
