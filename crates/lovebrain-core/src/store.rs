use crate::dimension::{Dimension, ScoreVector};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Population store unavailable: {0}")]
    Unavailable(String),

    #[error("Population query failed for {dimension}: {message}")]
    Query {
        dimension: Dimension,
        message: String,
    },

    #[error("Population query for {dimension} timed out after {millis}ms")]
    Timeout { dimension: Dimension, millis: u64 },
}

/// Read-only access to the reference population.
#[async_trait]
pub trait PopulationQuery: Send + Sync {
    /// Number of records whose `dimension` value is strictly below `value`.
    async fn count_below(&self, dimension: Dimension, value: f64) -> Result<u64, StoreError>;

    /// Total number of records, used to audit the configured population size.
    async fn population_size(&self) -> Result<u64, StoreError>;

    /// Releases any underlying connections.
    async fn close(&self) {}
}

/// The population handed to the ranking engine for one call.
#[derive(Clone, Copy)]
pub enum PopulationStore<'a> {
    Live(&'a dyn PopulationQuery),
    Unavailable,
}

impl<'a> PopulationStore<'a> {
    pub fn from_option(query: Option<&'a dyn PopulationQuery>) -> Self {
        match query {
            Some(q) => PopulationStore::Live(q),
            None => PopulationStore::Unavailable,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, PopulationStore::Live(_))
    }
}

/// Population held entirely in memory (CSV files, tests, benches).
#[derive(Debug, Clone, Default)]
pub struct MemoryPopulation {
    records: Vec<ScoreVector>,
}

impl MemoryPopulation {
    pub fn new(records: Vec<ScoreVector>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ScoreVector] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl PopulationQuery for MemoryPopulation {
    async fn count_below(&self, dimension: Dimension, value: f64) -> Result<u64, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.get(dimension) < value)
            .count() as u64)
    }

    async fn population_size(&self) -> Result<u64, StoreError> {
        Ok(self.records.len() as u64)
    }
}
