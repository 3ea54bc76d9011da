use crate::auth::AccessGate;
use lovebrain_core::ranking::RankingEngine;
use lovebrain_core::store::{PopulationQuery, PopulationStore};
use std::sync::Arc;
use tokio::sync::OnceCell;

pub struct AppState {
    pub engine: RankingEngine,
    pub gate: AccessGate,
    pub port: u16,
    population: OnceCell<Arc<dyn PopulationQuery>>,
}

impl AppState {
    pub fn new(engine: RankingEngine, gate: AccessGate, port: u16) -> Self {
        Self {
            engine,
            gate,
            port,
            population: OnceCell::new(),
        }
    }

    /// Makes the population available to ranking. Only the first call wins.
    pub fn attach_population(&self, population: Arc<dyn PopulationQuery>) -> bool {
        self.population.set(population).is_ok()
    }

    pub fn population(&self) -> Option<&Arc<dyn PopulationQuery>> {
        self.population.get()
    }

    pub fn population_store(&self) -> PopulationStore<'_> {
        PopulationStore::from_option(self.population.get().map(Arc::as_ref))
    }

    pub fn is_connected(&self) -> bool {
        self.population.initialized()
    }
}
