pub mod engine;
pub mod fallback;
pub mod percentile;

pub use engine::RankingEngine;
pub use fallback::FallbackEstimator;
pub use percentile::{clamp_percentile, empirical_percentile};
