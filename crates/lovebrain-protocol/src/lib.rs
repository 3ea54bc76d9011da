pub mod dimension;
pub mod protocol;

pub use dimension::{Dimension, DimensionMap, Rankings, ScoreVector, ValidationError};
pub use protocol::{RankResult, RankSource};
