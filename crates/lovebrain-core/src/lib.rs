// Re-export types from the protocol crate so they are accessible via lovebrain_core::*
pub use lovebrain_protocol::dimension;
pub use lovebrain_protocol::protocol;
pub use lovebrain_protocol::{Dimension, RankResult, RankSource, Rankings, ScoreVector};

// Internal Modules
pub mod config;
pub mod consts;
pub mod error;
pub mod loader;
pub mod ranking;
pub mod simulation;
pub mod store;
