/// Reference population size the seeding script produces by default.
pub const DEFAULT_TOTAL_SIMULATIONS: u64 = 1000;

/// Reported percentiles never leave [PERCENTILE_FLOOR, PERCENTILE_CEIL].
pub const PERCENTILE_FLOOR: i32 = 1;
pub const PERCENTILE_CEIL: i32 = 99;

/// Upper bound on a single population count query.
pub const DEFAULT_QUERY_TIMEOUT_MS: u64 = 2000;

/// Quiz layout: 8 items per dimension, each answered on a 0-4 scale.
pub const ITEMS_PER_DIMENSION: usize = 8;
pub const MAX_ITEM_SCORE: u32 = 4;

/// Highest achievable raw score on one dimension (8 x 4).
pub const MAX_DIMENSION_SCORE: f64 = (ITEMS_PER_DIMENSION as u32 * MAX_ITEM_SCORE) as f64;

/// Global item indices (0..40) whose answers are reverse scored.
pub const REVERSE_SCORED_ITEMS: [usize; 7] = [13, 14, 22, 23, 36, 37, 39];
