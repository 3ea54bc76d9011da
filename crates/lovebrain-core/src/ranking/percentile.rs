use crate::consts::{PERCENTILE_CEIL, PERCENTILE_FLOOR};

/// Clamps to the reportable range; 0th and 100th are never reported.
pub fn clamp_percentile(raw: i32) -> u8 {
    raw.clamp(PERCENTILE_FLOOR, PERCENTILE_CEIL) as u8
}

/// `round(100 * below / total)` clamped to [1, 99].
///
/// `below` is the count of records strictly below the user's score.
/// `total` is the configured population size, not the live record count.
pub fn empirical_percentile(below: u64, total: u64) -> u8 {
    debug_assert!(total > 0, "population size must be positive");
    let raw = (100.0 * below as f64 / total as f64).round();
    // Saturate before narrowing: a stale total can push `raw` past 100.
    clamp_percentile(raw.min(i32::MAX as f64) as i32)
}
