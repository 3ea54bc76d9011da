//! Synthetic reference population.
//!
//! Each record answers all 40 quiz items uniformly at random on the 0-4 scale,
//! reverse scoring the items listed in [`REVERSE_SCORED_ITEMS`], and sums the
//! eight items of each dimension.

use crate::consts::{ITEMS_PER_DIMENSION, MAX_ITEM_SCORE, REVERSE_SCORED_ITEMS};
use crate::dimension::{Dimension, ScoreVector};

pub const TOTAL_ITEMS: usize = Dimension::COUNT * ITEMS_PER_DIMENSION;

pub fn is_reverse_scored(item: usize) -> bool {
    REVERSE_SCORED_ITEMS.contains(&item)
}

/// Score contributed by `answer` to item `item` after reverse scoring.
pub fn item_score(item: usize, answer: u32) -> u32 {
    if is_reverse_scored(item) {
        MAX_ITEM_SCORE - answer
    } else {
        answer
    }
}

/// Sums a full answer sheet (one 0-4 answer per item, in item order).
pub fn score_answers(answers: &[u32; TOTAL_ITEMS]) -> ScoreVector {
    let mut sums = [0u32; Dimension::COUNT];
    for (item, &answer) in answers.iter().enumerate() {
        sums[item / ITEMS_PER_DIMENSION] += item_score(item, answer.min(MAX_ITEM_SCORE));
    }
    ScoreVector::from_fn(|d| sums[d.index()] as f64)
}

pub fn simulate_record(rng: &mut fastrand::Rng) -> ScoreVector {
    let mut answers = [0u32; TOTAL_ITEMS];
    for answer in answers.iter_mut() {
        *answer = rng.u32(0..=MAX_ITEM_SCORE);
    }
    score_answers(&answers)
}

pub fn simulate_population(count: usize, rng: &mut fastrand::Rng) -> Vec<ScoreVector> {
    (0..count).map(|_| simulate_record(rng)).collect()
}
