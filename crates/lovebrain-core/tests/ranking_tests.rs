mod common;

use common::*;
use lovebrain_core::config::RankingConfig;
use lovebrain_core::dimension::{Dimension, Rankings, ScoreVector};
use lovebrain_core::error::LoveBrainError;
use lovebrain_core::protocol::RankSource;
use lovebrain_core::ranking::{FallbackEstimator, RankingEngine};
use lovebrain_core::store::{MemoryPopulation, PopulationStore};
use rstest::rstest;
use std::sync::atomic::Ordering;
use strum::IntoEnumIterator;

fn engine() -> RankingEngine {
    RankingEngine::new(&RankingConfig::default()).unwrap()
}

fn assert_within_jitter(rankings: &Rankings, bases: [u8; 5], jitter: i32) {
    for d in Dimension::iter() {
        let got = rankings.get(d) as i32;
        let base = bases[d.index()] as i32;
        assert!(
            (1..=99).contains(&got),
            "{} out of range: {}",
            d,
            got
        );
        assert!(
            (got - base).abs() <= jitter,
            "{}: {} not within {} of {}",
            d,
            got,
            jitter,
            base
        );
    }
}

// --- FALLBACK ---

#[rstest]
#[case(0.0, 15)]
#[case(1.5, 15)]
#[case(1.6, 35)]
#[case(2.0, 35)]
#[case(2.5, 35)]
#[case(3.5, 55)]
#[case(4.5, 75)]
#[case(4.51, 90)]
#[case(32.0, 90)]
#[case(-3.0, 15)]
fn test_fallback_base_buckets(#[case] score: f64, #[case] expected: u8) {
    assert_eq!(FallbackEstimator::default().base_percentile(score), expected);
}

#[tokio::test]
async fn test_unreachable_store_worked_example() {
    let engine = engine();
    for _ in 0..50 {
        let result = engine
            .rank(&example_scores(), PopulationStore::Unavailable)
            .await
            .unwrap();
        assert_eq!(result.source, RankSource::Mock);
        assert_within_jitter(&result.rankings, [15, 55, 90, 35, 90], 8);
    }
}

#[tokio::test]
async fn test_fallback_is_reproducible_with_seeded_rng() {
    let engine = engine();
    let scores = example_scores();
    let mut a = fastrand::Rng::with_seed(7);
    let mut b = fastrand::Rng::with_seed(7);

    let first = engine
        .rank_with_rng(&scores, PopulationStore::Unavailable, &mut a)
        .await
        .unwrap();
    let second = engine
        .rank_with_rng(&scores, PopulationStore::Unavailable, &mut b)
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_zero_jitter_returns_bases() {
    let mut config = RankingConfig::default();
    config.fallback.fallback_jitter = 0;
    let engine = RankingEngine::new(&config).unwrap();
    let result = engine
        .fallback()
        .estimate(&example_scores(), &mut fastrand::Rng::new());
    assert_eq!(
        result.rankings,
        Rankings::from_fn(|d| [15, 55, 90, 35, 90][d.index()])
    );
}

#[test]
fn test_jitter_never_escapes_bounds() {
    let mut config = RankingConfig::default();
    config.fallback.fallback_bases = vec![1, 2, 50, 98, 99];
    config.fallback.fallback_jitter = 20;
    let engine = RankingEngine::new(&config).unwrap();
    let mut rng = fastrand::Rng::with_seed(42);

    for _ in 0..500 {
        let r = engine.fallback().estimate(&example_scores(), &mut rng);
        for (_, p) in r.rankings.iter() {
            assert!((1..=99).contains(&p));
        }
    }
}

// --- LIVE PATH ---

#[tokio::test]
async fn test_live_quarter_of_population_below() {
    let population = population_with_split(1000, 250, Dimension::IdealizationFilter, 3.0);
    let result = engine()
        .rank(&uniform_scores(3.0), PopulationStore::Live(&population))
        .await
        .unwrap();

    assert_eq!(result.source, RankSource::Database);
    assert_eq!(result.rankings.get(Dimension::IdealizationFilter), 25);
    // Nothing strictly below on the other dimensions.
    assert_eq!(result.rankings.get(Dimension::LossOfSelf), 1);
}

#[tokio::test]
async fn test_live_all_equal_clamps_to_floor() {
    let population = MemoryPopulation::new(vec![uniform_scores(12.0); 1000]);
    let result = engine()
        .rank(&uniform_scores(12.0), PopulationStore::Live(&population))
        .await
        .unwrap();
    for (_, p) in result.rankings.iter() {
        assert_eq!(p, 1);
    }
}

#[tokio::test]
async fn test_live_above_everyone_clamps_to_ceiling() {
    let population = MemoryPopulation::new(vec![uniform_scores(12.0); 1000]);
    let result = engine()
        .rank(&uniform_scores(12.5), PopulationStore::Live(&population))
        .await
        .unwrap();
    for (_, p) in result.rankings.iter() {
        assert_eq!(p, 99);
    }
}

#[tokio::test]
async fn test_live_uses_configured_total_not_record_count() {
    let population = population_with_split(100, 50, Dimension::LossOfSelf, 10.0);
    let mut config = RankingConfig::default();
    config.total_simulations = 200;
    let engine = RankingEngine::new(&config).unwrap();

    let result = engine
        .rank(&uniform_scores(10.0), PopulationStore::Live(&population))
        .await
        .unwrap();
    assert_eq!(result.rankings.get(Dimension::LossOfSelf), 25);
}

#[tokio::test]
async fn test_live_is_repeatable() {
    let mut rng = fastrand::Rng::with_seed(3);
    let population =
        MemoryPopulation::new(lovebrain_core::simulation::simulate_population(1000, &mut rng));
    let engine = engine();
    let scores = ScoreVector::from_slice(&[16.0, 14.0, 18.0, 9.0, 21.0]).unwrap();

    let first = engine
        .rank(&scores, PopulationStore::Live(&population))
        .await
        .unwrap();
    for _ in 0..10 {
        let again = engine
            .rank(&scores, PopulationStore::Live(&population))
            .await
            .unwrap();
        assert_eq!(first, again);
    }
}

// --- FAILURE HANDLING ---

#[rstest]
#[case(Dimension::EmotionalDependence)]
#[case(Dimension::BoundarySacrifice)]
#[case(Dimension::RelationshipCentrality)]
#[tokio::test]
async fn test_single_failing_dimension_falls_back_entirely(#[case] fail_on: Dimension) {
    let population = FailingPopulation::new(
        MemoryPopulation::new(vec![uniform_scores(0.0); 1000]),
        fail_on,
    );
    let mut config = RankingConfig::default();
    config.fallback.fallback_jitter = 0;
    let engine = RankingEngine::new(&config).unwrap();

    // Live answer would be 99 everywhere; the fallback for 5.0 is 90.
    let result = engine
        .rank(&uniform_scores(5.0), PopulationStore::Live(&population))
        .await
        .unwrap();

    assert_eq!(result.source, RankSource::Mock);
    assert_eq!(result.rankings, Rankings::from_fn(|_| 90));
    assert!(population.calls.load(Ordering::SeqCst) >= 1);
}

#[tokio::test]
async fn test_stalled_query_times_out_into_fallback() {
    let population = StalledPopulation {
        inner: MemoryPopulation::new(vec![uniform_scores(0.0); 10]),
        stall_on: Dimension::LossOfSelf,
    };
    let mut config = RankingConfig::default();
    config.query_timeout_ms = 25;
    let engine = RankingEngine::new(&config).unwrap();

    let started = std::time::Instant::now();
    let result = engine
        .rank(&example_scores(), PopulationStore::Live(&population))
        .await
        .unwrap();

    assert_eq!(result.source, RankSource::Mock);
    assert!(started.elapsed() < std::time::Duration::from_secs(5));
}

#[tokio::test]
async fn test_non_finite_scores_are_rejected() {
    let mut scores = example_scores();
    scores.set(Dimension::IdealizationFilter, f64::INFINITY);
    let err = engine()
        .rank(&scores, PopulationStore::Unavailable)
        .await
        .unwrap_err();
    assert!(matches!(err, LoveBrainError::Validation(_)));
}

#[tokio::test]
async fn test_concurrent_requests_do_not_interfere() {
    let population = std::sync::Arc::new(population_with_split(
        1000,
        400,
        Dimension::EmotionalDependence,
        8.0,
    ));
    let engine = std::sync::Arc::new(engine());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let population = population.clone();
            let engine = engine.clone();
            tokio::spawn(async move {
                let score = if i % 2 == 0 { 8.0 } else { 7.0 };
                let r = engine
                    .rank(&uniform_scores(score), PopulationStore::Live(population.as_ref()))
                    .await
                    .unwrap();
                (score, r.rankings.get(Dimension::EmotionalDependence))
            })
        })
        .collect();

    for h in handles {
        let (score, pct) = h.await.unwrap();
        if score == 8.0 {
            assert_eq!(pct, 40);
        } else {
            assert_eq!(pct, 1);
        }
    }
}
