use clap::Parser;
use lovebrain_core::config::{FallbackConfig, RankingConfig};
use lovebrain_core::error::LoveBrainError;

#[derive(Parser)]
struct TestCli {
    #[command(flatten)]
    config: RankingConfig,
}

#[test]
fn test_defaults_are_valid() {
    let config = RankingConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.total_simulations, 1000);
    assert_eq!(config.fallback.fallback_bases, vec![15, 35, 55, 75, 90]);
}

#[test]
fn test_cli_defaults_match_struct_defaults() {
    let cli = TestCli::try_parse_from(["test"]).unwrap();
    let defaults = RankingConfig::default();
    assert_eq!(cli.config.query_timeout_ms, defaults.query_timeout_ms);
    assert_eq!(
        cli.config.fallback.fallback_thresholds,
        defaults.fallback.fallback_thresholds
    );
    assert_eq!(cli.config.fallback.fallback_bases, defaults.fallback.fallback_bases);
    assert_eq!(cli.config.fallback.fallback_jitter, defaults.fallback.fallback_jitter);
}

#[test]
fn test_cli_parses_rescaled_buckets() {
    let cli = TestCli::try_parse_from([
        "test",
        "--total-simulations",
        "5000",
        "--fallback-thresholds",
        "8,14,18,24",
        "--fallback-bases",
        "10,30,50,70,90",
    ])
    .unwrap();
    assert_eq!(cli.config.total_simulations, 5000);
    assert_eq!(cli.config.fallback.fallback_thresholds, vec![8.0, 14.0, 18.0, 24.0]);
    assert!(cli.config.validate().is_ok());
    assert!(!cli.config.fallback.has_scale_mismatch());
}

#[test]
fn test_default_buckets_flag_scale_mismatch() {
    assert!(FallbackConfig::default().has_scale_mismatch());
}

#[test]
fn test_zero_population_is_rejected() {
    let config = RankingConfig {
        total_simulations: 0,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(LoveBrainError::Config(_))));
}

#[test]
fn test_bucket_count_mismatch_is_rejected() {
    let mut config = RankingConfig::default();
    config.fallback.fallback_bases = vec![10, 20, 30];
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("requires 5 values"));
}

#[test]
fn test_unsorted_thresholds_are_rejected() {
    let mut config = RankingConfig::default();
    config.fallback.fallback_thresholds = vec![1.5, 3.5, 2.5, 4.5];
    assert!(config.validate().unwrap_err().to_string().contains("ascending"));
}

#[test]
fn test_out_of_range_base_is_rejected() {
    let mut config = RankingConfig::default();
    config.fallback.fallback_bases = vec![0, 35, 55, 75, 90];
    assert!(config.validate().is_err());
}
