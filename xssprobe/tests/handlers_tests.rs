use clap::error::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
use xssprobe::command_argument_builder;
use xssprobe::handlers::*;
use xssprobe_core::{OutputFormat, ScanMode};

fn parse(args: &[&str]) -> Result<clap::ArgMatches, clap::Error> {
    let mut argv = vec!["xssprobe"];
    argv.extend_from_slice(args);
    command_argument_builder().try_get_matches_from(argv)
}

#[test]
fn test_command_definition_is_valid() {
    command_argument_builder().debug_assert();
}

#[test]
fn test_target_testing_mode_parses() {
    let matches = parse(&["--target-testing", "-f", "urls.txt"]).unwrap();
    let mode = mode_from_matches(&matches).unwrap();

    match mode {
        ScanMode::TargetTesting { file } => assert_eq!(file, PathBuf::from("urls.txt")),
        other => panic!("expected target testing mode, got {:?}", other),
    }
}

#[test]
fn test_target_testing_alias() {
    let matches = parse(&["--tt", "-f", "urls.txt"]).unwrap();
    assert!(matches!(
        mode_from_matches(&matches),
        Ok(ScanMode::TargetTesting { .. })
    ));
}

#[test]
fn test_crawl_mode_parses() {
    let matches = parse(&["-d", "2", "-u", "http://example.com"]).unwrap();
    let mode = mode_from_matches(&matches).unwrap();

    match mode {
        ScanMode::Crawl { seed, depth } => {
            assert_eq!(seed.as_str(), "http://example.com/");
            assert_eq!(depth, 2);
        }
        other => panic!("expected crawl mode, got {:?}", other),
    }
}

#[test]
fn test_both_modes_is_a_usage_error() {
    let err = parse(&["--target-testing", "-d", "2", "-f", "urls.txt"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_no_mode_is_a_usage_error() {
    let err = parse(&["-u", "http://example.com"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_both_targets_is_a_usage_error() {
    let err = parse(&["-d", "1", "-u", "http://example.com", "-f", "urls.txt"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_no_target_is_a_usage_error() {
    let err = parse(&["--target-testing"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_target_testing_requires_file() {
    let err = parse(&["--target-testing", "-u", "http://example.com"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_crawl_requires_url() {
    let err = parse(&["-d", "1", "-f", "urls.txt"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_negative_depth_is_rejected() {
    assert!(parse(&["-d", "-1", "-u", "http://example.com"]).is_err());
}

#[test]
fn test_crawl_mode_rejects_non_http_seed() {
    let matches = parse(&["-d", "1", "-u", "ftp://example.com"]).unwrap();
    assert!(mode_from_matches(&matches).is_err());
}

#[test]
fn test_config_defaults() {
    let matches = parse(&["--target-testing", "-f", "urls.txt"]).unwrap();
    let config = config_from_matches(&matches);

    assert_eq!(config.threads, 15);
    assert_eq!(config.timeout, Duration::from_secs(8));
    assert!(config.user_agent.starts_with("xssprobe/"));
    assert!(config.output.is_none());
    assert_eq!(config.format, OutputFormat::Text);
}

#[test]
fn test_config_overrides() {
    let matches = parse(&[
        "--target-testing",
        "-f",
        "urls.txt",
        "-t",
        "5",
        "-T",
        "3",
        "-a",
        "custom-agent/2.0",
        "-o",
        "/tmp/found.txt",
        "--format",
        "json",
    ])
    .unwrap();
    let config = config_from_matches(&matches);

    assert_eq!(config.threads, 5);
    assert_eq!(config.timeout, Duration::from_secs(3));
    assert_eq!(config.user_agent, "custom-agent/2.0");
    assert_eq!(config.output, Some(PathBuf::from("/tmp/found.txt")));
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_zero_threads_fails_validation() {
    let matches = parse(&["--target-testing", "-f", "urls.txt", "-t", "0"]).unwrap();
    assert!(config_from_matches(&matches).validate().is_err());
}

#[test]
fn test_log_level() {
    assert_eq!(log_level(0), Level::WARN);
    assert_eq!(log_level(1), Level::INFO);
    assert_eq!(log_level(2), Level::DEBUG);
    assert_eq!(log_level(7), Level::DEBUG);
}

#[test]
fn test_prepare_accepts_valid_arguments() {
    let matches = parse(&["-d", "1", "-u", "http://example.com", "-t", "3"]).unwrap();
    let (config, mode) = prepare(&matches).unwrap();

    assert_eq!(config.threads, 3);
    assert!(matches!(mode, ScanMode::Crawl { depth: 1, .. }));
}

#[test]
fn test_prepare_rejects_bad_input_before_scanning() {
    let zero_threads = parse(&["--target-testing", "-f", "urls.txt", "-t", "0"]).unwrap();
    assert!(prepare(&zero_threads).is_err());

    let ftp_seed = parse(&["-d", "1", "-u", "ftp://example.com"]).unwrap();
    assert!(prepare(&ftp_seed).is_err());
}
