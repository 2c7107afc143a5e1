use clap::Parser;
use collabpath::{Args, Command};
use collabpath_core::Config;
use collabpath_core::config::BackoffKind;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_path_command_defaults() {
    let args = Args::try_parse_from(["collabpath", "path", "Drake", "Rihanna"]).unwrap();

    match args.command {
        Command::Path {
            artist1,
            artist2,
            algorithm,
            hide_urls,
            quiet,
        } => {
            assert_eq!(artist1, "Drake");
            assert_eq!(artist2, "Rihanna");
            assert_eq!(algorithm, "bfs");
            assert!(!hide_urls);
            assert!(!quiet);
        }
        other => panic!("Expected path command, got {other:?}"),
    }
    assert!(!args.json);
    assert!(!args.verbose);
}

#[test]
fn test_global_flags_after_subcommand() {
    let args = Args::try_parse_from([
        "collabpath",
        "path",
        "Drake",
        "Rihanna",
        "-a",
        "dfs",
        "--json",
        "--cache-file",
        "/tmp/graph.csv",
        "--backoff",
        "exponential",
    ])
    .unwrap();

    assert!(args.json);
    assert_eq!(args.cache_file, Some(PathBuf::from("/tmp/graph.csv")));
    assert_eq!(args.backoff, Some(BackoffKind::Exponential));
    assert!(matches!(args.command, Command::Path { ref algorithm, .. } if algorithm == "dfs"));
}

#[test]
fn test_suggest_limit() {
    let args = Args::try_parse_from(["collabpath", "suggest", "dra", "--limit", "3"]).unwrap();

    assert!(matches!(args.command, Command::Suggest { ref query, limit: 3 } if query == "dra"));
}

#[test]
fn test_info_command() {
    let args = Args::try_parse_from(["collabpath", "info", "Drake", "--json"]).unwrap();

    assert!(matches!(args.command, Command::Info { ref artist } if artist == "Drake"));
    assert!(args.json);
}

#[test]
fn test_command_names_for_logging() {
    let name_of = |argv: &[&str]| Args::try_parse_from(argv).unwrap().command.name();

    assert_eq!(name_of(&["collabpath", "path", "A", "B"]), "path");
    assert_eq!(name_of(&["collabpath", "expand", "A"]), "expand");
    assert_eq!(name_of(&["collabpath", "info", "A"]), "info");
    assert_eq!(name_of(&["collabpath", "suggest", "A"]), "suggest");
    assert_eq!(name_of(&["collabpath", "stats"]), "stats");
}

#[test]
fn test_unknown_backoff_is_rejected() {
    let result = Args::try_parse_from(["collabpath", "stats", "--backoff", "sometimes"]);

    assert!(result.is_err());
}

#[test]
fn test_missing_artist_is_rejected() {
    assert!(Args::try_parse_from(["collabpath", "path", "Drake"]).is_err());
}

#[test]
fn test_overrides_replace_environment_values() {
    let args = Args::try_parse_from([
        "collabpath",
        "stats",
        "--rate-limit",
        "0.5",
        "--max-retries",
        "7",
        "--retry-delay",
        "2",
        "--cache-file",
        "graph.csv",
    ])
    .unwrap();
    let mut config = Config::default();

    args.apply_overrides(&mut config).unwrap();

    assert_eq!(config.client.rate_limit_delay, Duration::from_millis(500));
    assert_eq!(config.client.max_retries, 7);
    assert_eq!(config.client.retry_delay, Duration::from_secs(2));
    assert_eq!(config.cache_path, PathBuf::from("graph.csv"));
}

#[test]
fn test_negative_delay_override_is_an_error() {
    let args =
        Args::try_parse_from(["collabpath", "stats", "--retry-delay=-1"]).unwrap();
    let mut config = Config::default();

    assert!(args.apply_overrides(&mut config).is_err());
}
