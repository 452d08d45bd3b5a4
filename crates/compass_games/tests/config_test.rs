//! Tests for config loading and command-line overrides.

use clap::Parser;
use compass_games::{Cli, GameConfig};
use std::io::Write;
use std::path::PathBuf;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_from_file_reads_all_fields() {
    let file = write_config(
        r#"
seed = 42
think_delay_ms = [100]
clear_screen = false
log_file = "game.log"
log_filter = "compass_tictactoe=debug"
"#,
    );

    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(config.seed(), &Some(42));
    assert_eq!(config.think_delay_ms(), &vec![100]);
    assert!(!*config.clear_screen());
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "compass_tictactoe=debug");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = GameConfig::from_file(&missing).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let file = write_config("seed = \"not a number\"");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("seed = 1\nthink_delay_ms = [250]\n");
    let path = file.path().to_str().unwrap();

    let cli = Cli::parse_from([
        "compass_games",
        "--config",
        path,
        "--seed",
        "9",
        "--no-delay",
        "--no-clear",
        "--log-file",
        "other.log",
    ]);
    let config = cli.resolve_config().unwrap();

    assert_eq!(config.seed(), &Some(9));
    assert!(config.think_delay_ms().is_empty());
    assert!(!*config.clear_screen());
    assert_eq!(config.log_file(), &PathBuf::from("other.log"));
}

#[test]
fn test_cli_without_flags_keeps_file_values() {
    let file = write_config("seed = 5\n");
    let cli = Cli::parse_from(["compass_games", "-c", file.path().to_str().unwrap()]);
    let config = cli.resolve_config().unwrap();

    assert_eq!(config.seed(), &Some(5));
    assert_eq!(config.think_delay_ms(), &vec![200, 300, 400, 500, 600]);
    assert!(*config.clear_screen());
}
