use std::io::Write;

use dagpipe::config::loader::{load_and_validate, load_from_path};
use dagpipe::config::model::ConfigFile;
use dagpipe::config::validate::validate_config;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn full_config_round_trips_from_toml() {
    let file = write_config(
        r#"
[run]
workers = 2

[failures]
forced = ["Task2", "Task5"]
random = true
probability = 0.25
seed = 42
"#,
    );

    let cfg = load_and_validate(file.path()).expect("config should load");
    assert_eq!(cfg.run.workers, 2);
    assert_eq!(cfg.failures.forced, vec!["Task2", "Task5"]);
    assert!(cfg.failures.random);
    assert_eq!(cfg.failures.probability, 0.25);
    assert_eq!(cfg.failures.seed, Some(42));
}

#[test]
fn empty_config_falls_back_to_defaults() {
    let file = write_config("");

    let cfg = load_and_validate(file.path()).expect("empty config is valid");
    assert_eq!(cfg.run.workers, 4);
    assert!(!cfg.failures.random);
    assert_eq!(cfg.failures.probability, 0.1);
    assert!(cfg.failures.forced.is_empty());
    assert_eq!(cfg.failures.seed, None);
}

#[test]
fn out_of_range_probability_is_rejected() {
    let file = write_config(
        r#"
[failures]
probability = 1.5
"#,
    );

    let err = load_and_validate(file.path()).expect_err("probability > 1 is invalid");
    assert!(err.to_string().contains("probability"));
}

#[test]
fn unknown_forced_task_is_rejected() {
    let file = write_config(
        r#"
[failures]
forced = ["Task9"]
"#,
    );

    let err = load_and_validate(file.path()).expect_err("unknown task is invalid");
    assert!(err.to_string().contains("Task9"));
}

#[test]
fn zero_workers_is_rejected() {
    let file = write_config(
        r#"
[run]
workers = 0
"#,
    );

    // Raw loading succeeds; semantic validation catches the zero.
    let cfg = load_from_path(file.path()).expect("TOML itself is well-formed");
    let err = validate_config(&cfg).expect_err("zero workers is invalid");
    assert!(err.to_string().contains("workers"));
}

#[test]
fn default_config_passes_validation() {
    validate_config(&ConfigFile::default()).expect("defaults must be valid");
}

#[test]
fn missing_config_file_reports_the_path() {
    let err = load_from_path("/nonexistent/Dagpipe.toml").expect_err("missing file");
    assert!(err.to_string().contains("Dagpipe.toml"));
}
