// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [run]
/// workers = 4
///
/// [failures]
/// forced = ["Task2"]
/// random = true
/// probability = 0.15
/// seed = 42
/// ```
///
/// All sections are optional and have reasonable defaults; CLI flags overlay
/// whatever the file provides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Execution settings from `[run]`.
    #[serde(default)]
    pub run: RunSection,

    /// Failure-injection policy from `[failures]`.
    #[serde(default)]
    pub failures: FailureSection,
}

/// `[run]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RunSection {
    /// Number of pool workers executing tasks concurrently.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_workers() -> usize {
    4
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
        }
    }
}

/// `[failures]` section.
///
/// Constructed once before the pipeline starts and read-only afterwards, so
/// it is safe for tasks running in parallel to consult it.
#[derive(Debug, Clone, Deserialize)]
pub struct FailureSection {
    /// Tasks that always fail when executed.
    #[serde(default)]
    pub forced: Vec<String>,

    /// Enable probabilistic failure injection.
    #[serde(default)]
    pub random: bool,

    /// Probability in [0, 1] that a task fails when `random` is enabled.
    #[serde(default = "default_probability")]
    pub probability: f64,

    /// Seed for the shared generator; omit for a non-reproducible run.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_probability() -> f64 {
    0.1
}

impl Default for FailureSection {
    fn default() -> Self {
        Self {
            forced: Vec::new(),
            random: false,
            probability: default_probability(),
            seed: None,
        }
    }
}
