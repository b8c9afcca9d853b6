// src/config/validate.rs

use anyhow::{Result, anyhow};

use crate::config::model::ConfigFile;
use crate::task::nodes::TASK_NAMES;

/// Run semantic validation against a configuration.
///
/// This checks:
/// - `workers >= 1`
/// - `probability` lies in [0, 1]
/// - every forced-failure entry names a known task
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    if cfg.run.workers == 0 {
        return Err(anyhow!("[run].workers must be >= 1 (got 0)"));
    }

    if !(0.0..=1.0).contains(&cfg.failures.probability) {
        return Err(anyhow!(
            "[failures].probability must be in [0, 1] (got {})",
            cfg.failures.probability
        ));
    }

    for name in &cfg.failures.forced {
        if !TASK_NAMES.contains(&name.as_str()) {
            return Err(anyhow!(
                "[failures].forced contains unknown task '{}' (known tasks: {})",
                name,
                TASK_NAMES.join(", ")
            ));
        }
    }

    Ok(())
}
