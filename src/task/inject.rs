// src/task/inject.rs

use std::collections::HashSet;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::model::FailureSection;

/// Shared failure-injection policy, consulted by every task.
///
/// Forced failures always fire. Random failures draw from a single
/// mutex-guarded generator, so concurrently executing tasks never observe it
/// in a torn state and a fixed seed yields a reproducible draw sequence
/// (modulo the interleaving of draws across worker threads).
#[derive(Debug)]
pub struct FailureInjector {
    forced: HashSet<String>,
    random_enabled: bool,
    probability: f64,
    rng: Mutex<StdRng>,
}

impl FailureInjector {
    pub fn new<I>(forced: I, random_enabled: bool, probability: f64, seed: Option<u64>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            forced: forced.into_iter().collect(),
            random_enabled,
            probability,
            rng: Mutex::new(rng),
        }
    }

    /// Build an injector from the validated `[failures]` config section.
    pub fn from_config(cfg: &FailureSection) -> Self {
        Self::new(
            cfg.forced.iter().cloned(),
            cfg.random,
            cfg.probability,
            cfg.seed,
        )
    }

    /// An injector that never fires. Default for runs without a config file
    /// and the usual choice in tests.
    pub fn disabled() -> Self {
        Self::new([], false, 0.0, None)
    }

    /// Decide whether the given task instance should fail.
    pub fn should_fail(&self, task: &str) -> bool {
        if self.forced.contains(task) {
            debug!(task, "forced failure injection");
            return true;
        }

        if !self.random_enabled {
            return false;
        }

        let draw: f64 = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            rng.random()
        };

        let fail = draw < self.probability;
        if fail {
            debug!(task, draw, probability = self.probability, "random failure injection");
        }
        fail
    }
}
