// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod pipeline;
pub mod pool;
pub mod task;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::loader::load_from_path;
use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;
use crate::pipeline::DagExecutor;
use crate::pool::WorkerPool;
use crate::task::{FailureInjector, TASK_NAMES};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI overrides
/// - the bounded worker pool
/// - the shared failure injector
/// - the DAG executor
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = effective_config(&args)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let pool = Arc::new(WorkerPool::new(cfg.run.workers));
    let injector = Arc::new(FailureInjector::from_config(&cfg.failures));

    info!(
        workers = cfg.run.workers,
        random_failures = cfg.failures.random,
        forced = ?cfg.failures.forced,
        "starting pipeline"
    );

    let executor = DagExecutor::new(pool, injector);
    let report = executor.run().await?;

    info!(
        final_value = %report.final_result.value,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "pipeline finished"
    );

    Ok(())
}

/// Load the optional config file and overlay CLI flags on top of it.
///
/// Validation runs once on the merged result, so a flag can never sneak an
/// invalid probability or unknown task name past the file checks.
fn effective_config(args: &CliArgs) -> Result<ConfigFile> {
    let mut cfg = match &args.config {
        Some(path) => load_from_path(path)?,
        None => ConfigFile::default(),
    };

    for task in &args.fail {
        if !cfg.failures.forced.contains(task) {
            cfg.failures.forced.push(task.clone());
        }
    }
    if args.random_failures {
        cfg.failures.random = true;
    }
    if let Some(probability) = args.failure_probability {
        cfg.failures.probability = probability;
    }
    if let Some(seed) = args.seed {
        cfg.failures.seed = Some(seed);
    }
    if let Some(workers) = args.workers {
        cfg.run.workers = workers;
    }

    validate_config(&cfg)?;
    Ok(cfg)
}

/// Simple dry-run output: print the effective config and DAG shape.
fn print_dry_run(cfg: &ConfigFile) {
    println!("dagpipe dry-run");
    println!("  run.workers = {}", cfg.run.workers);
    println!("  failures.random = {}", cfg.failures.random);
    println!("  failures.probability = {}", cfg.failures.probability);
    if let Some(seed) = cfg.failures.seed {
        println!("  failures.seed = {seed}");
    }
    if !cfg.failures.forced.is_empty() {
        println!("  failures.forced = {:?}", cfg.failures.forced);
    }
    println!();

    println!("tasks ({}):", TASK_NAMES.len());
    println!("  level 1: Task1, Task2, Task3");
    println!("  level 2: Task4 (after Task1, Task2), Task5 (after Task1, Task2, Task3)");
    println!("  level 3: Task6 (after Task4, Task5)");
}
