// src/pipeline/report.rs

//! One-way reporting side effects: per-level completion records and the
//! final success/failure summary. Records are printed for the user and
//! mirrored as `tracing` events; the exact format is not a stability
//! contract and nothing in the pipeline depends on it.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::errors::TaskError;
use crate::task::result::{Level1Results, Level2Results, TaskResult};

/// Everything a successful run produces: the final result plus
/// level-by-level snapshots and total elapsed time.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub level1: Arc<Level1Results>,
    pub level2: Arc<Level2Results>,
    pub final_result: TaskResult,
    pub elapsed: Duration,
}

pub fn level1_completed(results: &Level1Results) {
    info!("level 1 completed");
    println!("level 1 completed:");
    print_record("Task1", &results.task1);
    print_record("Task2", &results.task2);
    print_record("Task3", &results.task3);
}

pub fn level2_completed(results: &Level2Results) {
    info!("level 2 completed");
    println!("level 2 completed:");
    print_record("Task4", &results.task4);
    print_record("Task5", &results.task5);
}

pub fn level3_completed(final_result: &TaskResult) {
    info!("level 3 completed");
    println!("level 3 completed:");
    print_record("Task6", final_result);
}

pub fn print_success(report: &PipelineReport) {
    println!();
    println!("pipeline completed successfully");
    println!(
        "  level 1: Task1={} Task2={} Task3={}",
        report.level1.task1.value, report.level1.task2.value, report.level1.task3.value
    );
    println!(
        "  level 2: Task4={} Task5={}",
        report.level2.task4.value, report.level2.task5.value
    );
    println!(
        "  level 3: Task6={} ({})",
        report.final_result.value, report.final_result.description
    );
    println!("  total execution time: {}ms", report.elapsed.as_millis());
}

pub fn print_failure(err: &TaskError, elapsed: Duration) {
    println!();
    println!("pipeline terminated on first failure");
    println!("  failed task: {}", err.task_name());
    println!("  error kind: {}", err.kind());
    println!("  reason: {}", err.reason());
    println!("  time of failure: {}ms after start", elapsed.as_millis());
    println!("  no further tasks were submitted");
}

fn print_record(task: &str, result: &TaskResult) {
    println!(
        "    {task}: {} = {} ({}; {})",
        result.description,
        result.value,
        result.value.type_name(),
        result.provenance
    );
}
