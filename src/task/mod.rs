// src/task/mod.rs

//! Task model: the closed set of pipeline tasks, their typed results and
//! the shared failure-injection policy.

pub mod inject;
pub mod nodes;
pub mod result;

pub use inject::FailureInjector;
pub use nodes::{TASK_NAMES, Task1, Task2, Task3, Task4, Task5, Task6};
pub use result::{Level1Results, Level2Results, TaskResult, TaskValue};

use crate::errors::TaskError;

/// A single node of the pipeline DAG.
///
/// Inputs are captured at construction time (level-1 tasks take none;
/// later levels hold a shared snapshot of the previous level's results).
/// `execute` runs on a pool worker and must be callable from any thread.
pub trait PipelineTask: Send + Sync {
    fn name(&self) -> &'static str;

    fn execute(&self) -> Result<TaskResult, TaskError>;
}
