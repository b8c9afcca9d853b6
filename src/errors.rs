// src/errors.rs

//! Typed task errors and crate-wide result aliases.
//!
//! `TaskError` is the only error type that flows through the pipeline; it is
//! created at the failure point and propagated unchanged up through level
//! joins to the executor. Setup-time errors (config loading, CLI) use
//! `anyhow` at the application boundary instead.

use std::fmt;

use thiserror::Error;

/// Broad classification of a task failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or corrupted input data.
    DataValidation,
    /// A simulated resource limit was hit.
    ResourceExhaustion,
    /// Catch-all operational failure (timeouts, format incompatibilities).
    TaskExecution,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::DataValidation => "data validation",
            ErrorKind::ResourceExhaustion => "resource exhaustion",
            ErrorKind::TaskExecution => "task execution",
        };
        f.write_str(s)
    }
}

/// Error raised by a pipeline task.
///
/// Every variant carries the failing task's name and a human-readable
/// reason, so the caller can diagnose which task broke the chain without
/// re-running the pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaskError {
    #[error("task {task} failed: invalid or corrupted input data: {reason}")]
    DataValidation { task: String, reason: String },

    #[error("task {task} failed: resource limit exceeded: {reason}")]
    ResourceExhaustion { task: String, reason: String },

    #[error("task {task} failed: {reason}")]
    TaskExecution { task: String, reason: String },
}

impl TaskError {
    pub fn data_validation(task: impl Into<String>, reason: impl Into<String>) -> Self {
        TaskError::DataValidation {
            task: task.into(),
            reason: reason.into(),
        }
    }

    pub fn resource_exhaustion(task: impl Into<String>, reason: impl Into<String>) -> Self {
        TaskError::ResourceExhaustion {
            task: task.into(),
            reason: reason.into(),
        }
    }

    pub fn task_execution(task: impl Into<String>, reason: impl Into<String>) -> Self {
        TaskError::TaskExecution {
            task: task.into(),
            reason: reason.into(),
        }
    }

    /// Name of the task that raised this error.
    pub fn task_name(&self) -> &str {
        match self {
            TaskError::DataValidation { task, .. }
            | TaskError::ResourceExhaustion { task, .. }
            | TaskError::TaskExecution { task, .. } => task,
        }
    }

    /// The reason text, without the task-name prefix.
    pub fn reason(&self) -> &str {
        match self {
            TaskError::DataValidation { reason, .. }
            | TaskError::ResourceExhaustion { reason, .. }
            | TaskError::TaskExecution { reason, .. } => reason,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::DataValidation { .. } => ErrorKind::DataValidation,
            TaskError::ResourceExhaustion { .. } => ErrorKind::ResourceExhaustion,
            TaskError::TaskExecution { .. } => ErrorKind::TaskExecution,
        }
    }
}

pub use anyhow::{Error, Result};
