// src/task/result.rs

use std::fmt;

use crate::errors::TaskError;

/// Closed set of value shapes a task can produce.
///
/// Downstream tasks extract the shape they expect with the typed accessors
/// on [`TaskResult`]; a mismatch is a loud, typed error rather than a silent
/// conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskValue {
    Numeric(f64),
    Text(String),
    Integer(i64),
}

impl TaskValue {
    /// Stable name of the value shape, used in reports and mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            TaskValue::Numeric(_) => "numeric",
            TaskValue::Text(_) => "text",
            TaskValue::Integer(_) => "integer",
        }
    }
}

impl fmt::Display for TaskValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskValue::Numeric(v) => write!(f, "{v}"),
            TaskValue::Text(s) => f.write_str(s),
            TaskValue::Integer(i) => write!(f, "{i}"),
        }
    }
}

/// Immutable output of a single task: the value itself plus a short
/// description and free-text provenance carried along for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskResult {
    pub value: TaskValue,
    pub description: String,
    pub provenance: String,
}

impl TaskResult {
    pub fn new(
        value: TaskValue,
        description: impl Into<String>,
        provenance: impl Into<String>,
    ) -> Self {
        Self {
            value,
            description: description.into(),
            provenance: provenance.into(),
        }
    }

    /// Extract the numeric payload.
    ///
    /// `consumer` is the name of the task reading this result; it becomes
    /// the failing task in the mismatch error.
    pub fn numeric_value(&self, consumer: &str) -> Result<f64, TaskError> {
        match &self.value {
            TaskValue::Numeric(v) => Ok(*v),
            other => Err(shape_mismatch(consumer, "numeric", other, &self.description)),
        }
    }

    /// Extract the text payload.
    pub fn text_value(&self, consumer: &str) -> Result<&str, TaskError> {
        match &self.value {
            TaskValue::Text(s) => Ok(s.as_str()),
            other => Err(shape_mismatch(consumer, "text", other, &self.description)),
        }
    }

    /// Extract the integer payload.
    pub fn integer_value(&self, consumer: &str) -> Result<i64, TaskError> {
        match &self.value {
            TaskValue::Integer(i) => Ok(*i),
            other => Err(shape_mismatch(consumer, "integer", other, &self.description)),
        }
    }
}

fn shape_mismatch(
    consumer: &str,
    expected: &str,
    actual: &TaskValue,
    description: &str,
) -> TaskError {
    TaskError::data_validation(
        consumer,
        format!(
            "expected {expected} value from upstream result '{description}', got {}",
            actual.type_name()
        ),
    )
}

/// Outputs of the three level-1 tasks.
///
/// Constructed only once all three tasks completed successfully; stays live
/// until level 2 finishes, since Task5 reads all three fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Level1Results {
    pub task1: TaskResult,
    pub task2: TaskResult,
    pub task3: TaskResult,
}

/// Outputs of the two level-2 tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct Level2Results {
    pub task4: TaskResult,
    pub task5: TaskResult,
}
