// src/task/nodes.rs

//! The six concrete tasks of the fixed DAG:
//!
//! ```text
//! Task1 ──┬──► Task4 ──┐
//! Task2 ──┤            ├──► Task6
//!         ├──► Task5 ──┘
//! Task3 ──┘
//! ```
//!
//! Each task simulates a fixed amount of work, consults the shared
//! [`FailureInjector`], validates its upstream inputs and produces a typed
//! [`TaskResult`].

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::info;

use crate::errors::TaskError;
use crate::task::PipelineTask;
use crate::task::inject::FailureInjector;
use crate::task::result::{Level1Results, Level2Results, TaskResult, TaskValue};

/// All task names, in submission order, for config validation and reporting.
pub const TASK_NAMES: [&str; 6] = ["Task1", "Task2", "Task3", "Task4", "Task5", "Task6"];

const DATA_SOURCE_A_VALUE: f64 = 42.5;
const DATA_SOURCE_B_PAYLOAD: &str = "PROCESSED_DATA_B_73.2";
const DATA_SOURCE_C_VALUE: i64 = 91;

/// Weights Task6 applies to the two level-2 results.
const FINAL_WEIGHT_COMBINED: f64 = 0.6;
const FINAL_WEIGHT_AGGREGATED: f64 = 0.4;

/// Extract the numeric field of a DataSourceB payload.
///
/// Contract: given a non-empty payload produced by Task2, return the numeric
/// component it encodes. The current implementation is a stand-in that
/// returns a fixed constant instead of parsing the payload; callers must not
/// rely on it for arbitrary inputs.
fn numeric_field_of_source_b(_payload: &str) -> f64 {
    73.2
}

fn simulate_work(millis: u64) {
    thread::sleep(Duration::from_millis(millis));
}

fn log_progress(task: &str, activity: &str) {
    info!(task, worker = ?thread::current().id(), "{activity}");
}

fn require_positive(task: &str, source: &str, value: f64) -> Result<(), TaskError> {
    if value <= 0.0 {
        return Err(TaskError::data_validation(
            task,
            format!("invalid input from upstream: non-positive {source} value ({value})"),
        ));
    }
    Ok(())
}

fn require_non_empty(task: &str, source: &str, text: &str) -> Result<(), TaskError> {
    if text.is_empty() {
        return Err(TaskError::data_validation(
            task,
            format!("invalid input from upstream: empty {source} payload"),
        ));
    }
    Ok(())
}

/// Level 1: processes data source A into a numeric value.
pub struct Task1 {
    injector: Arc<FailureInjector>,
}

impl Task1 {
    pub fn new(injector: Arc<FailureInjector>) -> Self {
        Self { injector }
    }
}

impl PipelineTask for Task1 {
    fn name(&self) -> &'static str {
        "Task1"
    }

    fn execute(&self) -> Result<TaskResult, TaskError> {
        log_progress(self.name(), "processing data source A");
        simulate_work(100);

        if self.injector.should_fail(self.name()) {
            return Err(TaskError::data_validation(
                self.name(),
                "injected failure: corrupted record batch in data source A",
            ));
        }

        Ok(TaskResult::new(
            TaskValue::Numeric(DATA_SOURCE_A_VALUE),
            "DataSourceA",
            "Primary data repository",
        ))
    }
}

/// Level 1: processes data source B into a text payload.
pub struct Task2 {
    injector: Arc<FailureInjector>,
}

impl Task2 {
    pub fn new(injector: Arc<FailureInjector>) -> Self {
        Self { injector }
    }
}

impl PipelineTask for Task2 {
    fn name(&self) -> &'static str {
        "Task2"
    }

    fn execute(&self) -> Result<TaskResult, TaskError> {
        log_progress(self.name(), "processing data source B");
        simulate_work(80);

        if self.injector.should_fail(self.name()) {
            return Err(TaskError::resource_exhaustion(
                self.name(),
                "injected failure: connection pool to data warehouse B exhausted",
            ));
        }

        Ok(TaskResult::new(
            TaskValue::Text(DATA_SOURCE_B_PAYLOAD.to_string()),
            "DataSourceB",
            "Secondary data warehouse",
        ))
    }
}

/// Level 1: fetches data source C as an integer value.
pub struct Task3 {
    injector: Arc<FailureInjector>,
}

impl Task3 {
    pub fn new(injector: Arc<FailureInjector>) -> Self {
        Self { injector }
    }
}

impl PipelineTask for Task3 {
    fn name(&self) -> &'static str {
        "Task3"
    }

    fn execute(&self) -> Result<TaskResult, TaskError> {
        log_progress(self.name(), "processing data source C");
        simulate_work(120);

        if self.injector.should_fail(self.name()) {
            return Err(TaskError::task_execution(
                self.name(),
                "injected failure: timeout contacting external API C",
            ));
        }

        Ok(TaskResult::new(
            TaskValue::Integer(DATA_SOURCE_C_VALUE),
            "DataSourceC",
            "External API endpoint",
        ))
    }
}

/// Level 2: combines DataSourceA with the numeric field of DataSourceB.
pub struct Task4 {
    inputs: Arc<Level1Results>,
    injector: Arc<FailureInjector>,
}

impl Task4 {
    pub fn new(inputs: Arc<Level1Results>, injector: Arc<FailureInjector>) -> Self {
        Self { inputs, injector }
    }
}

impl PipelineTask for Task4 {
    fn name(&self) -> &'static str {
        "Task4"
    }

    fn execute(&self) -> Result<TaskResult, TaskError> {
        log_progress(self.name(), "combining DataSourceA + DataSourceB");
        simulate_work(60);

        if self.injector.should_fail(self.name()) {
            return Err(TaskError::data_validation(
                self.name(),
                "injected failure: merged payload failed schema validation",
            ));
        }

        let value_a = self.inputs.task1.numeric_value(self.name())?;
        let payload_b = self.inputs.task2.text_value(self.name())?;

        require_positive(self.name(), "DataSourceA", value_a)?;
        require_non_empty(self.name(), "DataSourceB", payload_b)?;

        let combined = value_a + numeric_field_of_source_b(payload_b);

        Ok(TaskResult::new(
            TaskValue::Numeric(combined),
            "CombinedAB",
            "Merged DataSourceA with the numeric field of DataSourceB",
        ))
    }
}

/// Level 2: aggregates all three level-1 values into their mean.
pub struct Task5 {
    inputs: Arc<Level1Results>,
    injector: Arc<FailureInjector>,
}

impl Task5 {
    pub fn new(inputs: Arc<Level1Results>, injector: Arc<FailureInjector>) -> Self {
        Self { inputs, injector }
    }
}

impl PipelineTask for Task5 {
    fn name(&self) -> &'static str {
        "Task5"
    }

    fn execute(&self) -> Result<TaskResult, TaskError> {
        log_progress(self.name(), "aggregating all data sources");
        simulate_work(90);

        if self.injector.should_fail(self.name()) {
            return Err(TaskError::resource_exhaustion(
                self.name(),
                "injected failure: aggregation buffer limit reached",
            ));
        }

        let value_a = self.inputs.task1.numeric_value(self.name())?;
        let payload_b = self.inputs.task2.text_value(self.name())?;
        let value_c = self.inputs.task3.integer_value(self.name())?;

        require_positive(self.name(), "DataSourceA", value_a)?;
        require_non_empty(self.name(), "DataSourceB", payload_b)?;
        require_positive(self.name(), "DataSourceC", value_c as f64)?;

        let mean = (value_a + numeric_field_of_source_b(payload_b) + value_c as f64) / 3.0;

        Ok(TaskResult::new(
            TaskValue::Numeric(mean),
            "AggregatedABC",
            "Mean of the three level-1 source values",
        ))
    }
}

/// Level 3: weighted combination of the two level-2 results.
pub struct Task6 {
    inputs: Arc<Level2Results>,
    injector: Arc<FailureInjector>,
}

impl Task6 {
    pub fn new(inputs: Arc<Level2Results>, injector: Arc<FailureInjector>) -> Self {
        Self { inputs, injector }
    }
}

impl PipelineTask for Task6 {
    fn name(&self) -> &'static str {
        "Task6"
    }

    fn execute(&self) -> Result<TaskResult, TaskError> {
        log_progress(self.name(), "computing final weighted score");
        simulate_work(50);

        if self.injector.should_fail(self.name()) {
            return Err(TaskError::task_execution(
                self.name(),
                "injected failure: result format incompatible with report sink",
            ));
        }

        let combined = self.inputs.task4.numeric_value(self.name())?;
        let aggregated = self.inputs.task5.numeric_value(self.name())?;

        require_positive(self.name(), "CombinedAB", combined)?;
        require_positive(self.name(), "AggregatedABC", aggregated)?;

        let score = combined * FINAL_WEIGHT_COMBINED + aggregated * FINAL_WEIGHT_AGGREGATED;

        Ok(TaskResult::new(
            TaskValue::Numeric(score),
            "FinalScore",
            "Weighted combination of level-2 results",
        ))
    }
}
