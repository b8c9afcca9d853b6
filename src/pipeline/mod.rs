// src/pipeline/mod.rs

//! Level-by-level orchestration of the fixed task DAG.

pub mod executor;
pub mod join;
pub mod report;

pub use executor::{DagExecutor, ExecState};
pub use report::PipelineReport;
