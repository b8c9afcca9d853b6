use std::sync::Arc;

use dagpipe::pipeline::{DagExecutor, ExecState};
use dagpipe::pool::WorkerPool;
use dagpipe::task::{FailureInjector, TaskValue};

fn executor(workers: usize) -> DagExecutor {
    DagExecutor::new(
        Arc::new(WorkerPool::new(workers)),
        Arc::new(FailureInjector::disabled()),
    )
}

fn numeric(value: &TaskValue) -> f64 {
    match value {
        TaskValue::Numeric(v) => *v,
        other => panic!("expected numeric value, got {other:?}"),
    }
}

#[tokio::test]
async fn pipeline_produces_weighted_final_score() {
    let executor = executor(4);
    assert_eq!(executor.state(), ExecState::Idle);

    let report = executor.run().await.expect("pipeline should succeed");

    // Constants flow down the levels: 42.5, text field 73.2, integer 91.
    let expected_task4 = 42.5 + 73.2;
    let expected_task5 = (42.5 + 73.2 + 91.0) / 3.0;
    let expected_task6 = expected_task4 * 0.6 + expected_task5 * 0.4;

    assert!((numeric(&report.level2.task4.value) - expected_task4).abs() < 1e-9);
    assert!((numeric(&report.level2.task5.value) - expected_task5).abs() < 1e-9);
    assert!((numeric(&report.final_result.value) - expected_task6).abs() < 1e-9);

    assert_eq!(report.final_result.description, "FinalScore");
}

#[tokio::test]
async fn level1_results_keep_their_typed_values() {
    let report = executor(4).run().await.expect("pipeline should succeed");

    assert_eq!(report.level1.task1.value, TaskValue::Numeric(42.5));
    assert_eq!(
        report.level1.task2.value,
        TaskValue::Text("PROCESSED_DATA_B_73.2".to_string())
    );
    assert_eq!(report.level1.task3.value, TaskValue::Integer(91));

    assert_eq!(report.level1.task1.description, "DataSourceA");
    assert_eq!(report.level1.task2.provenance, "Secondary data warehouse");
}

#[tokio::test]
async fn two_runs_with_the_same_config_yield_identical_results() {
    let first = executor(4).run().await.expect("first run should succeed");
    let second = executor(4).run().await.expect("second run should succeed");

    assert_eq!(first.final_result.value, second.final_result.value);
    assert_eq!(*first.level1, *second.level1);
    assert_eq!(*first.level2, *second.level2);
}

#[tokio::test]
async fn pipeline_succeeds_even_with_a_single_worker() {
    let report = executor(1).run().await.expect("pipeline should succeed");
    assert_eq!(report.final_result.description, "FinalScore");
}
