use std::sync::Arc;

use dagpipe::errors::ErrorKind;
use dagpipe::task::{
    FailureInjector, Level1Results, Level2Results, PipelineTask, Task4, Task5, Task6, TaskResult,
    TaskValue,
};

fn level1(task1: TaskValue, task2: TaskValue, task3: TaskValue) -> Arc<Level1Results> {
    Arc::new(Level1Results {
        task1: TaskResult::new(task1, "DataSourceA", "test"),
        task2: TaskResult::new(task2, "DataSourceB", "test"),
        task3: TaskResult::new(task3, "DataSourceC", "test"),
    })
}

fn healthy_level1() -> Arc<Level1Results> {
    level1(
        TaskValue::Numeric(42.5),
        TaskValue::Text("PROCESSED_DATA_B_73.2".to_string()),
        TaskValue::Integer(91),
    )
}

fn injector() -> Arc<FailureInjector> {
    Arc::new(FailureInjector::disabled())
}

#[test]
fn task4_rejects_zero_numeric_input_on_the_inclusive_boundary() {
    let inputs = level1(
        TaskValue::Numeric(0.0),
        TaskValue::Text("PROCESSED_DATA_B_73.2".to_string()),
        TaskValue::Integer(91),
    );

    let err = Task4::new(inputs, injector())
        .execute()
        .expect_err("zero input must fail validation");

    assert_eq!(err.task_name(), "Task4");
    assert_eq!(err.kind(), ErrorKind::DataValidation);
    assert!(err.reason().contains("invalid input from upstream"));
}

#[test]
fn task4_rejects_empty_text_input() {
    let inputs = level1(
        TaskValue::Numeric(42.5),
        TaskValue::Text(String::new()),
        TaskValue::Integer(91),
    );

    let err = Task4::new(inputs, injector())
        .execute()
        .expect_err("empty payload must fail validation");

    assert_eq!(err.kind(), ErrorKind::DataValidation);
    assert!(err.reason().contains("invalid input from upstream"));
}

#[test]
fn task4_fails_loudly_on_value_shape_mismatch() {
    let inputs = level1(
        TaskValue::Text("not a number".to_string()),
        TaskValue::Text("PROCESSED_DATA_B_73.2".to_string()),
        TaskValue::Integer(91),
    );

    let err = Task4::new(inputs, injector())
        .execute()
        .expect_err("shape mismatch must be a typed error");

    assert_eq!(err.task_name(), "Task4");
    assert_eq!(err.kind(), ErrorKind::DataValidation);
    assert!(err.reason().contains("expected numeric"));
}

#[test]
fn task5_rejects_non_positive_integer_input() {
    let inputs = level1(
        TaskValue::Numeric(42.5),
        TaskValue::Text("PROCESSED_DATA_B_73.2".to_string()),
        TaskValue::Integer(-3),
    );

    let err = Task5::new(inputs, injector())
        .execute()
        .expect_err("negative integer must fail validation");

    assert_eq!(err.task_name(), "Task5");
    assert_eq!(err.kind(), ErrorKind::DataValidation);
}

#[test]
fn task5_computes_the_mean_of_all_three_sources() {
    let result = Task5::new(healthy_level1(), injector())
        .execute()
        .expect("healthy inputs should aggregate");

    let expected = (42.5 + 73.2 + 91.0) / 3.0;
    match result.value {
        TaskValue::Numeric(v) => assert!((v - expected).abs() < 1e-9),
        other => panic!("expected numeric mean, got {other:?}"),
    }
    assert_eq!(result.description, "AggregatedABC");
}

#[test]
fn task6_rejects_non_positive_level2_values() {
    let inputs = Arc::new(Level2Results {
        task4: TaskResult::new(TaskValue::Numeric(115.7), "CombinedAB", "test"),
        task5: TaskResult::new(TaskValue::Numeric(-1.0), "AggregatedABC", "test"),
    });

    let err = Task6::new(inputs, injector())
        .execute()
        .expect_err("non-positive input must fail validation");

    assert_eq!(err.task_name(), "Task6");
    assert_eq!(err.kind(), ErrorKind::DataValidation);
}
