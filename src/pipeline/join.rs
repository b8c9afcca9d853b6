// src/pipeline/join.rs

//! Level joins: wait for every task of one DAG level to reach a terminal
//! state, then yield either all results or the first failure.
//!
//! All handles must already have been submitted when a join starts, so
//! awaiting them one by one does not serialise the work. When more than one
//! task of a level fails, the error surfaced is the first in submission
//! order — a deterministic tie-break, not a wall-clock race. Siblings that
//! completed anyway have their results discarded, never consumed downstream.

use crate::errors::TaskError;
use crate::pool::JobHandle;
use crate::task::result::TaskResult;

/// Join a three-task level.
pub async fn join_triple(
    a: JobHandle,
    b: JobHandle,
    c: JobHandle,
) -> Result<(TaskResult, TaskResult, TaskResult), TaskError> {
    let outcome_a = a.join().await;
    let outcome_b = b.join().await;
    let outcome_c = c.join().await;
    Ok((outcome_a?, outcome_b?, outcome_c?))
}

/// Join a two-task level.
pub async fn join_pair(
    a: JobHandle,
    b: JobHandle,
) -> Result<(TaskResult, TaskResult), TaskError> {
    let outcome_a = a.join().await;
    let outcome_b = b.join().await;
    Ok((outcome_a?, outcome_b?))
}
