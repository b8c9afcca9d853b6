// src/pipeline/executor.rs

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::errors::TaskError;
use crate::pipeline::join::{join_pair, join_triple};
use crate::pipeline::report::{self, PipelineReport};
use crate::pool::{JobHandle, WorkScheduler};
use crate::task::result::{Level1Results, Level2Results, TaskResult};
use crate::task::{FailureInjector, PipelineTask, Task1, Task2, Task3, Task4, Task5, Task6};

/// Executor lifecycle. Transitions only move forward; `Succeeded` and
/// `Failed` are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExecState {
    Idle,
    RunningLevel1,
    RunningLevel2,
    RunningLevel3,
    Succeeded,
    Failed,
}

/// Orchestrates the three DAG levels in sequence.
///
/// Each level's tasks are all submitted to the scheduler before any of them
/// is awaited, so siblings run in parallel bounded by pool size. A later
/// level is never submitted until the previous level's join has resolved,
/// which also means no task is ever dispatched after a failure.
pub struct DagExecutor {
    scheduler: Arc<dyn WorkScheduler>,
    injector: Arc<FailureInjector>,
    state: ExecState,
}

impl DagExecutor {
    pub fn new(scheduler: Arc<dyn WorkScheduler>, injector: Arc<FailureInjector>) -> Self {
        Self {
            scheduler,
            injector,
            state: ExecState::Idle,
        }
    }

    pub fn state(&self) -> ExecState {
        self.state
    }

    /// Run the whole pipeline to a terminal state.
    ///
    /// Does not return until the DAG has fully resolved one way or the
    /// other. On failure the captured error is surfaced together with the
    /// failing task's name and the elapsed time since pipeline start.
    pub async fn run(mut self) -> Result<PipelineReport, TaskError> {
        let started = Instant::now();

        match self.run_levels(started).await {
            Ok(report) => {
                self.transition(ExecState::Succeeded);
                report::print_success(&report);
                Ok(report)
            }
            Err(err) => {
                self.transition(ExecState::Failed);
                let elapsed = started.elapsed();
                warn!(
                    task = %err.task_name(),
                    kind = %err.kind(),
                    reason = %err.reason(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "pipeline failed"
                );
                report::print_failure(&err, elapsed);
                Err(err)
            }
        }
    }

    async fn run_levels(&mut self, started: Instant) -> Result<PipelineReport, TaskError> {
        self.transition(ExecState::RunningLevel1);
        let level1 = Arc::new(self.run_level1().await?);

        self.transition(ExecState::RunningLevel2);
        let level2 = Arc::new(self.run_level2(Arc::clone(&level1)).await?);

        self.transition(ExecState::RunningLevel3);
        let final_result = self.run_level3(Arc::clone(&level2)).await?;

        Ok(PipelineReport {
            level1,
            level2,
            final_result,
            elapsed: started.elapsed(),
        })
    }

    async fn run_level1(&self) -> Result<Level1Results, TaskError> {
        info!("starting level 1: independent tasks (Task1, Task2, Task3)");

        let h1 = self.submit(Task1::new(Arc::clone(&self.injector)));
        let h2 = self.submit(Task2::new(Arc::clone(&self.injector)));
        let h3 = self.submit(Task3::new(Arc::clone(&self.injector)));

        let (task1, task2, task3) = join_triple(h1, h2, h3).await?;
        let results = Level1Results { task1, task2, task3 };

        report::level1_completed(&results);
        Ok(results)
    }

    async fn run_level2(&self, level1: Arc<Level1Results>) -> Result<Level2Results, TaskError> {
        info!("starting level 2: dependent tasks (Task4, Task5)");

        let h4 = self.submit(Task4::new(Arc::clone(&level1), Arc::clone(&self.injector)));
        let h5 = self.submit(Task5::new(level1, Arc::clone(&self.injector)));

        let (task4, task5) = join_pair(h4, h5).await?;
        let results = Level2Results { task4, task5 };

        report::level2_completed(&results);
        Ok(results)
    }

    async fn run_level3(&self, level2: Arc<Level2Results>) -> Result<TaskResult, TaskError> {
        info!("starting level 3: final task (Task6)");

        let h6 = self.submit(Task6::new(level2, Arc::clone(&self.injector)));
        let final_result = h6.join().await?;

        report::level3_completed(&final_result);
        Ok(final_result)
    }

    fn submit<T: PipelineTask + 'static>(&self, task: T) -> JobHandle {
        let name = task.name();
        debug!(task = name, "submitting task to scheduler");
        self.scheduler.submit(name, Box::new(move || task.execute()))
    }

    fn transition(&mut self, next: ExecState) {
        if matches!(self.state, ExecState::Succeeded | ExecState::Failed) {
            return;
        }
        debug_assert!(next > self.state, "executor state may only move forward");
        debug!(from = ?self.state, to = ?next, "executor state transition");
        self.state = next;
    }
}
