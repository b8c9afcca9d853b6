// src/pool/mod.rs

//! Bounded worker pool and the scheduler boundary the executor submits to.
//!
//! The executor only depends on [`WorkScheduler`], so tests can substitute
//! their own implementation (e.g. one that counts submissions).

use std::sync::Arc;

use tokio::sync::{Semaphore, oneshot};
use tokio::task::spawn_blocking;
use tracing::{debug, error};

use crate::errors::TaskError;
use crate::task::result::TaskResult;

/// Unit of work accepted by a [`WorkScheduler`].
pub type Job = Box<dyn FnOnce() -> Result<TaskResult, TaskError> + Send + 'static>;

/// Scheduler boundary: submit a named job, get back a handle to await.
///
/// Multiple submissions may be in flight before any of them is awaited;
/// that is how a DAG level achieves parallelism.
pub trait WorkScheduler: Send + Sync {
    fn submit(&self, task: &str, job: Job) -> JobHandle;
}

/// Handle to a submitted job.
pub struct JobHandle {
    task: String,
    rx: oneshot::Receiver<Result<TaskResult, TaskError>>,
}

impl JobHandle {
    pub fn new(
        task: impl Into<String>,
        rx: oneshot::Receiver<Result<TaskResult, TaskError>>,
    ) -> Self {
        Self {
            task: task.into(),
            rx,
        }
    }

    /// Name of the task this handle belongs to.
    pub fn task(&self) -> &str {
        &self.task
    }

    /// Wait for the job to reach a terminal state.
    ///
    /// A worker that dropped the job without reporting (e.g. a panic inside
    /// the closure) surfaces as a `TaskExecution` error, never a hang.
    pub async fn join(self) -> Result<TaskResult, TaskError> {
        match self.rx.await {
            Ok(outcome) => outcome,
            Err(_) => Err(TaskError::task_execution(
                self.task,
                "worker dropped the job before completion",
            )),
        }
    }
}

/// Fixed-size worker pool on top of tokio's blocking thread pool.
///
/// A semaphore with one permit per worker bounds how many jobs run at the
/// same time; the jobs themselves are synchronous closures executed via
/// `spawn_blocking`. Dispatch is not FIFO-fair and callers must not rely on
/// any ordering between jobs.
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    workers: usize,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Self {
        let workers = workers.max(1);
        Self {
            permits: Arc::new(Semaphore::new(workers)),
            workers,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl WorkScheduler for WorkerPool {
    fn submit(&self, task: &str, job: Job) -> JobHandle {
        let name = task.to_string();
        let permits = Arc::clone(&self.permits);
        let (tx, rx) = oneshot::channel();

        let job_name = name.clone();
        tokio::spawn(async move {
            let _permit = match permits.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    debug!(task = %job_name, "pool closed before job could start");
                    return;
                }
            };

            debug!(task = %job_name, "job acquired a worker slot");

            match spawn_blocking(job).await {
                Ok(outcome) => {
                    // The receiver may be gone if the caller gave up on the
                    // level; the result is simply discarded then.
                    let _ = tx.send(outcome);
                }
                Err(err) => {
                    error!(task = %job_name, error = %err, "worker panicked while running job");
                }
            }
        });

        JobHandle::new(name, rx)
    }
}
