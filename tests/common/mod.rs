use std::sync::{Arc, Mutex};

use dagpipe::pool::{Job, JobHandle, WorkScheduler, WorkerPool};

/// Scheduler wrapper that records every submitted task name before
/// delegating to a real worker pool.
pub struct CountingScheduler {
    inner: WorkerPool,
    submitted: Arc<Mutex<Vec<String>>>,
}

impl CountingScheduler {
    pub fn new(workers: usize) -> (Arc<Self>, Arc<Mutex<Vec<String>>>) {
        let submitted = Arc::new(Mutex::new(Vec::new()));
        let scheduler = Arc::new(Self {
            inner: WorkerPool::new(workers),
            submitted: Arc::clone(&submitted),
        });
        (scheduler, submitted)
    }
}

impl WorkScheduler for CountingScheduler {
    fn submit(&self, task: &str, job: Job) -> JobHandle {
        self.submitted.lock().unwrap().push(task.to_string());
        self.inner.submit(task, job)
    }
}
