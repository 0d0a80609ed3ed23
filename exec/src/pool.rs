//! Bounded worker pool that runs the asynchronous store lookups.
//!
//! The pool owns a fixed number of tokio worker tasks draining a shared job
//! queue. `submit` never blocks: it hands the queue a type-erased job and
//! returns a [`Promise`] that the job settles from the worker side. Shutdown
//! is completion-driven: the queue is closed so further submissions are
//! rejected, queued and in-flight jobs run to completion, and every worker
//! is joined.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::thread;

use futures::future::BoxFuture;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::ExecError;
use crate::promise::{lock, Promise};

type Job = BoxFuture<'static, ()>;

/// Process-wide execution context: a fixed set of workers over one queue.
///
/// Created once at startup, shared by every data-access call, shut down once
/// after the last orchestration run has completed.
pub struct ExecutionContext {
    queue: Mutex<Option<mpsc::UnboundedSender<Job>>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl ExecutionContext {
    /// Spawn a pool with `workers` worker tasks (at least one).
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(workers: usize) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Job>();
        let rx = Arc::new(tokio::sync::Mutex::new(rx));

        let handles = (0..workers.max(1))
            .map(|_| {
                let rx = Arc::clone(&rx);
                tokio::spawn(async move {
                    loop {
                        // The guard is released before the job runs, so other
                        // workers can pick up jobs while this one is busy.
                        let job = { rx.lock().await.recv().await };
                        match job {
                            Some(job) => job.await,
                            None => break,
                        }
                    }
                })
            })
            .collect();

        Self {
            queue: Mutex::new(Some(tx)),
            workers: Mutex::new(handles),
        }
    }

    /// Pool sized to the number of available processing units.
    pub fn with_available_parallelism() -> Self {
        let workers = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        Self::new(workers)
    }

    /// Submit a task and immediately return the promise of its outcome.
    ///
    /// The task's result settles the promise on the worker that ran it. If
    /// the pool has been shut down the promise fails at once with
    /// [`ExecError::PoolClosed`]; submission itself never blocks.
    pub fn submit<T, E, F>(&self, task: F) -> Promise<T, E>
    where
        T: Send + 'static,
        E: From<ExecError> + Send + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let promise = Promise::new();
        let settles = promise.clone();
        let job: Job = Box::pin(async move { settles.settle(task.await) });

        let rejected = match lock(&self.queue).as_ref() {
            Some(tx) => tx.send(job).is_err(),
            None => true,
        };
        if rejected {
            promise.fail(E::from(ExecError::PoolClosed));
        }
        promise
    }

    /// Graceful shutdown: reject new submissions, let queued and in-flight
    /// jobs finish, then join every worker.
    pub async fn shutdown(&self) {
        drop(lock(&self.queue).take());

        let handles = std::mem::take(&mut *lock(&self.workers));
        for handle in handles {
            // A worker only errors if a job panicked; nothing left to do here.
            let _ = handle.await;
        }
    }
}
