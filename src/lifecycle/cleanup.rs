//! Cleanup tasks run around server shutdown.
//!
//! # Responsibilities
//! - Represent each piece of shutdown-time work as a named future with its
//!   own timeout
//! - Run tasks in order; a task that overruns its timeout is abandoned and
//!   logged, never fatal
//!
//! # Design Decisions
//! - Tasks run sequentially: shutdown work is typically ordered (flush
//!   before close), and the set is small
//! - A timed-out task's future is dropped, not polled further

use std::future::Future;
use std::time::Duration;

use futures_util::future::BoxFuture;

/// A named unit of shutdown-time work with a bounded run time.
pub struct CleanupTask {
    name: String,
    timeout: Duration,
    work: BoxFuture<'static, ()>,
}

impl CleanupTask {
    /// Wrap a future as a cleanup task.
    pub fn new<F>(name: impl Into<String>, timeout: Duration, work: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            name: name.into(),
            timeout,
            work: Box::pin(work),
        }
    }

    /// A task that merely sleeps, standing in for real cleanup work.
    pub fn simulated(name: impl Into<String>, duration: Duration, timeout: Duration) -> Self {
        Self::new(name, timeout, async move {
            tokio::time::sleep(duration).await;
        })
    }

    /// The task's name, for logging.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Run cleanup tasks in order, bounding each by its own timeout.
pub async fn run_tasks(tasks: Vec<CleanupTask>) {
    for task in tasks {
        tracing::info!(
            task = %task.name,
            timeout_ms = task.timeout.as_millis() as u64,
            "running cleanup task"
        );
        if tokio::time::timeout(task.timeout, task.work).await.is_err() {
            tracing::warn!(task = %task.name, "cleanup task exceeded its timeout; abandoned");
        }
    }
}
