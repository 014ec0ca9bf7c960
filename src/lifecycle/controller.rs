//! The lifecycle controller: an ordered shutdown state machine.
//!
//! # States
//! ```text
//! Starting → Serving → Draining → ShuttingDown → Stopped
//!                                      │
//!                                      └────────→ Failed
//! ```
//!
//! # Design Decisions
//! - The controller is the only component that starts or stops the server,
//!   and `run` consumes it, so both happen at most once
//! - Waiting on the shutdown subscription is the sole suspension point
//!   while serving; transitions never happen on a timer or request volume
//! - Grace-period expiry is reported but non-fatal: abandoning in-flight
//!   requests is the documented cost of the deadline, so the exit code
//!   stays 0. Serve errors and panics observed at join time exit 1.

use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::{broadcast, watch};

use crate::config::schema::ServerConfig;
use crate::config::validation::validate_config;
use crate::http::HttpServer;
use crate::lifecycle::cleanup::{run_tasks, CleanupTask};
use crate::lifecycle::shutdown::Shutdown;

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Starting,
    Serving,
    Draining,
    ShuttingDown,
    Stopped,
    Failed,
}

/// Drives the server through its lifecycle and yields a process exit code.
pub struct LifecycleController {
    config: ServerConfig,
    trigger_rx: broadcast::Receiver<()>,
    // Keeps the trigger channel open so a caller dropping its token is not
    // mistaken for a trigger.
    _shutdown: Shutdown,
    drain_tasks: Vec<CleanupTask>,
    post_stop_tasks: Vec<CleanupTask>,
    state_tx: watch::Sender<LifecycleState>,
}

impl LifecycleController {
    /// Create a controller with the default cleanup plan: one simulated
    /// cleanup sleep before draining and one after stopping, sized from the
    /// shutdown config. A zero delay installs no task.
    ///
    /// The shutdown subscription is registered here, at construction, so a
    /// trigger fired before [`run`] starts is held by the channel rather
    /// than lost.
    ///
    /// [`run`]: LifecycleController::run
    pub fn new(config: ServerConfig, shutdown: Shutdown) -> Self {
        let trigger_rx = shutdown.subscribe();
        let task_timeout = Duration::from_millis(config.shutdown.task_timeout_ms);

        let mut drain_tasks = Vec::new();
        if config.shutdown.drain_delay_ms > 0 {
            drain_tasks.push(CleanupTask::simulated(
                "simulated-cleanup",
                Duration::from_millis(config.shutdown.drain_delay_ms),
                task_timeout,
            ));
        }

        let mut post_stop_tasks = Vec::new();
        if config.shutdown.post_stop_delay_ms > 0 {
            post_stop_tasks.push(CleanupTask::simulated(
                "simulated-post-stop-cleanup",
                Duration::from_millis(config.shutdown.post_stop_delay_ms),
                task_timeout,
            ));
        }

        let (state_tx, _) = watch::channel(LifecycleState::Starting);
        Self {
            config,
            trigger_rx,
            _shutdown: shutdown,
            drain_tasks,
            post_stop_tasks,
            state_tx,
        }
    }

    /// Replace the tasks run between signal receipt and the drain request.
    pub fn with_drain_tasks(mut self, tasks: Vec<CleanupTask>) -> Self {
        self.drain_tasks = tasks;
        self
    }

    /// Replace the tasks run after a completed (or abandoned) drain.
    pub fn with_post_stop_tasks(mut self, tasks: Vec<CleanupTask>) -> Self {
        self.post_stop_tasks = tasks;
        self
    }

    /// Watch state transitions. Useful for tests and diagnostics.
    pub fn state_watch(&self) -> watch::Receiver<LifecycleState> {
        self.state_tx.subscribe()
    }

    fn transition(&self, next: LifecycleState) {
        let prev = self.state_tx.send_replace(next);
        tracing::info!(from = ?prev, to = ?next, "lifecycle state changed");
    }

    /// Run the full lifecycle. Returns the process exit code.
    pub async fn run(mut self) -> i32 {
        self.transition(LifecycleState::Starting);

        if let Err(errors) = validate_config(&self.config) {
            for error in &errors {
                tracing::error!(error = %error, "invalid configuration");
            }
            return 1;
        }

        let listener = match TcpListener::bind(&self.config.listener.bind_address).await {
            Ok(listener) => listener,
            Err(e) => {
                tracing::error!(
                    address = %self.config.listener.bind_address,
                    error = %e,
                    "failed to bind listener"
                );
                return 1;
            }
        };

        let server = HttpServer::new(&self.config.listener);
        let drain = Shutdown::new();
        let drain_rx = drain.subscribe();
        let server_handle = tokio::spawn(server.run(listener, drain_rx));

        self.transition(LifecycleState::Serving);
        tracing::info!("waiting for termination signal");

        // Sole suspension point while serving. The subscription was taken
        // at construction, so a trigger that raced startup is waiting here.
        // The controller holds a sender, so the channel cannot close
        // underneath us.
        let _ = self.trigger_rx.recv().await;

        self.transition(LifecycleState::Draining);
        run_tasks(std::mem::take(&mut self.drain_tasks)).await;

        self.transition(LifecycleState::ShuttingDown);
        drain.trigger();

        let grace = Duration::from_secs(self.config.shutdown.grace_period_secs);
        match tokio::time::timeout(grace, server_handle).await {
            Ok(Ok(Ok(()))) => {
                tracing::info!("server drained");
            }
            Ok(Ok(Err(e))) => {
                tracing::error!(error = %e, "server error during shutdown");
                self.transition(LifecycleState::Failed);
                return 1;
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "server task panicked");
                self.transition(LifecycleState::Failed);
                return 1;
            }
            Err(_) => {
                tracing::warn!(
                    grace_secs = self.config.shutdown.grace_period_secs,
                    "grace period elapsed before drain completed; abandoning in-flight requests"
                );
            }
        }

        self.transition(LifecycleState::Stopped);
        run_tasks(std::mem::take(&mut self.post_stop_tasks)).await;
        tracing::info!("server stopped");
        0
    }
}
