//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGINT, SIGTERM)
//! - Translate the first signal into a shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Signals are just one producer on the shutdown token; the controller
//!   never touches the OS signal machinery itself

use crate::lifecycle::shutdown::Shutdown;

/// Wait for a termination signal, then trigger `shutdown`.
///
/// Returns after triggering. The handlers stay installed, so a second
/// signal during the drain window is absorbed and has no further effect.
#[cfg(unix)]
pub async fn listen(shutdown: Shutdown) {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = match signal(SignalKind::interrupt()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "failed to register SIGINT handler");
            return;
        }
    };
    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "failed to register SIGTERM handler");
            return;
        }
    };

    tokio::select! {
        _ = interrupt.recv() => tracing::info!(signal = "SIGINT", "termination signal received"),
        _ = terminate.recv() => tracing::info!(signal = "SIGTERM", "termination signal received"),
    }

    shutdown.trigger();
}

/// Wait for Ctrl-C, then trigger `shutdown`.
#[cfg(windows)]
pub async fn listen(shutdown: Shutdown) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to register Ctrl-C handler");
        return;
    }
    tracing::info!(signal = "ctrl-c", "termination signal received");
    shutdown.trigger();
}
