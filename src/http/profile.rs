//! On-demand CPU profiling endpoint.
//!
//! # Responsibilities
//! - `GET /debug/pprof/profile[?seconds=N]`: sample the process for N
//!   seconds (default 30) and return a pprof-encoded profile
//! - Reject concurrent profile sessions (the profiler is process-global)
//!
//! # Design Decisions
//! - Sampling happens inside the request handler; a slow response is the
//!   point of the endpoint, not a bug
//! - The sampling window is clamped so a caller cannot pin the profiler
//!   for an unbounded time

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use pprof::protos::Message;
use serde::Deserialize;

/// Default sampling window, matching the conventional pprof behavior.
const DEFAULT_SECONDS: u64 = 30;

/// Upper bound on the sampling window.
const MAX_SECONDS: u64 = 300;

/// Sampling frequency in Hz.
const FREQUENCY: i32 = 100;

/// Guards the process-global profiler: one session at a time.
static PROFILER_ACTIVE: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Deserialize)]
pub struct ProfileParams {
    /// Sampling window in seconds.
    pub seconds: Option<u64>,
}

/// `GET /debug/pprof/profile` — sample the CPU and return the profile.
pub async fn cpu_profile(Query(params): Query<ProfileParams>) -> Response {
    let seconds = params.seconds.unwrap_or(DEFAULT_SECONDS).clamp(1, MAX_SECONDS);

    if PROFILER_ACTIVE.swap(true, Ordering::SeqCst) {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            "a profile session is already running\n",
        )
            .into_response();
    }

    tracing::info!(seconds, "CPU profile started");
    let result = sample(Duration::from_secs(seconds)).await;
    PROFILER_ACTIVE.store(false, Ordering::SeqCst);

    match result {
        Ok(body) => {
            tracing::info!(bytes = body.len(), "CPU profile complete");
            (
                [(header::CONTENT_TYPE, "application/octet-stream")],
                body,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "CPU profile failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("profile failed: {e}\n"),
            )
                .into_response()
        }
    }
}

/// Run one sampling window and encode the result as a pprof protobuf.
async fn sample(window: Duration) -> Result<Vec<u8>, pprof::Error> {
    let guard = pprof::ProfilerGuardBuilder::default()
        .frequency(FREQUENCY)
        .blocklist(&["libc", "libgcc", "pthread", "vdso"])
        .build()?;

    tokio::time::sleep(window).await;

    let report = guard.report().build()?;
    let profile = report.pprof()?;
    Ok(profile.encode_to_vec())
}
