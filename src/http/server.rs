//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the axum Router with all handlers
//! - Wire up middleware (request tracing)
//! - Serve on a pre-bound listener until told to drain

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::ListenerConfig;
use crate::http::{handlers, profile};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Fixed body returned by the health-check endpoint.
    pub check_body: Arc<str>,
}

/// The HTTP listener component.
///
/// Constructed once by the lifecycle controller, started once via [`run`],
/// and drained once via the receiver passed to it. The handle is consumed by
/// `run`, so a second start is unrepresentable.
///
/// [`run`]: HttpServer::run
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given listener configuration.
    pub fn new(config: &ListenerConfig) -> Self {
        let state = AppState {
            check_body: Arc::from(config.check_body.as_str()),
        };

        let router = Router::new()
            .route("/check", get(handlers::check))
            .route("/debug/pprof/profile", get(profile::cpu_profile))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        Self { router }
    }

    /// Serve connections on `listener` until `drain` fires, then stop
    /// accepting and wait for in-flight requests to complete.
    ///
    /// The wait after the drain signal is unbounded from this side; the
    /// caller enforces its own deadline by abandoning the task that awaits
    /// this future. Serve errors are returned here and therefore only
    /// observed when the caller joins the task.
    pub async fn run(
        self,
        listener: TcpListener,
        mut drain: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = drain.recv().await;
                tracing::info!("drain requested; no longer accepting connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
