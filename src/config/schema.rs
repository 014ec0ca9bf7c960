//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! Every field has a default so that `ServerConfig::default()` produces a
//! runnable configuration.

/// Root configuration for the server.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Listener configuration (bind address, response body).
    pub listener: ListenerConfig,

    /// Shutdown timing configuration.
    pub shutdown: ShutdownConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Fixed body returned by `GET /check`.
    pub check_body: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            check_body: "works!!".to_string(),
        }
    }
}

/// Shutdown timing configuration.
///
/// The drain and post-stop delays size the default simulated-cleanup tasks;
/// callers that install their own cleanup tasks ignore them.
#[derive(Debug, Clone)]
pub struct ShutdownConfig {
    /// Maximum time to wait for in-flight requests once draining, in seconds.
    pub grace_period_secs: u64,

    /// Delay between signal receipt and the drain request, in milliseconds.
    pub drain_delay_ms: u64,

    /// Delay between a completed drain and process exit, in milliseconds.
    pub post_stop_delay_ms: u64,

    /// Per-cleanup-task timeout, in milliseconds.
    pub task_timeout_ms: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            grace_period_secs: 30,
            drain_delay_ms: 5_000,
            post_stop_delay_ms: 5_000,
            task_timeout_ms: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_runnable() {
        let config = ServerConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.listener.check_body, "works!!");
        assert_eq!(config.shutdown.grace_period_secs, 30);
    }
}
