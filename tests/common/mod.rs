//! Shared utilities for integration tests.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use checkd::config::schema::{ListenerConfig, ServerConfig, ShutdownConfig};
use checkd::lifecycle::{LifecycleController, LifecycleState, Shutdown};

/// Config bound to a loopback address with all artificial delays removed,
/// so tests only pay for the delays they install themselves.
#[allow(dead_code)]
pub fn test_config(addr: &str) -> ServerConfig {
    ServerConfig {
        listener: ListenerConfig {
            bind_address: addr.to_string(),
            ..ListenerConfig::default()
        },
        shutdown: ShutdownConfig {
            grace_period_secs: 5,
            drain_delay_ms: 0,
            post_stop_delay_ms: 0,
            task_timeout_ms: 10_000,
        },
    }
}

/// Spawn a controller, returning the exit-code handle and a state watch.
#[allow(dead_code)]
pub fn spawn_controller(
    controller: LifecycleController,
) -> (JoinHandle<i32>, watch::Receiver<LifecycleState>) {
    let states = controller.state_watch();
    (tokio::spawn(controller.run()), states)
}

/// Build and spawn a controller for `config` in one step.
#[allow(dead_code)]
pub fn spawn_server(
    config: ServerConfig,
    shutdown: Shutdown,
) -> (JoinHandle<i32>, watch::Receiver<LifecycleState>) {
    spawn_controller(LifecycleController::new(config, shutdown))
}

/// Poll `GET /check` until it answers 200 or the deadline passes.
#[allow(dead_code)]
pub async fn wait_until_serving(addr: &str) {
    let client = client();
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        if let Ok(res) = client.get(format!("http://{addr}/check")).send().await {
            if res.status().is_success() {
                return;
            }
        }
        if tokio::time::Instant::now() > deadline {
            panic!("server at {addr} did not become ready");
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

/// Wait until the state watch reports `target`, with a deadline.
#[allow(dead_code)]
pub async fn wait_for_state(rx: &mut watch::Receiver<LifecycleState>, target: LifecycleState) {
    let wait = async {
        loop {
            if *rx.borrow() == target {
                return;
            }
            if rx.changed().await.is_err() {
                panic!("state channel closed before reaching {target:?}");
            }
        }
    };
    tokio::time::timeout(Duration::from_secs(10), wait)
        .await
        .unwrap_or_else(|_| panic!("timed out waiting for state {target:?}"));
}

/// A client that never routes loopback traffic through a proxy.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("failed to build test client")
}
