//! Draining with an in-flight request that outlives the grace period.
//!
//! Lives in its own test binary because the profile endpoint's sampler is
//! process-global.

use std::time::{Duration, Instant};

use checkd::lifecycle::Shutdown;

mod common;

#[tokio::test]
async fn request_exceeding_grace_is_abandoned_and_exit_is_clean() {
    let addr = "127.0.0.1:28541";
    let mut config = common::test_config(addr);
    config.shutdown.grace_period_secs = 1;
    let shutdown = Shutdown::new();
    let (handle, _) = common::spawn_server(config, shutdown.clone());
    common::wait_until_serving(addr).await;

    // A request that takes far longer than the grace period.
    let client = common::client();
    let url = format!("http://{addr}/debug/pprof/profile?seconds=30");
    let _slow = tokio::spawn(async move { client.get(url).send().await });

    tokio::time::sleep(Duration::from_millis(200)).await;
    let start = Instant::now();
    shutdown.trigger();

    // Deadline expiry is reported but non-fatal: abandoning in-flight
    // requests is the documented cost of the grace period.
    let code = handle.await.unwrap();
    let elapsed = start.elapsed();
    assert_eq!(code, 0);
    assert!(elapsed >= Duration::from_secs(1), "exited before the grace period: {elapsed:?}");
    assert!(elapsed < Duration::from_secs(10), "exit did not respect the deadline: {elapsed:?}");
}
