//! Concurrent profile sessions.
//!
//! Lives in its own test binary because the profile endpoint's sampler is
//! process-global.

use std::time::Duration;

use checkd::lifecycle::Shutdown;

mod common;

#[tokio::test]
async fn second_profile_session_is_rejected() {
    let addr = "127.0.0.1:28551";
    let shutdown = Shutdown::new();
    let (handle, _) = common::spawn_server(common::test_config(addr), shutdown.clone());
    common::wait_until_serving(addr).await;

    let client = common::client();
    let first = tokio::spawn({
        let client = client.clone();
        let url = format!("http://{addr}/debug/pprof/profile?seconds=2");
        async move { client.get(url).send().await }
    });

    // Let the first session start sampling, then ask for another.
    tokio::time::sleep(Duration::from_millis(300)).await;
    let second = client
        .get(format!("http://{addr}/debug/pprof/profile?seconds=1"))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(second.status(), 503);

    // The rejected session does not disturb the running one.
    let first = first.await.unwrap().expect("first session was dropped");
    assert_eq!(first.status(), 200);
    assert!(!first.bytes().await.unwrap().is_empty());

    shutdown.trigger();
    assert_eq!(handle.await.unwrap(), 0);
}
