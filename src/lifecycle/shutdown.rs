//! Shutdown token.

use tokio::sync::broadcast;

/// A cloneable shutdown token.
///
/// One or more producers (the OS signal listener, a test harness) call
/// [`trigger`]; the lifecycle controller holds a subscription and treats the
/// first delivery as the request to begin draining. Additional triggers are
/// absorbed by the channel and have no further effect.
///
/// [`trigger`]: Shutdown::trigger
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown token.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Request shutdown. Safe to call from any task, any number of times.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of live subscriptions.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
