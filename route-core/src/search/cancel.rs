//! Cancellation token for in-flight searches.

use std::sync::Arc;

use tokio::sync::watch;

/// A cloneable cancellation handle.
///
/// Cancelling is idempotent and observable from every clone. The token
/// only ever transitions false -> true.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    /// A fresh, uncancelled token.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        // send_replace stores the value even when no receiver has
        // subscribed yet, so a cancel issued before any waiter is kept
        self.tx.send_replace(true);
    }

    /// Returns true once `cancel` has been called.
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves when the token is cancelled. Resolves immediately if it
    /// already was.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                // Sender gone without cancelling: stay pending forever
                // rather than spuriously resolve. Unreachable while any
                // clone of this token is alive.
                std::future::pending::<()>().await;
            }
        }
    }
}
