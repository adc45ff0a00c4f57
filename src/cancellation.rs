//! Caller-driven cancellation of in-flight requests.

use std::sync::Arc;

/// A signal that aborts requests issued through a client scoped with
/// [`Client::with_cancellation`](crate::Client::with_cancellation).
///
/// Clones share the same signal. Once cancelled, a token stays cancelled:
/// in-flight requests fail with
/// [`ErrorKind::Cancelled`](crate::ErrorKind::Cancelled) and later requests
/// fail before they are sent.
///
/// ## Example
///
/// ```rust,no_run
/// # async fn example(client: bunnynet::Client) {
/// use bunnynet::CancellationToken;
///
/// let token = CancellationToken::new();
/// let scoped = client.with_cancellation(token.clone());
///
/// tokio::spawn(async move {
///     tokio::time::sleep(std::time::Duration::from_secs(1)).await;
///     token.cancel();
/// });
///
/// let result = scoped.dns_zones().list_all(0, None).await;
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    sender: Arc<tokio::sync::watch::Sender<bool>>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    pub fn new() -> Self {
        let (sender, _receiver) = tokio::sync::watch::channel(false);
        Self { sender: Arc::new(sender) }
    }

    /// Fires the signal.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Check if cancellation has been triggered.
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Completes once the token is cancelled.
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as `self`, so this only returns on cancel.
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
