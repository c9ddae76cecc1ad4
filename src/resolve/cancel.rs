//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cancellation flag shared between a caller and in-flight resolutions.
///
/// Cloning yields a handle to the same flag. Resolution checks it on entry
/// and before every hop, so cancelling from another thread stops a long
/// chain at the next step. Nothing is interrupted preemptively.
///
/// # Example
///
/// ```rust
/// use token_resolver::{CancellationToken, TokenResolver, TokenStore};
///
/// let resolver = TokenResolver::new(TokenStore::defaults()).unwrap();
/// let ctx = CancellationToken::new();
/// assert!(resolver.resolve(&ctx, "semantic.colors.primary").is_ok());
///
/// ctx.cancel();
/// assert!(resolver.resolve(&ctx, "semantic.colors.primary").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation to every clone of this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns true once [`cancel`](Self::cancel) has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
