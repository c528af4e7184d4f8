//! Dialer trait abstraction.
//!
//! The scan engine only needs a yes/no answer per port, so the probing
//! mechanism sits behind a small trait. `TcpDialer` is the production
//! implementation; tests plug in instrumented dialers.

use crate::types::Port;
use async_trait::async_trait;
use std::time::Duration;

/// A single-port reachability check.
///
/// # Example
///
/// ```ignore
/// use pscanner::scanner::{Dialer, TcpDialer};
///
/// async fn is_open<D: Dialer>(dialer: &D, port: Port) -> bool {
///     dialer.probe("127.0.0.1", port, Duration::from_millis(500)).await
/// }
/// ```
#[async_trait]
pub trait Dialer: Send + Sync {
    /// Returns `true` if `host:port` accepted a connection within `timeout`.
    ///
    /// Every failure (refused, timed out, unreachable, unresolvable) is
    /// reported as `false`. Implementations must not retry.
    async fn probe(&self, host: &str, port: Port, timeout: Duration) -> bool;
}

#[async_trait]
impl<D: Dialer + ?Sized> Dialer for std::sync::Arc<D> {
    async fn probe(&self, host: &str, port: Port, timeout: Duration) -> bool {
        (**self).probe(host, port, timeout).await
    }
}
