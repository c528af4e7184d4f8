//! TCP connect dialer.
//!
//! Performs a plain TCP connect through the operating system's socket API
//! and hangs up as soon as the handshake completes. No data is exchanged.

use crate::scanner::traits::Dialer;
use crate::types::Port;
use async_trait::async_trait;
use std::io;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

/// TCP connect dialer.
///
/// Name resolution happens inside the connect call, so the per-attempt
/// deadline covers DNS as well as the handshake. A zero deadline means the
/// dial waits for the operating system to give up. Does not require
/// elevated privileges.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpDialer;

impl TcpDialer {
    /// Create a new TCP dialer.
    pub const fn new() -> Self {
        Self
    }

    /// Attempt to connect to `host:port` within `limit`.
    async fn attempt_connect(host: &str, port: u16, limit: Duration) -> io::Result<TcpStream> {
        if limit.is_zero() {
            return TcpStream::connect((host, port)).await;
        }

        match timeout(limit, TcpStream::connect((host, port))).await {
            Ok(result) => result,
            Err(_) => Err(io::Error::new(io::ErrorKind::TimedOut, "dial timed out")),
        }
    }
}

#[async_trait]
impl Dialer for TcpDialer {
    async fn probe(&self, host: &str, port: Port, timeout: Duration) -> bool {
        match Self::attempt_connect(host, port.as_u16(), timeout).await {
            Ok(stream) => {
                drop(stream);
                true
            }
            Err(e) => {
                trace!(host, port = port.as_u16(), error = %e, "port not open");
                false
            }
        }
    }
}
