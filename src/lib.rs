//! # pscanner - A Fast Concurrent TCP Port Scanner
//!
//! pscanner finds which TCP ports on a single host accept connections. Ports
//! are dialed by a bounded pool of tokio tasks, so wall-clock time depends on
//! the pool size and the per-dial timeout rather than on the size of the port
//! range.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use pscanner::scanner::scan;
//! use pscanner::types::resolve;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ports = resolve("22,80,443,8000-8100").unwrap();
//!     let open = scan("192.168.1.1", &ports, 100, Duration::from_millis(500))
//!         .await
//!         .unwrap();
//!
//!     for port in open {
//!         println!("{port} open");
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Port newtypes and the port specification resolver
//! - [`scanner`] - Dialer pool, result aggregation and cancellation
//! - [`config`] - Settings file and XDG paths
//! - [`cli`] - Command-line flags and the scan command
//! - [`output`] - Plain text and JSON reports
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ConfigError, ScanError};
pub use scanner::{run_scan, scan, Dialer, ScanConfig, ScanReport, TcpDialer};
pub use types::{resolve, Port, PortError, PortSpec};
