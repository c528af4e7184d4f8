//! Scan engine - fans ports out to a bounded dialer pool and fans open ports
//! back in.
//!
//! A scan uses two channels: a job channel buffered to the pool size, read by
//! every dialer through one shared receiver, and a result channel with a
//! single slot so dialers are held back by a slow consumer. The pool size is
//! clamped to the number of ports, so no dialer is ever idle from the start.

pub mod aggregator;
pub mod cancel;
pub mod tcp;
pub mod traits;
mod worker;

use crate::error::{ScanError, ScanResult};
use crate::types::Port;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tracing::debug;

pub use cancel::{cancel_pair, CancelHandle, CancelSignal};
pub use tcp::TcpDialer;
pub use traits::Dialer;

use worker::DialerContext;

/// Default size of the dialer pool.
pub const DEFAULT_WORKERS: usize = 100;

/// Default per-dial deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(500);

/// Configuration for a scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Target host name or address.
    pub host: String,
    /// Ports to dial, ascending and unique.
    pub ports: Vec<Port>,
    /// Requested pool size, before clamping.
    pub workers: usize,
    /// Deadline for each individual dial.
    pub timeout: Duration,
}

impl ScanConfig {
    /// Create a new scan configuration with default pool size and timeout.
    pub fn new(host: impl Into<String>, ports: Vec<Port>) -> Self {
        Self {
            host: host.into(),
            ports,
            workers: DEFAULT_WORKERS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the requested pool size.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the per-dial timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pool size actually used: never more dialers than ports.
    pub fn effective_workers(&self) -> usize {
        self.workers.min(self.ports.len())
    }

    fn validate(&self) -> ScanResult<()> {
        if self.host.trim().is_empty() {
            return Err(ScanError::InvalidConfig("host must not be empty".into()));
        }
        if self.workers == 0 {
            return Err(ScanError::InvalidConfig("worker count must be >= 1".into()));
        }
        if self.ports.is_empty() {
            return Err(ScanError::InvalidConfig("no ports to scan".into()));
        }
        Ok(())
    }
}

/// Outcome of a completed scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub host: String,
    pub ports_scanned: usize,
    pub workers_used: usize,
    pub timeout_ms: u64,
    /// Open ports, ascending.
    pub open_ports: Vec<Port>,
    /// Dials actually issued; equals `ports_scanned` unless cancelled.
    pub dial_attempts: usize,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    /// Set only when cancellation cut the scan short.
    pub cancelled: bool,
}

/// Scan `host` and return its open ports in ascending order.
pub async fn scan(
    host: &str,
    ports: &[Port],
    workers: usize,
    timeout: Duration,
) -> ScanResult<Vec<Port>> {
    let config = ScanConfig::new(host, ports.to_vec())
        .with_workers(workers)
        .with_timeout(timeout);
    Ok(run_scan(config).await?.open_ports)
}

/// Execute a complete TCP connect scan.
pub async fn run_scan(config: ScanConfig) -> ScanResult<ScanReport> {
    run_scan_with(config, TcpDialer::new(), CancelSignal::never()).await
}

/// Execute a scan with a custom dialer and cancellation signal.
pub async fn run_scan_with<D>(
    config: ScanConfig,
    dialer: D,
    cancel: CancelSignal,
) -> ScanResult<ScanReport>
where
    D: Dialer + 'static,
{
    config.validate()?;

    let started_at = Utc::now();
    let start_time = Instant::now();
    let workers = config.effective_workers();
    let ScanConfig {
        host,
        ports,
        timeout,
        ..
    } = config;
    let ports_scanned = ports.len();

    debug!(
        %host,
        ports = ports_scanned,
        workers,
        timeout_ms = timeout.as_millis() as u64,
        "starting scan"
    );

    let (jobs_tx, jobs_rx) = mpsc::channel(workers);
    let (results_tx, results_rx) = mpsc::channel(1);
    let jobs = Arc::new(Mutex::new(jobs_rx));
    let shared_host: Arc<str> = Arc::from(host.as_str());
    let dialer = Arc::new(dialer);

    let mut pool = JoinSet::new();
    for id in 0..workers {
        let ctx = DialerContext {
            host: Arc::clone(&shared_host),
            timeout,
            dialer: Arc::clone(&dialer),
            jobs: Arc::clone(&jobs),
            results: results_tx.clone(),
            cancel: cancel.clone(),
        };
        pool.spawn(worker::run_dialer(id, ctx));
    }

    let distributor = tokio::spawn(worker::distribute(ports, jobs_tx, cancel.clone()));
    let coordinator = tokio::spawn(worker::coordinate(pool, results_tx));

    let open_ports = aggregator::collect(results_rx).await;

    let dial_attempts = coordinator
        .await
        .map_err(|e| ScanError::WorkerFailed(e.to_string()))??;
    let queued = distributor
        .await
        .map_err(|e| ScanError::WorkerFailed(e.to_string()))?;

    let duration = start_time.elapsed();
    // A cancel that arrives after the last dial leaves a complete report.
    let cancelled = cancel.is_cancelled() && dial_attempts < ports_scanned;

    debug!(
        open = open_ports.len(),
        queued,
        dial_attempts,
        cancelled,
        duration_ms = duration.as_millis() as u64,
        "scan finished"
    );

    Ok(ScanReport {
        host,
        ports_scanned,
        workers_used: workers,
        timeout_ms: timeout.as_millis() as u64,
        open_ports,
        dial_attempts,
        started_at,
        duration_ms: duration.as_millis() as u64,
        cancelled,
    })
}
