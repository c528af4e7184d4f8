//! Worker pool tasks: distributor, dialers and the drain coordinator.
//!
//! Shutdown order:
//! 1. the distributor drops the job sender after the last port,
//! 2. each dialer drains what is buffered and exits on the closed channel,
//! 3. the coordinator joins every dialer, then drops the last result sender,
//! 4. the aggregator sees the closed result channel and returns.
//!
//! Every channel has exactly one closer, so no path blocks forever.

use crate::error::{ScanError, ScanResult};
use crate::scanner::cancel::CancelSignal;
use crate::scanner::traits::Dialer;
use crate::types::Port;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Job receiver shared by every dialer. Each port is received by exactly one.
pub(crate) type JobQueue = Arc<Mutex<mpsc::Receiver<Port>>>;

/// Per-dialer inputs that stay fixed for the whole scan.
pub(crate) struct DialerContext<D> {
    pub host: Arc<str>,
    pub timeout: Duration,
    pub dialer: Arc<D>,
    pub jobs: JobQueue,
    pub results: mpsc::Sender<Port>,
    pub cancel: CancelSignal,
}

/// Dial ports from the shared queue until it is closed and drained.
///
/// Only open ports are sent on. Returns how many ports this dialer dialed.
pub(crate) async fn run_dialer<D: Dialer>(id: usize, ctx: DialerContext<D>) -> usize {
    let mut dialed = 0;

    loop {
        if ctx.cancel.is_cancelled() {
            debug!(worker = id, "cancelled");
            break;
        }

        let next = ctx.jobs.lock().await.recv().await;
        let Some(port) = next else {
            break;
        };

        // Cancellation may have landed while waiting for the queue.
        if ctx.cancel.is_cancelled() {
            debug!(worker = id, %port, "cancelled before dialing");
            break;
        }

        dialed += 1;
        if ctx.dialer.probe(&ctx.host, port, ctx.timeout).await
            && ctx.results.send(port).await.is_err()
        {
            // Aggregator is gone; nobody is left to report to.
            break;
        }
    }

    debug!(worker = id, dialed, "worker finished");
    dialed
}

/// Feed every port into the job channel in order, then close it.
///
/// Returns how many ports were enqueued.
pub(crate) async fn distribute(
    ports: Vec<Port>,
    jobs: mpsc::Sender<Port>,
    mut cancel: CancelSignal,
) -> usize {
    let mut queued = 0;

    for port in ports {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!(queued, "distribution cancelled");
                break;
            }
            sent = jobs.send(port) => {
                if sent.is_err() {
                    break;
                }
                queued += 1;
            }
        }
    }

    queued
}

/// Wait for the whole pool to exit, then release the last result sender.
///
/// Returns the total number of dial attempts across the pool.
pub(crate) async fn coordinate(
    mut pool: JoinSet<usize>,
    results: mpsc::Sender<Port>,
) -> ScanResult<usize> {
    let mut dialed = 0;
    let mut failure = None;

    while let Some(joined) = pool.join_next().await {
        match joined {
            Ok(count) => dialed += count,
            Err(e) => {
                warn!(error = %e, "worker task failed");
                failure.get_or_insert_with(|| e.to_string());
            }
        }
    }

    drop(results);

    match failure {
        Some(reason) => Err(ScanError::WorkerFailed(reason)),
        None => Ok(dialed),
    }
}
