//! Scan command implementation.
//!
//! Turns parsed flags plus settings into a validated [`ScanRequest`], runs
//! the engine, and prints the report. All validation happens before any
//! network activity.

use crate::cli::Args;
use crate::config::AppSettings;
use crate::error::{CliResult, ConfigError, ConfigResult, MAX_WORKERS};
use crate::output;
use crate::scanner::{run_scan_with, CancelSignal, ScanConfig, TcpDialer};
use crate::types::{resolve, Port};
use std::time::Duration;
use tracing::debug;

/// A fully validated scan request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub host: String,
    /// Resolved port set; may be empty.
    pub ports: Vec<Port>,
    pub workers: usize,
    pub timeout: Duration,
}

impl Args {
    /// Load the settings file named by `--config`, or the default one.
    pub fn settings(&self) -> ConfigResult<AppSettings> {
        match &self.config {
            Some(path) => AppSettings::load_from(path),
            None => AppSettings::load(),
        }
    }

    /// Merge flags over `settings` and validate the result.
    ///
    /// Checks run in order: host, worker count, port specification. A
    /// timeout of 0 means dials have no deadline.
    pub fn request(&self, settings: &AppSettings) -> CliResult<ScanRequest> {
        let host = self
            .host
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or(ConfigError::MissingHost)?
            .to_string();

        let workers = self.workers.unwrap_or(settings.workers);
        if workers <= 0 {
            return Err(ConfigError::WorkersNotPositive(workers).into());
        }
        if workers > MAX_WORKERS {
            return Err(ConfigError::WorkersTooLarge(workers).into());
        }

        let timeout_ms = self.timeout.unwrap_or(settings.timeout_ms);
        let spec = self.ports.as_deref().unwrap_or(&settings.ports);
        let ports = resolve(spec)?;

        Ok(ScanRequest {
            host,
            ports,
            workers: usize::try_from(workers).unwrap_or(usize::MAX),
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

/// Run a scan as described by `args` and print the report.
///
/// An empty port set is a clean exit with a notice, not an error.
pub async fn execute(args: &Args, cancel: CancelSignal) -> CliResult<()> {
    let settings = args.settings()?;
    let request = args.request(&settings)?;

    if request.ports.is_empty() {
        output::print_notice("no ports to scan");
        return Ok(());
    }

    debug!(
        workers = request.workers,
        ports = request.ports.len(),
        "scan request validated"
    );

    let config = ScanConfig::new(request.host, request.ports)
        .with_workers(request.workers)
        .with_timeout(request.timeout);

    let report = run_scan_with(config, TcpDialer::new(), cancel).await?;

    if report.cancelled {
        output::print_warning("scan interrupted; results are partial");
    }

    output::print_report(&report, args.output)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::types::PortError;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["pscanner"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn request(extra: &[&str]) -> CliResult<ScanRequest> {
        args(extra).request(&AppSettings::default())
    }

    #[test]
    fn test_defaults() {
        let req = request(&["--host", "example.com"]).unwrap();
        assert_eq!(req.host, "example.com");
        assert_eq!(req.ports.len(), 1024);
        assert_eq!(req.workers, 100);
        assert_eq!(req.timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_missing_host() {
        let err = request(&[]).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::MissingHost)));
        assert_eq!(err.exit_code(), 2);

        let blank = request(&["--host", "  "]).unwrap_err();
        assert!(matches!(blank, CliError::Config(ConfigError::MissingHost)));
    }

    #[test]
    fn test_worker_bounds() {
        for bad in ["0", "-5"] {
            let err = request(&["--host", "h", "--workers", bad]).unwrap_err();
            assert!(matches!(
                err,
                CliError::Config(ConfigError::WorkersNotPositive(_))
            ));
        }

        let err = request(&["--host", "h", "--workers", "10001"]).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::WorkersTooLarge(10001))));
        assert_eq!(err.exit_code(), 2);

        assert_eq!(
            request(&["--host", "h", "--workers", "10000"]).unwrap().workers,
            10_000
        );
    }

    #[test]
    fn test_zero_timeout_is_accepted() {
        let req = request(&["--host", "h", "--timeout", "0"]).unwrap();
        assert_eq!(req.timeout, Duration::ZERO);

        let settings = AppSettings {
            timeout_ms: 0,
            ..AppSettings::default()
        };
        let req = args(&["--host", "h"]).request(&settings).unwrap();
        assert_eq!(req.timeout, Duration::ZERO);
    }

    #[test]
    fn test_bad_port_spec() {
        let err = request(&["--host", "h", "--ports", "80,abc"]).unwrap_err();
        assert!(matches!(err, CliError::Ports(PortError::InvalidPort(_))));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_empty_port_spec_is_accepted() {
        let req = request(&["--host", "h", "--ports", " , "]).unwrap();
        assert!(req.ports.is_empty());
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = AppSettings {
            ports: "22".to_string(),
            workers: 7,
            timeout_ms: 900,
        };

        let from_settings = args(&["--host", "h"]).request(&settings).unwrap();
        assert_eq!(from_settings.ports, vec![Port::new(22).unwrap()]);
        assert_eq!(from_settings.workers, 7);
        assert_eq!(from_settings.timeout, Duration::from_millis(900));

        let overridden = args(&["--host", "h", "-p", "80", "-w", "3", "-t", "50"])
            .request(&settings)
            .unwrap();
        assert_eq!(overridden.ports, vec![Port::new(80).unwrap()]);
        assert_eq!(overridden.workers, 3);
        assert_eq!(overridden.timeout, Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_empty_port_set_exits_cleanly() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"{}").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let args = args(&["--host", "h", "--ports", "", "--config", &path]);
        assert!(execute(&args, CancelSignal::never()).await.is_ok());
    }

    #[tokio::test]
    async fn test_unreadable_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let args = args(&["--host", "h", "--config", path.to_str().unwrap()]);

        let err = execute(&args, CancelSignal::never()).await.unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::ReadFailed { .. })));
        assert_eq!(err.exit_code(), 2);
    }
}
