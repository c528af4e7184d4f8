//! Command-line interface definitions for pscanner.
//!
//! Uses `clap` derive macros for declarative argument parsing. Flags are
//! optional at the clap level so that missing or out-of-range values are
//! reported through [`ConfigError`](crate::error::ConfigError) with exit
//! code 2, and so that settings-file defaults can fill the gaps.

mod scan;

pub use scan::{execute, ScanRequest};

use crate::error::{CliError, ConfigError};
use clap::{CommandFactory, Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Example:
  pscanner --host example.com --ports 80,443,8000-8100 --workers 200 --timeout 300";

/// pscanner - Fast TCP port scanner
#[derive(Parser, Debug)]
#[command(name = "pscanner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fast TCP port scanner", long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Args {
    /// Target host (domain name or IP) [required]
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Ports to scan, supports single ports and ranges, e.g. "80,443,8080,21-25"
    /// [default: 1-1024]
    #[arg(short, long, value_name = "SPEC")]
    pub ports: Option<String>,

    /// Number of concurrent workers, 1-10000 [default: 100]
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub workers: Option<i64>,

    /// Dial timeout in milliseconds [default: 500]
    #[arg(short, long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Output format for the report
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Path to a JSON settings file with default ports, workers and timeout
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Extra stderr text to print after `err`.
///
/// A missing host gets the full usage text. Other input errors get a pointer
/// to `--help`. Runtime failures get nothing.
pub fn error_hint(err: &CliError) -> Option<String> {
    match err {
        CliError::Config(ConfigError::MissingHost) => {
            Some(Args::command().render_help().to_string())
        }
        _ if err.exit_code() == 2 => Some("Run 'pscanner --help' for usage.".to_string()),
        _ => None,
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use crate::types::PortError;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "pscanner", "--host", "example.com", "-p", "80,443", "-w", "20", "-t", "300", "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(args.host.as_deref(), Some("example.com"));
        assert_eq!(args.ports.as_deref(), Some("80,443"));
        assert_eq!(args.workers, Some(20));
        assert_eq!(args.timeout, Some(300));
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_negative_workers_reach_validation() {
        let args = Args::try_parse_from(["pscanner", "--host", "h", "--workers", "-5"]).unwrap();
        assert_eq!(args.workers, Some(-5));
    }

    #[test]
    fn test_missing_host_prints_usage() {
        let hint = error_hint(&CliError::from(ConfigError::MissingHost)).unwrap();
        assert!(hint.contains("--host"));
        assert!(hint.contains("--workers"));
        assert!(hint.contains("Example:"));
    }

    #[test]
    fn test_other_hints() {
        let bad_ports = CliError::from(PortError::InvalidPort("x".into()));
        assert_eq!(
            error_hint(&bad_ports).as_deref(),
            Some("Run 'pscanner --help' for usage.")
        );

        let runtime = CliError::from(ScanError::WorkerFailed("boom".into()));
        assert!(error_hint(&runtime).is_none());
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let err = Args::try_parse_from(["pscanner", "--bogus"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
