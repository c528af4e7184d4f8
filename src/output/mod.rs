//! Output formatting module.
//!
//! Provides the plain text and JSON renderings of a scan report, plus the
//! stderr helpers used for notices and errors.

mod json_format;
mod plain;

pub use json_format::{print_json, write_json};
pub use plain::{print_error, print_notice, print_plain, print_warning, write_plain};

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::scanner::ScanReport;

/// Format and print a scan report according to the specified format.
pub fn print_report(report: &ScanReport, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Plain => print_plain(report)?,
        OutputFormat::Json => print_json(report)?,
    }
    Ok(())
}
