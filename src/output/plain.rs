//! Plain text output formatting.
//!
//! Produces the human-readable report: host, port count, workers used,
//! timeout, then one open port per line.

use crate::scanner::ScanReport;
use console::style;
use std::io::{self, Write};

/// Write a report in human-readable plain text format.
pub fn write_plain<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    writeln!(out, "{} {}", style("Host:").bold(), report.host)?;
    writeln!(out, "{} {}", style("Scanned ports:").bold(), report.ports_scanned)?;
    writeln!(out, "{} {}", style("Workers used:").bold(), report.workers_used)?;
    writeln!(out, "{} {}ms", style("Timeout:").bold(), report.timeout_ms)?;
    writeln!(out, "{}", style("Open ports:").bold())?;

    if report.open_ports.is_empty() {
        writeln!(out, "  {}", style("(none found)").dim())?;
    } else {
        for port in &report.open_ports {
            writeln!(out, "  {}", style(port).green())?;
        }
    }

    Ok(())
}

/// Print a report to stdout in plain text format.
pub fn print_plain(report: &ScanReport) -> io::Result<()> {
    write_plain(&mut io::stdout().lock(), report)
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("warning:").yellow().bold(), msg);
}

/// Print an informational notice.
pub fn print_notice(msg: &str) {
    eprintln!("{}", style(msg).dim());
}
