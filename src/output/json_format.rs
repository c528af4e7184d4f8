//! JSON output formatting.

use crate::error::CliResult;
use crate::scanner::ScanReport;
use std::io::{self, Write};

/// Write a report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, report: &ScanReport) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Print a report in JSON format.
pub fn print_json(report: &ScanReport) -> CliResult<()> {
    write_json(&mut io::stdout().lock(), report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Port;
    use chrono::Utc;

    #[test]
    fn test_json_shape() {
        let report = ScanReport {
            host: "example.com".to_string(),
            ports_scanned: 3,
            workers_used: 3,
            timeout_ms: 500,
            open_ports: vec![Port::new(22).unwrap(), Port::new(443).unwrap()],
            dial_attempts: 3,
            started_at: Utc::now(),
            duration_ms: 12,
            cancelled: false,
        };

        let mut buf = Vec::new();
        write_json(&mut buf, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["host"], "example.com");
        assert_eq!(value["workers_used"], 3);
        assert_eq!(value["open_ports"], serde_json::json!([22, 443]));
        assert_eq!(value["cancelled"], false);
    }
}
