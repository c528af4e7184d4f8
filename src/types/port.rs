//! Port types with validation and parsing.
//!
//! The `Port` newtype ensures values are always valid port numbers (1-65535).
//! `PortRange` and `PortSpec` turn a textual port specification such as
//! `"80,443,8000-8100"` into the ascending, deduplicated port set a scan runs
//! against.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A validated network port number (1-65535).
///
/// Serializes as a bare integer; deserialization goes through
/// `TryFrom<u16>` so port 0 is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Port(u16);

impl Port {
    /// Minimum valid port number.
    pub const MIN: u16 = 1;

    /// Create a new Port from a u16, returning None if invalid.
    #[inline]
    pub const fn new(port: u16) -> Option<Self> {
        if port >= Self::MIN {
            Some(Self(port))
        } else {
            None
        }
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Validate a signed integer as a port number.
    fn from_i64(value: i64) -> Option<Self> {
        u16::try_from(value).ok().and_then(Self::new)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Port {
    type Error = PortError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PortError::PortOutOfRange(i64::from(value)))
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

/// Error type for port specification parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    /// A token (or one side of a range) is not an integer.
    #[error("invalid port: {0}")]
    InvalidPort(String),
    /// A single port lies outside 1-65535.
    #[error("port out of range: {0}")]
    PortOutOfRange(i64),
    /// A range has out-of-bounds or inverted ends.
    #[error("invalid range bounds: {0}")]
    InvalidRange(String),
}

/// A range of ports (inclusive). Only built from validated ports with
/// `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    start: Port,
    end: Port,
}

impl PortRange {
    /// Create a range containing a single port.
    pub const fn single(port: Port) -> Self {
        Self {
            start: port,
            end: port,
        }
    }

    /// Iterate over all ports in this range.
    pub fn iter(&self) -> impl Iterator<Item = Port> {
        (self.start.0..=self.end.0).map(Port)
    }

    /// Parse an `a-b` token. The token is split on its first `-` only.
    fn parse_token(token: &str) -> Result<Self, PortError> {
        let (low, high) = token
            .split_once('-')
            .ok_or_else(|| PortError::InvalidRange(token.to_string()))?;
        let low = parse_int(low)?;
        let high = parse_int(high)?;

        match (Port::from_i64(low), Port::from_i64(high)) {
            (Some(start), Some(end)) if start <= end => Ok(Self { start, end }),
            _ => Err(PortError::InvalidRange(token.to_string())),
        }
    }
}

fn parse_int(raw: &str) -> Result<i64, PortError> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| PortError::InvalidPort(raw.to_string()))
}

/// A parsed port specification made of single ports and ranges.
///
/// Supports formats like:
/// - Single port: "80"
/// - Comma-separated: "80,443,8080"
/// - Range: "1-1024"
/// - Mixed: "80,443,8080,21-25"
///
/// Empty tokens are skipped, so `""`, `" , "` and `"80,"` all parse. A
/// specification with no tokens is valid and resolves to no ports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortSpec {
    ranges: Vec<PortRange>,
}

impl PortSpec {
    /// Create an empty port specification.
    pub const fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Add a port range to the specification.
    pub fn add_range(&mut self, range: PortRange) {
        self.ranges.push(range);
    }

    /// Add a single port to the specification.
    pub fn add_port(&mut self, port: Port) {
        self.ranges.push(PortRange::single(port));
    }

    /// All ports as an ascending, deduplicated vector.
    pub fn to_ports(&self) -> Vec<Port> {
        self.ranges
            .iter()
            .flat_map(PortRange::iter)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl FromStr for PortSpec {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut spec = Self::new();

        for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if token.contains('-') {
                spec.add_range(PortRange::parse_token(token)?);
            } else {
                let value = parse_int(token)?;
                let port = Port::from_i64(value).ok_or(PortError::PortOutOfRange(value))?;
                spec.add_port(port);
            }
        }

        Ok(spec)
    }
}

/// Resolve a port specification into an ascending, deduplicated port list.
pub fn resolve(spec: &str) -> Result<Vec<Port>, PortError> {
    Ok(spec.parse::<PortSpec>()?.to_ports())
}
