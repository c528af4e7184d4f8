//! Core type definitions using newtype patterns for type safety.
//!
//! These types keep invalid port numbers out of the scan engine entirely.

mod port;

pub use port::{resolve, Port, PortError, PortRange, PortSpec};
