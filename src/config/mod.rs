//! Configuration management for pscanner.
//!
//! Built-in defaults can be overridden by an optional JSON settings file in
//! the XDG config directory, and both by command-line flags.

mod settings;

pub use settings::{AppSettings, Paths};
