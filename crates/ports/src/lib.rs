//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`source`]: the ordered raw-line supplier backing a load
//! - [`output`]: the sink human-readable report lines are written to
//!
//! These ports keep the domain and application layers independent of
//! specific file and console implementations.

// crates/ports/src/lib.rs

pub mod output;
pub mod source;

pub use output::UserOutput;
pub use source::RecordSource;
