//! # Domain
//!
//! Pure model and analytics for the namedata pipeline. No I/O happens here:
//! the loader consumes already-read lines, and the aggregate functions are
//! side-effect-free over a borrowed record slice.

// crates/domain/src/lib.rs

pub mod analytics;
pub mod loader;
pub mod model;
pub mod schema;

pub use model::{Gender, Person, VehicleInfo};
