//! # Use cases
//!
//! Application orchestrators: [`load::LoadPeople`] pulls raw lines through
//! a [`namedata_ports::RecordSource`] and turns them into records, and
//! [`report::ReportRunner`] evaluates the fixed question list against the
//! loaded collection, isolating per-question failures.

// crates/usecase/src/lib.rs

pub mod load;
pub mod questions;
pub mod report;

pub use load::LoadPeople;
pub use questions::{Question, ReportOptions, default_questions};
pub use report::{Answer, ReportRunner};
