// crates/domain/src/analytics.rs

pub mod aggregate;

pub use aggregate::{Direction, FrequencyMode, GroupIndex, count, count_where, extremum_by, group_by, most_frequent};
