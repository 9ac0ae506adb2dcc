// crates/domain/src/model.rs

pub mod person;
pub mod vehicle;

pub use person::{Gender, Person};
pub use vehicle::VehicleInfo;
