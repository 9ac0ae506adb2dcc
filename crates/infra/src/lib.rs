// crates/infra/src/lib.rs

pub mod console;
pub mod persistence;

pub use console::{ConsoleOutput, MemoryOutput, UppercaseConsoleOutput};
pub use persistence::FileRecordSource;
