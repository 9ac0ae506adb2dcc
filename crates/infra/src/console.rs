// crates/infra/src/console.rs

//! Output sink implementations. The two console sinks are the report's
//! interchangeable rendering policies; [`MemoryOutput`] captures lines for
//! assertions in tests.

use std::sync::Mutex;

use namedata_ports::UserOutput;
use namedata_shared_kernel::Result;

/// Writes each line to stdout as-is.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl UserOutput for ConsoleOutput {
    fn write_line(&self, message: &str) -> Result<()> {
        println!("{message}");
        Ok(())
    }
}

/// Writes each line to stdout in all-uppercase ("screaming case").
#[derive(Debug, Default)]
pub struct UppercaseConsoleOutput;

impl UserOutput for UppercaseConsoleOutput {
    fn write_line(&self, message: &str) -> Result<()> {
        println!("{}", message.to_uppercase());
        Ok(())
    }
}

/// Captures written lines in memory.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    lines: Mutex<Vec<String>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("output lock poisoned").clone()
    }
}

impl UserOutput for MemoryOutput {
    fn write_line(&self, message: &str) -> Result<()> {
        self.lines.lock().expect("output lock poisoned").push(message.to_string());
        Ok(())
    }
}
