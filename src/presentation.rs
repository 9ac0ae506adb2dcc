// src/presentation.rs
use anyhow::Result;
use namedata_infra::{ConsoleOutput, UppercaseConsoleOutput};
use namedata_ports::UserOutput;
use namedata_usecase::Answer;

use crate::args::CaseMode;

/// Console sink for the selected rendering policy.
pub fn console_sink(case: CaseMode) -> Box<dyn UserOutput> {
    match case {
        CaseMode::Normal => Box::new(ConsoleOutput),
        CaseMode::Upper => Box::new(UppercaseConsoleOutput),
    }
}

/// Print the answer list as pretty JSON.
pub fn print_json(answers: &[Answer]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(answers)?);
    Ok(())
}
