// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

//! Wiring for the `namedata` binary: parse arguments, build the concrete
//! source and sink, run load + report.

use anyhow::Result;
use namedata_infra::FileRecordSource;
use namedata_usecase::{LoadPeople, ReportRunner};

pub mod args;
pub mod config;
pub mod presentation;

use args::OutputFormat;
use config::Config;

pub fn run(config: &Config) -> Result<()> {
    let source = FileRecordSource::new(&config.input);
    let people = LoadPeople::new(&source).run()?;

    let runner = ReportRunner::new(config.report);
    match config.format {
        OutputFormat::Text => {
            let sink = presentation::console_sink(config.case);
            runner.run(&people, sink.as_ref())?;
        }
        OutputFormat::Json => {
            presentation::print_json(&runner.answers(&people))?;
        }
    }
    Ok(())
}
