// src/config.rs
use std::path::PathBuf;

use namedata_usecase::ReportOptions;

use crate::args::{Args, CaseMode, OutputFormat};

/// Resolved run configuration, built once from the parsed arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub case: CaseMode,
    pub format: OutputFormat,
    pub report: ReportOptions,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            case: args.case,
            format: args.format,
            report: ReportOptions { vehicle_grouping: args.vehicle_grouping.into() },
        }
    }
}
