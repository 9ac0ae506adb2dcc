// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use namedata_domain::analytics::aggregate::FrequencyMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseMode {
    /// Write report lines as-is.
    Normal,
    /// Write report lines in all-uppercase.
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VehicleGrouping {
    /// Group vehicles whose year/manufacturer/model compare equal.
    ByValue,
    /// Reproduce the historical arrival-order keying (never merges).
    FirstAppearance,
}

impl From<VehicleGrouping> for FrequencyMode {
    fn from(grouping: VehicleGrouping) -> Self {
        match grouping {
            VehicleGrouping::ByValue => Self::ByValue,
            VehicleGrouping::FirstAppearance => Self::FirstAppearance,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "namedata", version, about = "Aggregate report over a fake-name-generator CSV export")]
pub struct Args {
    /// Input CSV file (header + 45-column data rows)
    pub input: PathBuf,

    /// Console rendering policy
    #[arg(long, value_enum, default_value = "normal")]
    pub case: CaseMode,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Grouping semantics for the most-popular-vehicle question
    #[arg(long, value_enum, default_value = "by-value")]
    pub vehicle_grouping: VehicleGrouping,
}
