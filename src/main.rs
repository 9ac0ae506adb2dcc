// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use namedata::args::Args;
use namedata::config::Config;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    match namedata::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
