// crates/infra/src/persistence.rs
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use namedata_ports::RecordSource;
use namedata_shared_kernel::{InfrastructureError, Result};

/// File-backed record source. Reads the whole file up front with buffered
/// line reads; the load phase treats the read as one atomic call.
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileRecordSource {
    fn lines(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path).map_err(|source| InfrastructureError::FileRead {
            path: self.path.clone(),
            source,
        })?;
        let reader = BufReader::new(file);
        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(|source| InfrastructureError::FileRead {
                path: self.path.clone(),
                source,
            })?;
        Ok(lines)
    }
}
