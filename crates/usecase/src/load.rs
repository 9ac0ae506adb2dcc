// crates/usecase/src/load.rs
use namedata_domain::loader;
use namedata_domain::model::Person;
use namedata_ports::RecordSource;
use namedata_shared_kernel::{ApplicationError, NamedataError, Result};

/// Orchestrates one load: pull every line from the source, then hand the
/// batch to the domain loader. Any failure aborts the load as a whole.
pub struct LoadPeople<'a> {
    source: &'a dyn RecordSource,
}

impl<'a> LoadPeople<'a> {
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self { source }
    }

    pub fn run(&self) -> Result<Vec<Person>> {
        let lines = self.source.lines()?;
        loader::load_records(&lines).map_err(|e| {
            ApplicationError::LoadFailed {
                reason: e.to_string(),
                source: Some(Box::new(NamedataError::from(e))),
            }
            .into()
        })
    }
}
