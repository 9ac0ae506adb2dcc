// crates/ports/src/source.rs
use namedata_shared_kernel::Result;

/// Port supplying the ordered raw lines of one input, header included.
///
/// The read is all-or-nothing: either every line is returned in input
/// order or the call fails. Streaming larger-than-memory inputs is out of
/// scope.
pub trait RecordSource: Send + Sync {
    fn lines(&self) -> Result<Vec<String>>;
}
