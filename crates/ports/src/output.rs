// crates/ports/src/output.rs
use namedata_shared_kernel::Result;

/// Port receiving one rendered report line per call.
///
/// Rendering policy (as-is, all-uppercase, capture for tests) lives in the
/// implementation and is chosen by the caller before the core runs; the
/// core itself never performs interactive I/O.
pub trait UserOutput: Send + Sync {
    fn write_line(&self, message: &str) -> Result<()>;
}
