//! Sink capability trait and construction

use crate::error::SinkError;
use crate::file::FileSink;
use crate::target::SinkTarget;
use crate::tcp::TcpSink;

/// Output destination for formatted trace lines
///
/// Exactly one writer thread drives a sink, so the methods take `&mut self`
/// and implementations need no internal locking.
pub trait TraceSink: Send {
    /// Append one formatted line (including its trailing newline)
    ///
    /// Returns an error only on the first failure; an errored sink turns
    /// subsequent writes into silent no-ops so a broken trace channel never
    /// destabilizes the host program.
    fn write_line(&mut self, line: &str) -> Result<(), SinkError>;

    /// Flush and release the destination
    ///
    /// Idempotent; writes after `close` are no-ops.
    fn close(&mut self) -> Result<(), SinkError>;
}

/// Construct the sink for a parsed target
///
/// # Errors
///
/// Returns the construction error (file unopenable, host unresolvable or
/// unreachable). Callers treat this as fatal.
pub fn open_sink(target: &SinkTarget) -> Result<Box<dyn TraceSink>, SinkError> {
    match target {
        SinkTarget::File(path) => Ok(Box::new(FileSink::create(path)?)),
        SinkTarget::Tcp(addr) => Ok(Box::new(TcpSink::connect(addr)?)),
    }
}
