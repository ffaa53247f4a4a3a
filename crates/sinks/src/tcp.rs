//! TCP stream sink - live trace streaming to a remote viewer

use std::io::Write;
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

use crate::error::SinkError;
use crate::sink::TraceSink;

/// Sink streaming formatted lines over a TCP connection
///
/// Construction resolves `host:port` and tries each resolved address in turn
/// until one accepts the connection. A write failure latches the errored
/// state: the connection is dropped and every later write is a silent no-op,
/// so a disconnected viewer cannot destabilize the traced program.
pub struct TcpSink {
    /// `None` once closed or errored
    stream: Option<TcpStream>,

    /// Target address, kept for diagnostics
    target: String,
}

impl TcpSink {
    /// Resolve the target and connect
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Resolve`] when resolution fails,
    /// [`SinkError::NoAddress`] when it yields nothing, and
    /// [`SinkError::Connect`] with the last refusal when no address accepts.
    pub fn connect(target: &str) -> Result<Self, SinkError> {
        let addrs = target
            .to_socket_addrs()
            .map_err(|e| SinkError::resolve(target, e))?;

        let mut last_err = None;
        for addr in addrs {
            match TcpStream::connect(addr) {
                Ok(stream) => {
                    tracing::debug!(%addr, "trace stream connected");
                    return Ok(Self {
                        stream: Some(stream),
                        target: target.to_string(),
                    });
                }
                Err(e) => {
                    tracing::debug!(%addr, error = %e, "trace stream connect attempt failed");
                    last_err = Some(e);
                }
            }
        }

        Err(match last_err {
            Some(e) => SinkError::connect(target, e),
            None => SinkError::NoAddress {
                target: target.to_string(),
            },
        })
    }

    /// Target address this sink streams to
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl TraceSink for TcpSink {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        let Some(stream) = self.stream.as_mut() else {
            return Ok(());
        };
        // write_all loops on partial sends until fully flushed or the
        // connection reports failure
        if let Err(e) = stream.write_all(line.as_bytes()) {
            self.stream = None;
            tracing::warn!(addr = %self.target, error = %e, "trace stream write failed");
            return Err(SinkError::Io(e));
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        if let Some(stream) = self.stream.take() {
            stream.shutdown(Shutdown::Both)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tcp_test.rs"]
mod tcp_test;
