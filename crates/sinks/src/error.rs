//! Sink error types

use thiserror::Error;

/// Errors that can occur when constructing or driving a sink
#[derive(Debug, Error)]
pub enum SinkError {
    /// Failed to open the trace file
    #[error("failed to open trace file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to resolve the stream target
    #[error("failed to resolve {target}: {source}")]
    Resolve {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// No resolved address accepted a connection
    #[error("failed to connect to {target}: {source}")]
    Connect {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// Resolution returned no addresses at all
    #[error("no address found for {target}")]
    NoAddress { target: String },

    /// I/O error during write or close
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SinkError {
    /// Create an open error
    #[inline]
    pub fn open(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a resolve error
    #[inline]
    pub fn resolve(target: impl Into<String>, source: std::io::Error) -> Self {
        Self::Resolve {
            target: target.into(),
            source,
        }
    }

    /// Create a connect error
    #[inline]
    pub fn connect(target: impl Into<String>, source: std::io::Error) -> Self {
        Self::Connect {
            target: target.into(),
            source,
        }
    }
}
