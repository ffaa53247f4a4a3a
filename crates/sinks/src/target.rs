//! Sink selection from the configuration string
//!
//! One string selects the output destination:
//! - empty/unset selects the default file name
//! - `tcp:<host>:<port>` selects a stream socket to that address
//! - any other non-empty string is a file path

use std::path::PathBuf;

/// Default trace file name when no configuration is given
pub const DEFAULT_LOG_FILE: &str = "weft.log";

/// Reserved scheme prefix selecting a stream-socket sink
pub const TCP_SCHEME: &str = "tcp:";

/// Parsed sink destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkTarget {
    /// Append formatted lines to a file at this path
    File(PathBuf),

    /// Stream formatted lines to `host:port`
    Tcp(String),
}

impl SinkTarget {
    /// Parse a configuration string into a sink target
    pub fn from_spec(spec: &str) -> Self {
        let spec = spec.trim();
        if spec.is_empty() {
            return Self::File(PathBuf::from(DEFAULT_LOG_FILE));
        }
        if let Some(addr) = spec.strip_prefix(TCP_SCHEME) {
            return Self::Tcp(addr.trim().to_string());
        }
        Self::File(PathBuf::from(spec))
    }
}

impl std::fmt::Display for SinkTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "file:{}", path.display()),
            Self::Tcp(addr) => write!(f, "{TCP_SCHEME}{addr}"),
        }
    }
}
