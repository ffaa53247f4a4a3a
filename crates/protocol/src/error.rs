//! Protocol error types

use thiserror::Error;

use crate::record::EventKind;

/// Errors that can occur when encoding records
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Record kind has no wire representation (internal sentinel)
    #[error("record kind {0} is internal and has no wire representation")]
    InternalKind(EventKind),
}
