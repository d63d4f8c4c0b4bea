//! Protocol error types.

use thiserror::Error;
use ucp_codec::{CodecError, ToleranceError};
use ucp_transport::TransportError;

/// Result-frame decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Buffer shorter than the 4-byte length prefix.
    #[error("result buffer too short for length prefix: {len} bytes")]
    MissingLengthPrefix { len: usize },

    /// Declared payload length exceeds the bytes actually present.
    #[error("declared payload length {declared} exceeds {available} bytes after prefix")]
    Truncated { declared: usize, available: usize },
}

/// Command-level errors.
///
/// Every variant is local to a single command invocation; no state needs
/// rolling back, the caller simply retries with a fresh command.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Textual command token with no opcode mapping.
    #[error("unknown calculation command {token:?}")]
    UnknownCommand { token: String },

    /// Malformed tolerance token in an operand position.
    #[error("operand parse failed: {0}")]
    Tolerance(#[from] ToleranceError),

    /// Operand buffer encode/decode size mismatch.
    #[error("operand encoding failed: {0}")]
    Codec(#[from] CodecError),

    /// Malformed result frame.
    #[error("result frame invalid: {0}")]
    Frame(#[from] FrameError),

    /// Error propagated unchanged from the block storage or command
    /// dispatch capability.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    /// The external distribution parser rejected the payload.
    #[error("distribution parse failed: {0}")]
    Distribution(#[source] Box<dyn std::error::Error + Send + Sync>),
}
