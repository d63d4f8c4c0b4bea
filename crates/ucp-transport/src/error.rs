//! Transport error types.

use thiserror::Error;

/// Errors surfaced by the block storage capability.
///
/// The transport adapter propagates these unchanged and performs no retries
/// of its own; retries and timeouts belong to the storage implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The device did not respond within the storage layer's timeout.
    #[error("device timed out after {waited_ms} ms")]
    Timeout { waited_ms: u64 },

    /// The device rejected the operation (busy, wrong mode, not ready).
    #[error("device not ready: {reason}")]
    NotReady { reason: String },

    /// Block address or count outside the device's range.
    #[error("block range out of bounds: lba {lba}, {blocks} blocks, device has {capacity}")]
    OutOfRange {
        lba: u64,
        blocks: usize,
        capacity: usize,
    },

    /// Low-level bus or device failure.
    #[error("I/O error: {0}")]
    Io(String),
}
