//! Codec error types.

use thiserror::Error;

/// Fixed-width packing and unpacking errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Serialized values exceed the destination buffer capacity.
    #[error("packed length {needed} exceeds buffer capacity {capacity}")]
    BufferOverflow {
        /// Bytes required by the serialized values.
        needed: usize,
        /// Capacity of the destination buffer.
        capacity: usize,
    },

    /// Source buffer is too small for the requested decode count.
    #[error("buffer too small: need {needed} bytes, got {len}")]
    BufferTooSmall {
        /// Bytes required for the requested count.
        needed: usize,
        /// Actual buffer length.
        len: usize,
    },
}

/// Concise-uncertainty notation parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToleranceError {
    #[error("missing uncertainty parentheses, expected 'X.Y(Z)'")]
    MissingParentheses,

    #[error("invalid value part {text:?}")]
    InvalidValue { text: String },

    #[error("invalid uncertainty digits {text:?}")]
    InvalidUncertainty { text: String },
}
