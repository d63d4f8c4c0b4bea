//! Fixed-width operand encoding and concise-uncertainty notation parsing.
//!
//! This crate is the byte-level foundation for talking to the uncertainty
//! coprocessor:
//! - [`pack_doubles`] / [`unpack_doubles`] and the unsigned-integer
//!   equivalents encode values into fixed-capacity, zero-padded buffers
//!   matching the firmware's operand memory layout
//! - [`ToleranceInterval`] parses the concise form of uncertainty notation
//!   (`"1.23(4)"`) into the interval endpoints sent as operands
//!
//! All multi-byte wire values are little-endian.

#![forbid(unsafe_code)]

mod error;
mod fixed;
mod tolerance;

pub use error::{CodecError, ToleranceError};
pub use fixed::{
    pack_doubles, pack_unsigned_integers, unpack_doubles, unpack_unsigned_integers, DOUBLE_SIZE,
    UNSIGNED_SIZE,
};
pub use tolerance::ToleranceInterval;
