//! Command framing and result-frame decoding for the uncertainty
//! coprocessor.
//!
//! The coprocessor performs arithmetic on statistically-uncertain values
//! and returns a serialized probability distribution. This crate owns the
//! binary command/response protocol on the host side:
//!
//! - [`CalculationOpcode`] and [`CommandFrame`]: textual command tokens and
//!   two tolerance-interval operands become an opcode plus a fixed-capacity
//!   operand buffer (`[a.min, a.max, b.min, b.max]` as little-endian
//!   doubles, zero-padded to the device's declared capacity)
//! - [`decode_frame`]: extracts the payload from the length-prefixed result
//!   buffer
//! - [`dispatch_command`] / [`execute_calculation`]: the strictly
//!   sequential encode, send, decode glue over a [`CommandChannel`]
//!
//! The session/status protocol, the block bus and distribution parsing are
//! external capabilities consumed through traits; this crate never performs
//! the numeric computation itself.

#![forbid(unsafe_code)]

mod capability;
mod command;
mod dispatch;
mod error;
mod frame;

pub use capability::{CommandChannel, DistributionParser};
pub use command::{encode_operands, CalculationOpcode, CommandFrame, OPERAND_DOUBLES};
pub use dispatch::{dispatch_command, execute_calculation};
pub use error::{FrameError, ProtocolError};
pub use frame::{decode_frame, LENGTH_PREFIX_SIZE};
