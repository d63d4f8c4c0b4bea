//! Calculation opcodes and operand-buffer encoding.

use serde::{Deserialize, Serialize};

use ucp_codec::{pack_doubles, CodecError, ToleranceInterval};

use crate::error::ProtocolError;

/// Number of doubles carried by one command: two interval endpoints per
/// operand.
pub const OPERAND_DOUBLES: usize = 4;

/// Calculation opcode understood by the coprocessor firmware.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum CalculationOpcode {
    /// No command. Exists on the wire but has no textual trigger.
    None = 0,
    Add = 1,
    Sub = 2,
    Mul = 3,
    Div = 4,
}

impl CalculationOpcode {
    /// Resolve a textual command token (`add`, `sub`, `mul`, `div`).
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnknownCommand`] for any other token;
    /// [`CalculationOpcode::None`] is deliberately unreachable from text.
    pub fn from_token(token: &str) -> Result<Self, ProtocolError> {
        match token {
            "add" => Ok(Self::Add),
            "sub" => Ok(Self::Sub),
            "mul" => Ok(Self::Mul),
            "div" => Ok(Self::Div),
            _ => Err(ProtocolError::UnknownCommand {
                token: token.to_string(),
            }),
        }
    }

    /// Wire opcode value.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }
}

/// Encode two operand intervals into a zero-padded buffer of exactly
/// `capacity` bytes.
///
/// Layout: `[a.min, a.max, b.min, b.max]` as 8-byte little-endian doubles
/// at fixed offsets, zero padding to capacity. The firmware reads the
/// operands at those offsets, so the buffer must be sized to the device's
/// declared capacity, not the payload.
///
/// # Errors
///
/// Returns [`CodecError::BufferOverflow`] when `capacity` is below the 32
/// bytes the four endpoints need.
pub fn encode_operands(
    a: &ToleranceInterval,
    b: &ToleranceInterval,
    capacity: usize,
) -> Result<Vec<u8>, CodecError> {
    pack_doubles(&[a.min, a.max, b.min, b.max], capacity)
}

/// One fully-encoded command: opcode plus operand buffer.
///
/// Transient; built per invocation and discarded after dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandFrame {
    /// Opcode to issue after the operand buffer is written.
    pub opcode: CalculationOpcode,
    /// Encoded operand buffer, sized to the device's declared capacity.
    pub operands: Vec<u8>,
}

impl CommandFrame {
    /// Build a command frame from textual tokens.
    ///
    /// Parses both tolerance tokens, resolves the opcode and encodes the
    /// four interval endpoints into a buffer of `capacity` bytes.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::UnknownCommand`] for an unrecognized opcode token
    /// - [`ProtocolError::Tolerance`] for a malformed operand token
    /// - [`ProtocolError::Codec`] when `capacity` cannot hold the operands
    pub fn compute(
        opcode_token: &str,
        operand_a: &str,
        operand_b: &str,
        capacity: usize,
    ) -> Result<Self, ProtocolError> {
        let opcode = CalculationOpcode::from_token(opcode_token)?;
        let a = ToleranceInterval::parse(operand_a)?;
        let b = ToleranceInterval::parse(operand_b)?;
        let operands = encode_operands(&a, &b, capacity)?;

        Ok(Self { opcode, operands })
    }
}
