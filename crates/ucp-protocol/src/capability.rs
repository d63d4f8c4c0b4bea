//! Opaque coprocessor capabilities consumed by the dispatch glue.
//!
//! The session/status protocol and payload interpretation live behind
//! these traits; this crate only frames requests and unframes responses.

use ucp_transport::TransportError;

use crate::command::CalculationOpcode;

/// Session-level command channel to the coprocessor.
///
/// Implementations own the mode query and the dispatch/poll-until-ready
/// cycle, typically on top of a `ucp_transport::BlockTransport`. Exactly
/// one command is in flight at a time: callers run write, issue, decode
/// strictly sequentially.
pub trait CommandChannel {
    /// Declared capacity of the device's operand buffer in bytes.
    fn operand_capacity(&self) -> usize;

    /// Write an encoded operand buffer to the device.
    ///
    /// # Errors
    ///
    /// Device errors are returned unchanged.
    fn write_operand_buffer(&mut self, data: &[u8]) -> Result<usize, TransportError>;

    /// Issue a calculation command and block until the raw result buffer
    /// is available.
    ///
    /// # Errors
    ///
    /// Device errors are returned unchanged.
    fn issue_command(&mut self, opcode: CalculationOpcode) -> Result<Vec<u8>, TransportError>;
}

/// Parser for the serialized distribution payload returned by the device.
pub trait DistributionParser {
    /// Parsed distribution representation.
    type Distribution;
    /// Parse failure reason.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Parse a raw distribution payload.
    ///
    /// # Errors
    ///
    /// Implementation-defined; surfaced to callers as
    /// `ProtocolError::Distribution`.
    fn parse_distribution(&self, payload: &[u8]) -> Result<Self::Distribution, Self::Error>;
}
