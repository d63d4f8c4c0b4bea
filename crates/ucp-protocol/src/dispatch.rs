//! Command dispatch: encode, send, decode.

use tracing::debug;

use crate::capability::{CommandChannel, DistributionParser};
use crate::command::CommandFrame;
use crate::error::ProtocolError;
use crate::frame::decode_frame;

/// Run one calculation command and return the raw distribution payload.
///
/// Strictly sequential and synchronous: compute the command frame against
/// the channel's declared operand capacity, write the operand buffer,
/// issue the command, decode the result frame. Buffers are per-invocation;
/// a failed call leaves nothing to roll back.
///
/// # Errors
///
/// Frame-construction errors ([`ProtocolError::UnknownCommand`],
/// [`ProtocolError::Tolerance`], [`ProtocolError::Codec`]) abort before
/// any device traffic; [`ProtocolError::Transport`] and
/// [`ProtocolError::Frame`] surface device and decode failures.
pub fn dispatch_command<C: CommandChannel>(
    channel: &mut C,
    opcode_token: &str,
    operand_a: &str,
    operand_b: &str,
) -> Result<Vec<u8>, ProtocolError> {
    let frame = CommandFrame::compute(
        opcode_token,
        operand_a,
        operand_b,
        channel.operand_capacity(),
    )?;

    debug!(
        opcode = frame.opcode.code(),
        operand_len = frame.operands.len(),
        "dispatching calculation"
    );
    channel.write_operand_buffer(&frame.operands)?;
    let result = channel.issue_command(frame.opcode)?;

    let payload = decode_frame(&result)?;
    debug!(payload_len = payload.len(), "calculation result received");
    Ok(payload.to_vec())
}

/// Dispatch a command and parse the payload into a distribution.
///
/// # Errors
///
/// As [`dispatch_command`], plus [`ProtocolError::Distribution`] when the
/// parser rejects the payload.
pub fn execute_calculation<C, P>(
    channel: &mut C,
    parser: &P,
    opcode_token: &str,
    operand_a: &str,
    operand_b: &str,
) -> Result<P::Distribution, ProtocolError>
where
    C: CommandChannel,
    P: DistributionParser,
{
    let payload = dispatch_command(channel, opcode_token, operand_a, operand_b)?;
    parser
        .parse_distribution(&payload)
        .map_err(|err| ProtocolError::Distribution(Box::new(err)))
}
