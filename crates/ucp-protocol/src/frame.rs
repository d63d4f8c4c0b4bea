//! Length-prefixed result frame decoding.

use ucp_codec::unpack_unsigned_integers;

use crate::error::FrameError;

/// Byte length of the u32 payload-length prefix.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Extract the payload from a length-prefixed result buffer.
///
/// Layout: bytes `[0:4)` hold the payload length `L` as a little-endian
/// u32, bytes `[4:4+L)` hold the payload, anything after is undefined
/// padding and is discarded. The frame carries no version field; the format
/// is fixed per firmware revision.
///
/// # Errors
///
/// - [`FrameError::MissingLengthPrefix`] when the buffer is under 4 bytes
/// - [`FrameError::Truncated`] when the buffer holds fewer than `4 + L`
///   bytes
pub fn decode_frame(buffer: &[u8]) -> Result<&[u8], FrameError> {
    let declared = unpack_unsigned_integers(buffer, 1)
        .map_err(|_| FrameError::MissingLengthPrefix { len: buffer.len() })?[0]
        as usize;

    let available = buffer.len() - LENGTH_PREFIX_SIZE;
    if declared > available {
        return Err(FrameError::Truncated {
            declared,
            available,
        });
    }

    Ok(&buffer[LENGTH_PREFIX_SIZE..LENGTH_PREFIX_SIZE + declared])
}
