//! Fixed-width little-endian packing for operand and length buffers.
//!
//! The coprocessor firmware reads operands at fixed byte offsets inside a
//! fixed-size buffer, so every encoding here is fixed-width,
//! capacity-checked and zero-padded rather than length-prefixed. A buffer
//! that cannot hold the serialized values is an error, never a silent
//! truncation.

use crate::error::CodecError;

/// Encoded size of one IEEE-754 double.
pub const DOUBLE_SIZE: usize = 8;

/// Encoded size of one unsigned 32-bit integer.
pub const UNSIGNED_SIZE: usize = 4;

/// Pack doubles into a zero-padded buffer of exactly `size` bytes.
///
/// Values are serialized as 8-byte little-endian IEEE-754 doubles,
/// concatenated in input order, then right-padded with zeros to `size`.
///
/// # Errors
///
/// Returns [`CodecError::BufferOverflow`] when the serialized values do not
/// fit in `size` bytes.
pub fn pack_doubles(values: &[f64], size: usize) -> Result<Vec<u8>, CodecError> {
    let needed = values.len() * DOUBLE_SIZE;
    if needed > size {
        return Err(CodecError::BufferOverflow {
            needed,
            capacity: size,
        });
    }

    let mut buffer = Vec::with_capacity(size);
    for value in values {
        buffer.extend_from_slice(&value.to_le_bytes());
    }
    buffer.resize(size, 0);
    Ok(buffer)
}

/// Unpack the first `count` little-endian doubles from `buffer`.
///
/// Trailing bytes beyond `count * 8` are ignored.
///
/// # Errors
///
/// Returns [`CodecError::BufferTooSmall`] when the buffer holds fewer than
/// `count * 8` bytes.
pub fn unpack_doubles(buffer: &[u8], count: usize) -> Result<Vec<f64>, CodecError> {
    let needed = count * DOUBLE_SIZE;
    if buffer.len() < needed {
        return Err(CodecError::BufferTooSmall {
            needed,
            len: buffer.len(),
        });
    }

    Ok(buffer[..needed]
        .chunks_exact(DOUBLE_SIZE)
        .map(|chunk| f64::from_le_bytes(chunk.try_into().expect("chunk is exactly 8 bytes")))
        .collect())
}

/// Pack unsigned 32-bit integers into a zero-padded buffer of exactly
/// `size` bytes.
///
/// Same padding and overflow rules as [`pack_doubles`], with 4-byte
/// little-endian values.
///
/// # Errors
///
/// Returns [`CodecError::BufferOverflow`] when the serialized values do not
/// fit in `size` bytes.
pub fn pack_unsigned_integers(values: &[u32], size: usize) -> Result<Vec<u8>, CodecError> {
    let needed = values.len() * UNSIGNED_SIZE;
    if needed > size {
        return Err(CodecError::BufferOverflow {
            needed,
            capacity: size,
        });
    }

    let mut buffer = Vec::with_capacity(size);
    for value in values {
        buffer.extend_from_slice(&value.to_le_bytes());
    }
    buffer.resize(size, 0);
    Ok(buffer)
}

/// Unpack the first `count` little-endian unsigned 32-bit integers from
/// `buffer`.
///
/// # Errors
///
/// Returns [`CodecError::BufferTooSmall`] when the buffer holds fewer than
/// `count * 4` bytes.
pub fn unpack_unsigned_integers(buffer: &[u8], count: usize) -> Result<Vec<u32>, CodecError> {
    let needed = count * UNSIGNED_SIZE;
    if buffer.len() < needed {
        return Err(CodecError::BufferTooSmall {
            needed,
            len: buffer.len(),
        });
    }

    Ok(buffer[..needed]
        .chunks_exact(UNSIGNED_SIZE)
        .map(|chunk| u32::from_le_bytes(chunk.try_into().expect("chunk is exactly 4 bytes")))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_byte_layout() {
        let buffer = pack_doubles(&[1.0], 16).unwrap();

        // 1.0 as LE IEEE-754 double
        assert_eq!(
            &buffer[0..8],
            &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F]
        );
        // Zero padding to capacity
        assert_eq!(&buffer[8..16], &[0u8; 8]);
    }

    #[test]
    fn doubles_exact_fit_without_padding() {
        let buffer = pack_doubles(&[0.5, -2.25], 16).unwrap();
        assert_eq!(buffer.len(), 16);
        assert_eq!(unpack_doubles(&buffer, 2).unwrap(), vec![0.5, -2.25]);
    }

    #[test]
    fn doubles_overflow_rejected() {
        let err = pack_doubles(&[1.0, 2.0, 3.0], 16).unwrap_err();
        assert_eq!(
            err,
            CodecError::BufferOverflow {
                needed: 24,
                capacity: 16,
            }
        );
    }

    #[test]
    fn empty_doubles_pack_to_all_zeros() {
        let buffer = pack_doubles(&[], 8).unwrap();
        assert_eq!(buffer, vec![0u8; 8]);
    }

    #[test]
    fn unpack_doubles_short_buffer_rejected() {
        let err = unpack_doubles(&[0u8; 15], 2).unwrap_err();
        assert_eq!(err, CodecError::BufferTooSmall { needed: 16, len: 15 });
    }

    #[test]
    fn unpack_doubles_ignores_trailing_bytes() {
        let mut buffer = pack_doubles(&[3.5], 8).unwrap();
        buffer.extend_from_slice(&[0xFF; 4]);
        assert_eq!(unpack_doubles(&buffer, 1).unwrap(), vec![3.5]);
    }

    #[test]
    fn unsigned_byte_layout() {
        let buffer = pack_unsigned_integers(&[0x0102_0304, 5], 12).unwrap();

        assert_eq!(&buffer[0..4], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&buffer[4..8], &[0x05, 0x00, 0x00, 0x00]);
        assert_eq!(&buffer[8..12], &[0u8; 4]);
    }

    #[test]
    fn unsigned_overflow_rejected() {
        let err = pack_unsigned_integers(&[1, 2, 3], 8).unwrap_err();
        assert_eq!(
            err,
            CodecError::BufferOverflow {
                needed: 12,
                capacity: 8,
            }
        );
    }

    #[test]
    fn unsigned_roundtrip() {
        let values = [0, 1, u32::MAX, 0xDEAD_BEEF];
        let buffer = pack_unsigned_integers(&values, 16).unwrap();
        assert_eq!(unpack_unsigned_integers(&buffer, 4).unwrap(), values);
    }

    #[test]
    fn unpack_unsigned_short_buffer_rejected() {
        let err = unpack_unsigned_integers(&[0u8; 3], 1).unwrap_err();
        assert_eq!(err, CodecError::BufferTooSmall { needed: 4, len: 3 });
    }
}
