//! Property-based tests for the fixed-width codec.
//!
//! Validates the packing invariants across the input space:
//! 1. **Round-trip**: unpacking a packed buffer returns the input values
//! 2. **Padding**: every byte past the serialized values is zero
//! 3. **Capacity**: packing fails whenever the values exceed the buffer

use proptest::prelude::*;
use ucp_codec::{
    pack_doubles, pack_unsigned_integers, unpack_doubles, unpack_unsigned_integers, CodecError,
    DOUBLE_SIZE, UNSIGNED_SIZE,
};

/// Strategy for operand-like double values (finite, bit-exact under
/// round-trip).
fn operand_doubles() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e15f64..1e15f64, 0..16)
}

proptest! {
    #[test]
    fn doubles_roundtrip(values in operand_doubles(), extra in 0usize..64) {
        let size = values.len() * DOUBLE_SIZE + extra;
        let buffer = pack_doubles(&values, size).unwrap();

        prop_assert_eq!(buffer.len(), size);
        prop_assert_eq!(unpack_doubles(&buffer, values.len()).unwrap(), values);
    }

    #[test]
    fn doubles_padding_is_zero(values in operand_doubles(), extra in 1usize..64) {
        let serialized = values.len() * DOUBLE_SIZE;
        let buffer = pack_doubles(&values, serialized + extra).unwrap();

        prop_assert!(buffer[serialized..].iter().all(|&b| b == 0));
    }

    #[test]
    fn doubles_overflow_always_fails(values in prop::collection::vec(-1e15f64..1e15f64, 1..16), shortfall in 1usize..8) {
        let size = values.len() * DOUBLE_SIZE - shortfall;
        let err = pack_doubles(&values, size).unwrap_err();

        prop_assert_eq!(err, CodecError::BufferOverflow {
            needed: values.len() * DOUBLE_SIZE,
            capacity: size,
        });
    }

    #[test]
    fn unsigned_roundtrip(values in prop::collection::vec(any::<u32>(), 0..16), extra in 0usize..16) {
        let size = values.len() * UNSIGNED_SIZE + extra;
        let buffer = pack_unsigned_integers(&values, size).unwrap();

        prop_assert_eq!(buffer.len(), size);
        prop_assert_eq!(unpack_unsigned_integers(&buffer, values.len()).unwrap(), values);
    }

    #[test]
    fn unpack_rejects_short_buffers(len in 0usize..DOUBLE_SIZE) {
        let buffer = vec![0u8; len];
        prop_assert!(unpack_doubles(&buffer, 1).is_err());
    }
}
