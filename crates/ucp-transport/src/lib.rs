//! Byte-range access over whole-block storage.
//!
//! The uncertainty coprocessor is reachable only through a block-addressed
//! storage transport: every exchange is a read or write of whole 512-byte
//! blocks. [`BlockTransport`] maps arbitrary `(lba, byte count)` requests
//! onto the [`BlockStorage`] primitive so callers never deal with block
//! granularity.
//!
//! Addresses are raw block addresses (LBAs) end to end; no byte-offset
//! arithmetic happens in this crate.

#![forbid(unsafe_code)]

mod block;
mod error;
mod memory;

pub use block::{BlockStorage, BlockTransport, BLOCK_SIZE};
pub use error::TransportError;
pub use memory::{BlockOp, MemoryBlockStorage};
