//! In-memory block storage.
//!
//! A [`BlockStorage`] backed by a `Vec<u8>`, recording every call so tests
//! can assert the block-count behavior of the transport adapter.

use crate::block::{BlockStorage, BLOCK_SIZE};
use crate::error::TransportError;

/// One recorded storage call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOp {
    /// `read_blocks(lba, count)`.
    Read { lba: u64, count: usize },
    /// `write_blocks(lba, data)` with `data.len() == len`.
    Write { lba: u64, len: usize },
}

/// In-memory block storage with call recording.
#[derive(Debug, Clone)]
pub struct MemoryBlockStorage {
    blocks: Vec<u8>,
    ops: Vec<BlockOp>,
}

impl MemoryBlockStorage {
    /// Create a zero-filled device of `block_count` blocks.
    #[must_use]
    pub fn new(block_count: usize) -> Self {
        Self {
            blocks: vec![0; block_count * BLOCK_SIZE],
            ops: Vec::new(),
        }
    }

    /// Recorded storage calls, in order.
    #[must_use]
    pub fn ops(&self) -> &[BlockOp] {
        &self.ops
    }

    /// Raw device contents.
    #[must_use]
    pub fn contents(&self) -> &[u8] {
        &self.blocks
    }

    /// Seed device contents starting at `lba` without recording an op.
    ///
    /// `data.len()` must be a multiple of the block size.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::OutOfRange`] when the range does not fit,
    /// or [`TransportError::Io`] for a non-aligned length.
    pub fn fill(&mut self, lba: u64, data: &[u8]) -> Result<(), TransportError> {
        let offset = self.byte_offset(lba, data.len())?;
        self.blocks[offset..offset + data.len()].copy_from_slice(data);
        Ok(())
    }

    fn byte_offset(&self, lba: u64, len: usize) -> Result<usize, TransportError> {
        if len % BLOCK_SIZE != 0 {
            return Err(TransportError::Io(format!(
                "unaligned block buffer: {len} bytes"
            )));
        }
        let blocks = len / BLOCK_SIZE;
        let capacity = self.blocks.len() / BLOCK_SIZE;
        let end = lba as usize + blocks;
        if end > capacity {
            return Err(TransportError::OutOfRange {
                lba,
                blocks,
                capacity,
            });
        }
        Ok(lba as usize * BLOCK_SIZE)
    }
}

impl BlockStorage for MemoryBlockStorage {
    fn read_blocks(&mut self, lba: u64, count: usize) -> Result<Vec<u8>, TransportError> {
        self.ops.push(BlockOp::Read { lba, count });

        let offset = self.byte_offset(lba, count * BLOCK_SIZE)?;
        Ok(self.blocks[offset..offset + count * BLOCK_SIZE].to_vec())
    }

    fn write_blocks(&mut self, lba: u64, data: &[u8]) -> Result<usize, TransportError> {
        self.ops.push(BlockOp::Write {
            lba,
            len: data.len(),
        });

        let offset = self.byte_offset(lba, data.len())?;
        self.blocks[offset..offset + data.len()].copy_from_slice(data);
        Ok(data.len())
    }
}
