//! Block transport adapter.

use tracing::trace;

use crate::error::TransportError;

/// Fixed transport block size in bytes.
pub const BLOCK_SIZE: usize = 512;

/// Whole-block storage primitive (SD-card style).
///
/// Implementations own bus locking, clocking, device timeouts and any
/// retry policy. Addresses are raw block addresses (LBAs).
pub trait BlockStorage {
    /// Read `count` whole blocks starting at `lba`.
    ///
    /// The returned buffer is `count * 512` bytes.
    ///
    /// # Errors
    ///
    /// Device errors are returned unchanged to the caller.
    fn read_blocks(&mut self, lba: u64, count: usize) -> Result<Vec<u8>, TransportError>;

    /// Write whole blocks starting at `lba`.
    ///
    /// `data.len()` must be a multiple of the block size. Returns the byte
    /// count the device reports as written.
    ///
    /// # Errors
    ///
    /// Device errors are returned unchanged to the caller.
    fn write_blocks(&mut self, lba: u64, data: &[u8]) -> Result<usize, TransportError>;
}

/// Adapter mapping arbitrary byte-range requests onto whole-block
/// operations.
///
/// Reads over-fetch to the next block boundary and truncate; writes
/// zero-pad to the next block boundary. Callers request any byte count
/// without knowledge of the 512-byte granularity.
#[derive(Debug)]
pub struct BlockTransport<S> {
    storage: S,
}

impl<S: BlockStorage> BlockTransport<S> {
    /// Wrap a block storage capability.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Consume the adapter and return the underlying storage.
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Read `byte_count` bytes starting at block `lba`.
    ///
    /// Requests `ceil(byte_count / 512)` blocks from the storage
    /// capability and truncates the raw result, so a read can never come
    /// up short due to integer truncation of the block count.
    ///
    /// # Errors
    ///
    /// Storage errors propagate unchanged.
    pub fn read(&mut self, lba: u64, byte_count: usize) -> Result<Vec<u8>, TransportError> {
        let block_count = byte_count.div_ceil(BLOCK_SIZE);
        trace!(lba, byte_count, block_count, "block read");

        let mut raw = self.storage.read_blocks(lba, block_count)?;
        raw.truncate(byte_count);
        Ok(raw)
    }

    /// Write `data` starting at block `lba`, zero-padded to a block
    /// boundary.
    ///
    /// The pad length is `512 - (data.len() % 512)`, so input that is
    /// already block-aligned gains one full extra zero block. The deployed
    /// firmware expects that trailing block; do not special-case the
    /// aligned path.
    ///
    /// Returns the byte count the storage capability reports as written,
    /// unverified against the padded length.
    ///
    /// # Errors
    ///
    /// Storage errors propagate unchanged.
    pub fn write(&mut self, lba: u64, data: &[u8]) -> Result<usize, TransportError> {
        let padding = BLOCK_SIZE - data.len() % BLOCK_SIZE;
        let mut padded = Vec::with_capacity(data.len() + padding);
        padded.extend_from_slice(data);
        padded.resize(data.len() + padding, 0);

        trace!(
            lba,
            byte_count = data.len(),
            padded_len = padded.len(),
            "block write"
        );
        self.storage.write_blocks(lba, &padded)
    }
}
