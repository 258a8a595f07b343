//! Final-block padding: the `0x80` marker, zero fill, and the 64-bit
//! big-endian bit length.

use crate::constants::{Block, BLOCK_LEN};

/// Offset inside the last block where the length field starts.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// The one or two blocks that close out a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalBlocks {
    blocks: [Block; 2],
    count: usize,
}

impl FinalBlocks {
    /// Number of blocks produced (1 or 2).
    pub fn block_count(&self) -> usize {
        self.count
    }

    /// Iterate the padded blocks in the order they must be compressed.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks[..self.count].iter()
    }
}

/// Build the padded tail for a message of `message_len` bytes whose last
/// `tail.len()` (< 64) bytes have not been compressed yet.
///
/// Bit lengths past `u64::MAX` wrap.
pub fn finalize_blocks(message_len: u64, tail: &[u8]) -> FinalBlocks {
    debug_assert!(tail.len() < BLOCK_LEN, "tail must be a partial block");

    let mut blocks = [[0u8; BLOCK_LEN]; 2];
    blocks[0][..tail.len()].copy_from_slice(tail);
    blocks[0][tail.len()] = 0x80;

    // 0x80 plus the length field spill into a second block past 55 bytes.
    let count = if tail.len() < LENGTH_OFFSET { 1 } else { 2 };
    blocks[count - 1][LENGTH_OFFSET..].copy_from_slice(&message_len.wrapping_mul(8).to_be_bytes());

    FinalBlocks { blocks, count }
}
