//! Message schedule expansion: one block into 64 words.

use crate::constants::Block;

/// Number of words in a message schedule.
pub const SCHEDULE_LEN: usize = 64;

/// The 64 derived words consumed by one compression pass.
pub type Schedule = [u32; SCHEDULE_LEN];

#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand a block into its message schedule.
///
/// The first 16 words are the block read as big-endian `u32`s; the rest are
/// mixed from earlier words. Each call builds a fresh array on the stack.
pub fn expand(block: &Block) -> Schedule {
    let mut w = [0u32; SCHEDULE_LEN];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for t in 16..SCHEDULE_LEN {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }
    w
}
