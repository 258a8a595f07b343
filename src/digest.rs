//! Streaming SHA-256: incremental state, digest value, and the driver that
//! pulls bytes from a [`ByteSource`].

use std::fmt;
use std::io::{self, Read};

use crate::compress::{process_block, State};
use crate::config::DigestConfig;
use crate::constants::{Block, BLOCK_LEN, DIGEST_LEN, INITIAL_STATE};
use crate::padding::finalize_blocks;

/// Anything that can hand out message bytes in chunks.
///
/// `Ok(0)` signals end of data. Short reads are fine; the driver buffers
/// partial blocks itself.
pub trait ByteSource {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl<R: Read> ByteSource for R {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read(buf)
    }
}

/// A finished 256-bit digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    fn from_state(state: &State) -> Self {
        let mut out = [0u8; DIGEST_LEN];
        for (bytes, word) in out.chunks_exact_mut(4).zip(state) {
            bytes.copy_from_slice(&word.to_be_bytes());
        }
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// 64 lowercase hex characters, most significant byte first.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Running state of one hash computation.
///
/// Consumed by [`Sha256::finalize`]; a new computation always starts from
/// the initial hash value.
#[derive(Clone)]
pub struct Sha256 {
    state: State,
    pending: Block,
    pending_len: usize,
    message_len: u64,
    blocks: u64,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256 {
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            pending: [0u8; BLOCK_LEN],
            pending_len: 0,
            message_len: 0,
            blocks: 0,
        }
    }

    /// Total bytes fed so far.
    pub fn message_len(&self) -> u64 {
        self.message_len
    }

    /// Feed more message bytes. Every completed block is compressed at once.
    pub fn update(&mut self, mut data: &[u8]) {
        self.message_len = self.message_len.wrapping_add(data.len() as u64);

        if self.pending_len > 0 {
            let take = (BLOCK_LEN - self.pending_len).min(data.len());
            self.pending[self.pending_len..self.pending_len + take].copy_from_slice(&data[..take]);
            self.pending_len += take;
            data = &data[take..];
            if self.pending_len < BLOCK_LEN {
                return;
            }
            let block = self.pending;
            self.compress(&block);
            self.pending_len = 0;
        }

        let mut chunks = data.chunks_exact(BLOCK_LEN);
        for chunk in &mut chunks {
            let block: &Block = chunk
                .try_into()
                .expect("chunks_exact yields whole blocks");
            self.compress(block);
        }
        let rest = chunks.remainder();
        self.pending[..rest.len()].copy_from_slice(rest);
        self.pending_len = rest.len();
    }

    /// Pad, compress the final block(s), and return the digest.
    pub fn finalize(self) -> Digest {
        self.finish().digest
    }

    fn finish(mut self) -> StreamDigest {
        let tail = finalize_blocks(self.message_len, &self.pending[..self.pending_len]);
        for block in tail.blocks() {
            self.compress(block);
        }
        StreamDigest {
            digest: Digest::from_state(&self.state),
            bytes: self.message_len,
            blocks: self.blocks,
        }
    }

    fn compress(&mut self, block: &Block) {
        process_block(&mut self.state, block);
        self.blocks += 1;
    }
}

/// Result of hashing a whole source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamDigest {
    pub digest: Digest,
    /// Message bytes read from the source.
    pub bytes: u64,
    /// Blocks compressed, padding blocks included.
    pub blocks: u64,
}

/// Drain `source` in `config.buffer_size` chunks and digest everything it
/// yields.
///
/// Interrupted reads are retried. Any other read error abandons the
/// computation and is returned unchanged.
pub fn digest_source<S: ByteSource + ?Sized>(
    source: &mut S,
    config: &DigestConfig,
) -> io::Result<StreamDigest> {
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; config.buffer_size()];
    loop {
        let read = match source.read_chunk(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        hasher.update(&buffer[..read]);
    }
    Ok(hasher.finish())
}
