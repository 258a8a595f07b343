//! SHA-256 helpers returning lowercase hex strings.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::DigestConfig;
use crate::digest::{digest_source, ByteSource, Sha256};

/// Hash raw bytes and return a lowercase hex string.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().to_hex()
}

/// Hash the UTF-8 bytes of `text`.
pub fn sha256_text(text: &str) -> String {
    sha256_hex(text.as_bytes())
}

/// Drain a byte source with the default buffer size.
pub fn sha256_source<S: ByteSource + ?Sized>(source: &mut S) -> io::Result<String> {
    let result = digest_source(source, &DigestConfig::default())?;
    Ok(result.digest.to_hex())
}

/// Hash a file by streaming it in fixed-size chunks.
pub fn sha256_file(path: &Path) -> io::Result<String> {
    let mut file = fs::File::open(path)?;
    sha256_source(&mut file)
}
