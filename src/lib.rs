//! Streaming SHA-256 (FIPS 180-4) with a small `sha256sum` front end.
//!
//! The core pipeline is `digest` → `schedule` → `compress`, with `padding`
//! applied once the byte source is exhausted.

pub mod compress;
pub mod config;
pub mod constants;
pub mod digest;
pub mod hashing;
pub mod input;
pub mod padding;
pub mod report;
pub mod schedule;
pub mod transcript;

pub use config::DigestConfig;
pub use digest::{digest_source, ByteSource, Digest, Sha256, StreamDigest};
pub use hashing::{sha256_file, sha256_hex};
