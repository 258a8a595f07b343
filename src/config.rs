//! Driver configuration (read buffer sizing).

use anyhow::{anyhow, Context, Result};
use std::env;

use crate::constants::BLOCK_LEN;

/// Read buffer size used when nothing else is configured.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Environment variable consulted for the buffer size.
pub const BUFFER_SIZE_ENV: &str = "SHA256SUM_BUFFER_SIZE";

/// Settings for [`crate::digest::digest_source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestConfig {
    buffer_size: usize,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl DigestConfig {
    /// Build a config with an explicit buffer size (a non-zero multiple of 64).
    pub fn with_buffer_size(buffer_size: usize) -> Result<Self> {
        if buffer_size < BLOCK_LEN || buffer_size % BLOCK_LEN != 0 {
            return Err(anyhow!(
                "buffer size must be a non-zero multiple of {BLOCK_LEN} bytes, got {buffer_size}"
            ));
        }
        Ok(Self { buffer_size })
    }

    /// Resolve the config from a CLI value, falling back to the environment
    /// and then the default.
    pub fn resolve(flag: Option<usize>) -> Result<Self> {
        if let Some(size) = flag {
            return Self::with_buffer_size(size).context("invalid --buffer-size");
        }
        match env::var(BUFFER_SIZE_ENV) {
            Ok(value) => {
                let size = value
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("parse {BUFFER_SIZE_ENV}={value:?}"))?;
                Self::with_buffer_size(size).with_context(|| format!("invalid {BUFFER_SIZE_ENV}"))
            }
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(err) => Err(anyhow!("read {BUFFER_SIZE_ENV}: {err}")),
        }
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }
}
