//! Verbose transcript logging for `--verbose`.

use std::io::{self, Write};

use crate::config::DigestConfig;
use crate::digest::StreamDigest;

/// Line-oriented progress log; silent unless it was given a sink.
pub struct Transcript<W: Write> {
    sink: Option<W>,
    header_written: bool,
}

impl Transcript<io::Stderr> {
    /// Log to stderr when `enabled`, otherwise drop everything.
    pub fn stderr(enabled: bool) -> Self {
        Self::new(enabled.then(io::stderr))
    }
}

impl<W: Write> Transcript<W> {
    pub fn new(sink: Option<W>) -> Self {
        Self {
            sink,
            header_written: false,
        }
    }

    pub fn config(&mut self, config: &DigestConfig) {
        self.line(&format!("buffer size: {} bytes", config.buffer_size()));
    }

    /// Byte and block counts for a finished input.
    pub fn hashed(&mut self, name: &str, result: &StreamDigest) {
        self.line(&format!(
            "{name}: {} bytes, {} blocks",
            result.bytes, result.blocks
        ));
    }

    pub fn failed(&mut self, name: &str, err: &io::Error) {
        self.line(&format!("{name}: {err}"));
    }

    // Write failures are ignored; losing a log line must not fail a hash.
    fn line(&mut self, message: &str) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        if !self.header_written {
            self.header_written = true;
            let _ = writeln!(sink, "transcript:");
        }
        let _ = writeln!(sink, "- {message}");
    }
}
