//! Per-input result records and their text / JSON rendering.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io;

/// Program name used in error lines.
pub const TOOL_NAME: &str = "sha256sum";

/// Error code for inputs that could not be opened or read.
pub const INPUT_UNAVAILABLE: &str = "input_unavailable";

/// Outcome classification for a single input.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Hashed,
    InputUnavailable,
}

/// Error report recorded when an input fails.
#[derive(Serialize, Debug, Clone)]
pub struct ErrorReport {
    pub code: String,
    pub message: String,
}

/// One line of output: a digest or a failure for a named input.
#[derive(Serialize, Debug, Clone)]
pub struct Record {
    pub name: String,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl Record {
    pub fn hashed(name: impl Into<String>, sha256: String, bytes: u64) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Hashed,
            sha256: Some(sha256),
            bytes: Some(bytes),
            error: None,
        }
    }

    pub fn unavailable(name: impl Into<String>, err: &io::Error) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::InputUnavailable,
            sha256: None,
            bytes: None,
            error: Some(ErrorReport {
                code: INPUT_UNAVAILABLE.to_string(),
                message: err.to_string(),
            }),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.outcome != Outcome::Hashed
    }
}

/// Output style chosen on the command line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Rendered record plus the stream it belongs on.
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    Stdout(String),
    Stderr(String),
}

/// Render a record in the requested format.
///
/// Text failures go to stderr; JSON keeps everything on stdout.
pub fn render(record: &Record, format: Format) -> Result<Line> {
    match format {
        Format::Json => {
            let json = serde_json::to_string(record).context("serialize record")?;
            Ok(Line::Stdout(json))
        }
        Format::Text => match (&record.sha256, &record.error) {
            (Some(sha256), _) => Ok(Line::Stdout(format!("{sha256}  {}", record.name))),
            (None, Some(error)) => Ok(Line::Stderr(format!(
                "{TOOL_NAME}: '{}': {}",
                record.name, error.message
            ))),
            (None, None) => Ok(Line::Stderr(format!(
                "{TOOL_NAME}: '{}': no result",
                record.name
            ))),
        },
    }
}
