//! Input selection: standard input, named files, or literal text.

use std::fs;
use std::io::{self, Cursor};
use std::path::PathBuf;

use crate::digest::ByteSource;

/// Name shown for standard input.
pub const STDIN_LABEL: &str = "-";

/// One thing to hash, in the order given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
    Text(String),
}

impl Input {
    /// Build the input list: literal texts first, then files. With neither,
    /// standard input is hashed. A file named `-` also means standard input.
    pub fn collect(texts: Vec<String>, files: Vec<PathBuf>) -> Vec<Input> {
        let mut inputs: Vec<Input> = texts.into_iter().map(Input::Text).collect();
        inputs.extend(files.into_iter().map(|path| {
            if path.as_os_str() == STDIN_LABEL {
                Input::Stdin
            } else {
                Input::File(path)
            }
        }));
        if inputs.is_empty() {
            inputs.push(Input::Stdin);
        }
        inputs
    }

    /// Display name used in output lines.
    pub fn label(&self) -> String {
        match self {
            Input::Stdin => STDIN_LABEL.to_string(),
            Input::File(path) => path.display().to_string(),
            Input::Text(text) => format!("{text:?}"),
        }
    }

    /// Open the input as a byte source.
    pub fn open(&self) -> io::Result<Box<dyn ByteSource>> {
        match self {
            Input::Stdin => Ok(Box::new(io::stdin().lock())),
            Input::File(path) => Ok(Box::new(fs::File::open(path)?)),
            Input::Text(text) => Ok(Box::new(Cursor::new(text.clone().into_bytes()))),
        }
    }
}
