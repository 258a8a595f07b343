//! `sha256sum` entrypoint: hash files, literal text, or standard input.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use sha256_stream::config::DigestConfig;
use sha256_stream::digest::digest_source;
use sha256_stream::input::Input;
use sha256_stream::report::{render, Format, Line, Record};
use sha256_stream::transcript::Transcript;

/// CLI arguments for the digest tool.
#[derive(Parser, Debug)]
#[command(
    name = "sha256sum",
    version,
    about = "Print SHA-256 digests of files, text, or standard input"
)]
struct Args {
    /// Files to hash (standard input when none are given; `-` also means stdin)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Hash the UTF-8 bytes of TEXT (repeatable)
    #[arg(short, long = "string", value_name = "TEXT")]
    strings: Vec<String>,

    /// Emit one JSON object per input instead of text lines
    #[arg(long)]
    json: bool,

    /// Read buffer size in bytes (multiple of 64)
    #[arg(long, value_name = "BYTES")]
    buffer_size: Option<usize>,

    /// Print a transcript of per-input byte and block counts to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    run(args)
}

/// Hash every input in order; any unavailable input makes the exit status 1.
fn run(args: Args) -> Result<ExitCode> {
    let config = DigestConfig::resolve(args.buffer_size)?;
    let format = if args.json { Format::Json } else { Format::Text };
    let mut transcript = Transcript::stderr(args.verbose);
    transcript.config(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = false;

    for input in Input::collect(args.strings, args.files) {
        let name = input.label();
        let record = match input
            .open()
            .and_then(|mut source| digest_source(source.as_mut(), &config))
        {
            Ok(result) => {
                transcript.hashed(&name, &result);
                Record::hashed(name, result.digest.to_hex(), result.bytes)
            }
            Err(err) => {
                transcript.failed(&name, &err);
                Record::unavailable(name, &err)
            }
        };
        failed |= record.is_failure();

        match render(&record, format)? {
            Line::Stdout(line) => writeln!(out, "{line}")?,
            Line::Stderr(line) => {
                out.flush()?;
                eprintln!("{line}");
            }
        }
    }
    out.flush()?;

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
