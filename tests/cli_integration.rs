use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

fn bin() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_sha256sum"));
    command.env_remove("SHA256SUM_BUFFER_SIZE");
    command
}

fn run_with_stdin(mut command: Command, stdin: &[u8]) -> Output {
    command.stdin(Stdio::piped());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());
    let mut child = command.spawn().expect("spawn sha256sum");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(stdin)
        .expect("write stdin");
    child.wait_with_output().expect("wait sha256sum")
}

fn write_file(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write input file");
    path
}

#[test]
fn hashes_stdin_when_no_files_given() {
    let output = run_with_stdin(bin(), b"abc");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), format!("{ABC}  -\n"));
}

#[test]
fn empty_stdin_gives_empty_digest() {
    let output = run_with_stdin(bin(), b"");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), format!("{EMPTY}  -\n"));
}

#[test]
fn hashes_each_file_in_order() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let a = write_file(temp_dir.path(), "a.txt", b"abc");
    let b = write_file(temp_dir.path(), "b.txt", b"");

    let output = bin().arg(&a).arg(&b).output().expect("run sha256sum");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("{ABC}  {}", a.display()),
            format!("{EMPTY}  {}", b.display()),
        ]
    );
}

#[test]
fn missing_file_fails_but_later_inputs_still_hash() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let missing = temp_dir.path().join("missing.bin");
    let present = write_file(temp_dir.path(), "present.txt", b"abc");

    let output = bin().arg(&missing).arg(&present).output().expect("run sha256sum");
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, format!("{ABC}  {}\n", present.display()));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&format!("'{}'", missing.display())));
    assert!(stderr.contains("No such file or directory"));
}

#[test]
fn string_flag_hashes_text() {
    let output = bin().args(["-s", "abc"]).output().expect("run sha256sum");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{ABC}  \"abc\"\n")
    );
}

#[test]
fn json_output_reports_successes_and_failures() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let present = write_file(temp_dir.path(), "present.txt", b"abc");
    let missing = temp_dir.path().join("missing.bin");

    let output = bin()
        .arg("--json")
        .arg(&present)
        .arg(&missing)
        .output()
        .expect("run sha256sum");
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("parse record"))
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["sha256"], ABC);
    assert_eq!(records[0]["bytes"], 3);
    assert_eq!(records[1]["outcome"], "input_unavailable");
    assert_eq!(records[1]["error"]["code"], "input_unavailable");
}

#[test]
fn buffer_size_does_not_change_digest() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
    let path = write_file(temp_dir.path(), "data.bin", &data);

    let mut seen = Vec::new();
    for size in ["64", "192", "8192"] {
        let output = bin()
            .args(["--buffer-size", size])
            .arg(&path)
            .output()
            .expect("run sha256sum");
        assert!(output.status.success());
        seen.push(String::from_utf8_lossy(&output.stdout).into_owned());
    }
    assert!(seen.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn invalid_buffer_size_is_rejected() {
    let output = bin()
        .args(["--buffer-size", "100", "-s", "abc"])
        .output()
        .expect("run sha256sum");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_buffer_size_env_is_rejected() {
    let output = bin()
        .env("SHA256SUM_BUFFER_SIZE", "lots")
        .args(["-s", "abc"])
        .output()
        .expect("run sha256sum");
    assert!(!output.status.success());
}

#[test]
fn verbose_writes_transcript_to_stderr() {
    let output = bin()
        .args(["-v", "-s", "abc"])
        .output()
        .expect("run sha256sum");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("transcript:"));
    assert!(stderr.contains("3 bytes, 1 blocks"));
}

#[test]
fn buffer_size_flag_wins_over_environment() {
    let output = bin()
        .env("SHA256SUM_BUFFER_SIZE", "lots")
        .args(["--buffer-size", "64", "-s", "abc"])
        .output()
        .expect("run sha256sum");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{ABC}  \"abc\"\n")
    );
}

#[test]
fn valid_buffer_size_env_is_used() {
    let output = bin()
        .env("SHA256SUM_BUFFER_SIZE", "128")
        .args(["-v", "-s", "abc"])
        .output()
        .expect("run sha256sum");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("buffer size: 128 bytes"));
}

#[test]
fn ragged_buffer_size_env_is_rejected() {
    let output = bin()
        .env("SHA256SUM_BUFFER_SIZE", "100")
        .args(["-s", "abc"])
        .output()
        .expect("run sha256sum");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid SHA256SUM_BUFFER_SIZE"));
}

#[cfg(unix)]
#[test]
fn directory_input_reports_os_error() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let output = bin().arg(temp_dir.path()).output().expect("run sha256sum");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&format!("'{}'", temp_dir.path().display())));
    assert!(stderr.contains("os error"));
}
