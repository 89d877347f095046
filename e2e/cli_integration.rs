//! Black-box tests for the `mandelpool` binary: invoke it via
//! `std::process::Command` and check the process's observable contract
//! (exit code, file on disk) rather than any internal API.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Locate the `mandelpool` binary produced by Cargo.
fn mandelpool_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_mandelpool") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("mandelpool");
    p
}

fn read_ppm_header(path: &std::path::Path) -> (String, usize, usize, u32) {
    let mut f = fs::File::open(path).unwrap();
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).unwrap();

    let text = String::from_utf8_lossy(&buf);
    let mut fields = text.split_whitespace();
    let magic = fields.next().unwrap().to_string();
    let width: usize = fields.next().unwrap().parse().unwrap();
    let height: usize = fields.next().unwrap().parse().unwrap();
    let maxval: u32 = fields.next().unwrap().parse().unwrap();
    (magic, width, height, maxval)
}

#[test]
fn renders_a_small_image_and_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.ppm");

    let status = Command::new(mandelpool_bin())
        .args([
            "--output",
            output.to_str().unwrap(),
            "--width",
            "16",
            "--height",
            "12",
            "--iterations",
            "50",
            "--workers",
            "2",
            "--split",
            "2",
        ])
        .status()
        .expect("failed to run mandelpool");

    assert!(status.success(), "mandelpool should exit 0");
    let (magic, width, height, maxval) = read_ppm_header(&output);
    assert_eq!(magic, "P6");
    assert_eq!(width, 16);
    assert_eq!(height, 12);
    assert_eq!(maxval, 255);
}

#[test]
fn async_flag_produces_a_well_formed_file_too() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("async.ppm");

    let status = Command::new(mandelpool_bin())
        .args([
            "--output",
            output.to_str().unwrap(),
            "--width",
            "8",
            "--height",
            "8",
            "--async",
        ])
        .status()
        .expect("failed to run mandelpool");

    assert!(status.success());
    let (magic, width, height, _) = read_ppm_header(&output);
    assert_eq!(magic, "P6");
    assert_eq!(width, 8);
    assert_eq!(height, 8);
}

#[test]
fn unknown_palette_name_is_rejected_before_any_rendering() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("never.ppm");

    let status = Command::new(mandelpool_bin())
        .args([
            "--output",
            output.to_str().unwrap(),
            "--palette",
            "nonexistent",
        ])
        .status()
        .expect("failed to run mandelpool");

    assert!(!status.success());
    assert!(!output.exists());
}

#[test]
fn help_flag_exits_zero_and_prints_usage() {
    let out = Command::new(mandelpool_bin())
        .arg("--help")
        .output()
        .expect("failed to run mandelpool");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.to_lowercase().contains("usage"));
}
