use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Temporary working directory holding the files under comparison
struct TestFixture {
    temp_dir: TempDir,
}

impl TestFixture {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    fn create_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Runs the binary with the fixture directory as working directory
    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_fcmp_cli"))
            .args(args)
            .current_dir(self.dir())
            .env("RUST_LOG", "off")
            .output()
            .expect("Failed to execute fcmp_cli")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_identical_files() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", b"same\ncontent\n");
    fixture.create_file("b.txt", b"same\ncontent\n");

    let output = fixture.run(&["a.txt", "b.txt"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Comparing files a.txt and b.txt"));
    assert!(out.contains("FC: no differences encountered"));
}

#[test]
fn test_text_differences() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", b"one\ntwo\nthree\n");
    fixture.create_file("b.txt", b"one\nTWO\nthree\n");

    let output = fixture.run(&["a.txt", "b.txt"]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("***** a.txt\none\ntwo\nthree\n***** b.txt\none\nTWO\nthree\n*****"));
}

#[test]
fn test_ignore_case_switches() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", b"Hello\n");
    fixture.create_file("b.txt", b"hELLO\n");

    assert_eq!(fixture.run(&["a.txt", "b.txt", "--ignore-case"]).status.code(), Some(0));
    assert_eq!(fixture.run(&["/c", "a.txt", "b.txt"]).status.code(), Some(0));
    assert_eq!(fixture.run(&["a.txt", "b.txt"]).status.code(), Some(1));
}

#[test]
fn test_line_numbers() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", b"x\ny\n");
    fixture.create_file("b.txt", b"x\nz\n");

    let output = fixture.run(&["/N", "a.txt", "b.txt"]);
    assert!(stdout(&output).contains("    2:  y"));
}

#[test]
fn test_binary_comparison() {
    let fixture = TestFixture::new();
    fixture.create_file("a.bin", b"\x00\x01\x02");
    fixture.create_file("b.bin", b"\x00\xFF\x02\x03");

    let output = fixture.run(&["a.bin", "b.bin"]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("00000001: 01 FF"));
    assert!(out.contains("FC: b.bin longer than a.bin"));
}

#[test]
fn test_missing_file() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", b"x");

    let output = fixture.run(&["a.txt", "missing.txt"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("FC: cannot open missing.txt - No such file or folder"));
}

#[test]
fn test_insufficient_file_specifications() {
    let fixture = TestFixture::new();
    let output = fixture.run(&["a.txt"]);
    assert_eq!(output.status.code(), Some(255));
    assert!(stderr(&output).contains("FC: Insufficient number of file specifications"));
}

#[test]
fn test_invalid_switch() {
    let fixture = TestFixture::new();
    let output = fixture.run(&["--no-such-switch", "a", "b"]);
    assert_eq!(output.status.code(), Some(255));
    assert!(stderr(&output).contains("FC: Invalid Switch"));
}

#[test]
fn test_usage_request_exits_invalid() {
    let fixture = TestFixture::new();
    for switch in ["/?", "--help"] {
        let output = fixture.run(&[switch]);
        assert_eq!(output.status.code(), Some(255));
        assert!(stdout(&output).contains("Usage"));
    }
}

#[test]
fn test_single_wildcard() {
    let fixture = TestFixture::new();
    fixture.create_file("ref.txt", b"data\n");
    fixture.create_file("x.dat", b"data\n");
    fixture.create_file("y.dat", b"data\n");

    let output = fixture.run(&["ref.txt", "*.dat"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Comparing files ref.txt and x.dat"));
    assert!(out.contains("Comparing files ref.txt and y.dat"));
}

#[test]
fn test_dual_wildcard_reports_missing_counterpart() {
    let fixture = TestFixture::new();
    fixture.create_file("a.cpp", b"int a;\n");
    fixture.create_file("b.cpp", b"int b;\n");
    fixture.create_file("a.h", b"int a;\n");

    let output = fixture.run(&["*.cpp", "*.h"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("Comparing files a.cpp and a.h"));
    assert!(stderr(&output).contains("FC: cannot open b.h - No such file or folder"));
}

#[test]
fn test_pattern_without_matches() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", b"x");

    let output = fixture.run(&["a.txt", "*.zip"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("FC: cannot open *.zip"));
}

#[test]
fn test_configured_defaults() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", b"A  B\n");
    fixture.create_file("b.txt", b"a b\n");
    let config = fixture.create_file(
        "fcmp.toml",
        b"[defaults]\nignore_case = true\ncompress_whitespace = true\n",
    );
    let config = config.to_str().unwrap();

    assert_eq!(fixture.run(&["a.txt", "b.txt", "--config", config]).status.code(), Some(0));
    assert_eq!(fixture.run(&["a.txt", "b.txt", "--config", "absent.toml"]).status.code(), Some(1));
}
