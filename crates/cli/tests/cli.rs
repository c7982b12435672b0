//! CLI integration tests for the `encoderize` binary.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Run encoderize inside `dir`, isolated from any user config, feeding `stdin`.
fn run_in(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_encoderize"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute encoderize");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn count_svgs(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter(|entry| {
            entry
                .as_ref()
                .unwrap()
                .path()
                .extension()
                .is_some_and(|ext| ext == "svg")
        })
        .count()
}

#[test]
fn prompts_for_text_when_none_given() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &[], "  Go \n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.starts_with("Enter text to encode: "));
    assert!(stdout.contains("Generating light mode SVGs..."));
    assert!(stdout.contains("Generating dark mode SVGs..."));
    assert!(stdout.contains("10 SVGs generated for Go"));

    let light = stdout.find("Generating light mode SVGs...").unwrap();
    let dark = stdout.find("Generating dark mode SVGs...").unwrap();
    assert!(stdout.find("Generating SVGs...").unwrap() < light);
    assert!(light < dark);

    // Input is trimmed before it is used in paths.
    assert_eq!(count_svgs(&dir.path().join("output_Go/light")), 10);
    assert_eq!(count_svgs(&dir.path().join("output_Go/dark")), 10);
}

#[test]
fn positional_text_and_out_dir() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["Hi", "--out-dir", "renders"], "");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let base = dir.path().join("renders").join("output_Hi");
    assert!(base.join("light").join("a1z26_stripe_Hi.svg").exists());
    assert!(base.join("dark").join("braille_stripe_Hi.svg").exists());
}

#[test]
fn discovered_config_is_applied() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("encoderize.toml"),
        "[output]\nroot = \"from-config\"\n\n[encoders.a1z26_stripe]\ndelimiter = \"-\"\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &["abc"], "");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let svg = fs::read_to_string(
        dir.path()
            .join("from-config/output_abc/light/a1z26_stripe_abc.svg"),
    )
    .unwrap();
    assert!(svg.contains("1-2-3"));
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[encoders.braille_stripe]\ncell_size = -1\n").unwrap();

    let output = run_in(dir.path(), &["Go", "--config", "bad.toml"], "");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("braille_stripe.cell_size"), "stderr: {stderr}");
    assert!(!dir.path().join("output_Go").exists());
}

#[test]
fn unencodable_text_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["naïve"], "");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("code128_barcode"), "stderr: {stderr}");
}
