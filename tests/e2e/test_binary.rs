//! Integration tests for the edm-mindmap binary.
//!
//! These tests run the compiled binary against the bundled demo catalogue
//! and against broken inputs in temporary directories.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path to the compiled binary, provided by cargo for integration tests.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_edm-mindmap"))
}

/// The bundled demo catalogue.
fn demo_catalogue() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path.push("papers.yaml");
    path
}

/// Run the binary with `args` from `cwd`.
fn run_binary(cwd: &Path, args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run binary")
}

// ── Success ───────────────────────────────────────────────────────────────────

#[test]
fn test_renders_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("map.png");
    let yaml = demo_catalogue();
    let output = run_binary(
        dir.path(),
        &["--yaml", yaml.to_str().unwrap(), "--output", out.to_str().unwrap()],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mind map saved to:"), "stdout: {stdout}");
    assert!(fs::read(&out).unwrap().starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn test_renders_svg_with_every_paper() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("map.svg");
    let yaml = demo_catalogue();
    let output = run_binary(
        dir.path(),
        &["--yaml", yaml.to_str().unwrap(), "--output", out.to_str().unwrap()],
    );
    assert!(output.status.success());

    let svg = fs::read_to_string(&out).unwrap();
    for name in ["Takens", "Sauer", "Deyle", "Park"] {
        assert!(svg.contains(&format!(">{name}</tspan>")), "missing {name}");
    }
    // Both Ye papers are from 2015.
    assert!(svg.contains(">(2015)</tspan>"));
    assert!(svg.contains(">(2015)[2]</tspan>"));
}

#[test]
fn test_default_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(demo_catalogue(), dir.path().join("papers.yaml")).unwrap();
    let output = run_binary(dir.path(), &[]);
    assert!(output.status.success());
    assert!(dir.path().join("edm_mindmap.png").exists());
}

// ── Failure ───────────────────────────────────────────────────────────────────

#[test]
fn test_missing_yaml_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_binary(dir.path(), &["--yaml", "nope/papers.yaml"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope/papers.yaml"), "stderr: {stderr}");
    assert!(!dir.path().join("edm_mindmap.png").exists());
}

#[test]
fn test_malformed_paper_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("papers.yaml"),
        "categories:\n  - name: Theory\n    papers:\n      - authors: \"Smith, J.\"\n",
    )
    .unwrap();
    let output = run_binary(dir.path(), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing `year`"), "stderr: {stderr}");
    assert!(!dir.path().join("edm_mindmap.png").exists());
}

#[test]
fn test_rejects_unknown_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_binary(dir.path(), &["--dpi", "300"]);
    assert!(!output.status.success());
}
