// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run the csvdiff binary with the given arguments.
pub fn run_csvdiff(args: &[&str]) -> (String, String, i32) {
    // Use the built binary directly instead of cargo run to avoid compilation output
    let binary_path = if cfg!(debug_assertions) {
        "./target/debug/csvdiff"
    } else {
        "./target/release/csvdiff"
    };

    let output = Command::new(binary_path)
        .args(args)
        .output()
        .expect("Failed to start csvdiff");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Outcome of one diff run over two in-memory CSV documents.
pub struct DiffRun {
    pub stderr: String,
    pub exit_code: i32,
    pub result_lines: Vec<String>,
    _dir: TempDir,
}

impl DiffRun {
    /// First line of the result file (the header).
    pub fn header(&self) -> &str {
        self.result_lines.first().map(String::as_str).unwrap_or("")
    }

    /// Result rows after the header, in file order.
    pub fn data_rows(&self) -> Vec<&str> {
        self.result_lines.iter().skip(1).map(String::as_str).collect()
    }

    /// Result rows after the header as a sorted list, for assertions
    /// that must not depend on emission order.
    pub fn sorted_data_rows(&self) -> Vec<&str> {
        let mut rows = self.data_rows();
        rows.sort_unstable();
        rows
    }
}

/// Write the two documents to temp files, diff them, and read the result
/// file back. Extra arguments are appended after the default set.
pub fn diff_files(file_a: &str, file_b: &str, extra_args: &[&str]) -> DiffRun {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path_a = write_file(dir.path(), "a.csv", file_a);
    let path_b = write_file(dir.path(), "b.csv", file_b);
    let out = dir.path().join("result.csv");

    let mut args: Vec<&str> = vec![
        path_a.to_str().unwrap(),
        path_b.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ];
    args.extend_from_slice(extra_args);

    let (_stdout, stderr, exit_code) = run_csvdiff(&args);

    let result_lines = fs::read_to_string(&out)
        .map(|content| content.lines().map(str::to_string).collect())
        .unwrap_or_default();

    DiffRun {
        stderr,
        exit_code,
        result_lines,
        _dir: dir,
    }
}

fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}
