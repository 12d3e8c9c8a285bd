mod common;
use common::*;

#[test]
fn help_describes_the_tool() {
    let (stdout, _stderr, exit_code) = run_csvdiff(&["--help"]);
    assert_eq!(exit_code, 0, "csvdiff --help should exit successfully");
    assert!(
        stdout.contains("Compare two CSV files by primary key"),
        "help should describe the tool"
    );
    assert!(stdout.contains("--exclude"), "help should mention --exclude");
    assert!(stdout.contains("--out"), "help should mention --out");
}

#[test]
fn missing_input_file_fails_with_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let real = dir.path().join("real.csv");
    std::fs::write(&real, "ID,v\n1,x\n").unwrap();
    let missing = dir.path().join("missing.csv");
    let out = dir.path().join("out.csv");

    let (_stdout, stderr, exit_code) = run_csvdiff(&[
        missing.to_str().unwrap(),
        real.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);
    assert_eq!(exit_code, 1);
    assert!(
        stderr.contains("cannot read") && stderr.contains("missing.csv"),
        "error should name the unreadable file, got: {}",
        stderr
    );
}

#[test]
fn only_one_input_file_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_csvdiff(&["only_one.csv"]);
    assert_eq!(exit_code, 2, "clap should reject a single positional");
    assert!(!stderr.is_empty());
}

#[test]
fn excluding_the_key_column_fails() {
    let run = diff_files("ID,v\n1,x\n", "ID,v\n1,x\n", &["-x", "ID"]);
    assert_eq!(run.exit_code, 1);
    assert!(
        run.stderr.contains("key column"),
        "error should explain the key column restriction, got: {}",
        run.stderr
    );
}

#[test]
fn excluding_an_unknown_column_fails() {
    let run = diff_files("ID,v\n1,x\n", "ID,v\n1,x\n", &["-x", "nope"]);
    assert_eq!(run.exit_code, 1);
    assert!(
        run.stderr.contains("unknown column 'nope'"),
        "error should name the unknown column, got: {}",
        run.stderr
    );
}

#[test]
fn ragged_row_fails_naming_file_and_line() {
    let good = "ID,v\n1,x\n";
    let ragged = "ID,v\n1,x\n2,y,extra\n";
    let run = diff_files(good, ragged, &[]);
    assert_eq!(run.exit_code, 1);
    assert!(
        run.stderr.contains("line 3"),
        "error should point at the ragged row, got: {}",
        run.stderr
    );
    assert!(
        run.stderr.contains("fields"),
        "error should mention the field count, got: {}",
        run.stderr
    );
}

#[test]
fn zero_queue_size_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_csvdiff(&["a.csv", "b.csv", "--queue-size", "0"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("queue size"), "stderr: {}", stderr);
}

#[test]
fn quiet_and_verbose_conflict() {
    let (_stdout, _stderr, exit_code) = run_csvdiff(&["a.csv", "b.csv", "-q", "-v"]);
    assert_eq!(exit_code, 2, "clap should reject -q with -v");
}

#[test]
fn default_output_file_name_is_result_diff() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.csv"), "ID,v\n1,x\n").unwrap();
    std::fs::write(dir.path().join("b.csv"), "ID,v\n1,y\n").unwrap();

    let binary_path = std::env::current_dir().unwrap().join(if cfg!(debug_assertions) {
        "target/debug/csvdiff"
    } else {
        "target/release/csvdiff"
    });

    let output = std::process::Command::new(binary_path)
        .args(["a.csv", "b.csv"])
        .current_dir(dir.path())
        .output()
        .expect("Failed to start csvdiff");

    assert_eq!(output.status.code(), Some(0));
    let written = std::fs::read_to_string(dir.path().join("result_diff.csv"))
        .expect("default result file should exist");
    assert!(written.starts_with("ID,v\n"));
}

#[test]
fn unwritable_output_destination_fails() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.csv");
    let b = dir.path().join("b.csv");
    std::fs::write(&a, "ID,v\n1,x\n").unwrap();
    std::fs::write(&b, "ID,v\n1,x\n").unwrap();
    let out = dir.path().join("no_such_dir").join("out.csv");

    let (_stdout, stderr, exit_code) = run_csvdiff(&[
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);
    assert_eq!(exit_code, 1);
    assert!(
        stderr.contains("cannot write"),
        "error should name the write failure, got: {}",
        stderr
    );
}

#[test]
fn size_fallback_warns_but_still_reports_the_real_error() {
    // Neither input exists: side selection cannot size them, degrades to
    // the first argument, and the open then fails for real.
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("gone_a.csv");
    let b = dir.path().join("gone_b.csv");
    let out = dir.path().join("out.csv");

    let (_stdout, stderr, exit_code) = run_csvdiff(&[
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);
    assert_eq!(exit_code, 1);
    assert!(
        stderr.contains("warning") && stderr.contains("indexing the first file"),
        "stderr: {}",
        stderr
    );
    assert!(stderr.contains("cannot read"), "stderr: {}", stderr);
}
