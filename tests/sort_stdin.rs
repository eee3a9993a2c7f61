use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Helper to run the sort_stdin binary with `input` piped to stdin
fn run_with_stdin(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sort_stdin"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Binary should start");

    child
        .stdin
        .take()
        .expect("Should have stdin")
        .write_all(input.as_bytes())
        .expect("Should write stdin");

    child.wait_with_output().expect("Binary should finish")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_blank_input_prints_notice() {
    let output = run_with_stdin("  \n ");
    assert!(output.status.success(), "Blank input should exit 0");

    let stdout = stdout_of(&output);
    assert!(stdout.contains("No input given"));
    assert!(!stdout.contains("Sorted"));
}

#[test]
fn test_delimiters_only_print_no_numbers_notice() {
    let output = run_with_stdin(",,,");
    assert!(output.status.success(), "Delimiter-only input should exit 0");

    let stdout = stdout_of(&output);
    assert!(stdout.contains("No valid integers were found"));
    assert!(!stdout.contains("No input given"));
    assert!(!stdout.contains("Sorted"));
}

#[test]
fn test_numbers_print_original_then_sorted() {
    let output = run_with_stdin("3 1 2");
    assert!(output.status.success(), "Valid input should exit 0");

    let stdout = stdout_of(&output);
    let original = stdout.find("Original:").expect("Should print the original");
    let sorted = stdout.find("Sorted:").expect("Should print the sorted copy");
    assert!(original < sorted, "Original should come before sorted");
    assert!(stdout[original..sorted].contains("3, 1, 2"));
    assert!(stdout[sorted..].contains("1, 2, 3"));
}
