//! Test assertion helpers.

use std::process::Output;

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stdout contains a string.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        out.contains(expected),
        "stdout missing '{}', got: {}",
        expected,
        out
    );
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Assert stdout does NOT contain a string.
pub fn assert_stdout_excludes(output: &Output, excluded: &str) {
    let out = stdout(output);
    assert!(
        !out.contains(excluded),
        "stdout should not contain '{}', got: {}",
        excluded,
        out
    );
}

/// Assert a header block matches the generated layout.
pub fn assert_header(text: &str, id: &str, project_name: Option<&str>) {
    let mut lines = text.lines();

    let first = lines.next().expect("missing header line");
    let rest = first
        .strip_prefix("# Auto Generated on ")
        .unwrap_or_else(|| panic!("unexpected first line: {}", first));
    let (timestamp, tail) = rest.split_once(" | ID: ").expect("missing ID marker");
    assert_eq!(tail, id);
    assert_eq!(timestamp.len(), "2024-01-04 12:00:00".len(), "bad timestamp {}", timestamp);

    if let Some(name) = project_name {
        assert_eq!(lines.next(), Some(format!("# Project name: \"{}\"", name).as_str()));
    }

    let separator = format!("# {}", "-".repeat(78));
    assert_eq!(lines.next(), Some(separator.as_str()));
}
