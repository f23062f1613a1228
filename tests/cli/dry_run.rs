//! Tests for `--dry-run`.

use crate::support::*;

#[test]
fn test_dry_run_writes_nothing() {
    let t = Test::new();

    let output = t.dry_run(&["--name", "Demo"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Dry run");
    assert_stdout_contains(&output, "-Demo");
    assert_stdout_contains(&output, "stack.env");
    assert_stdout_contains(&output, "docker-compose.yaml");
    assert_stdout_contains(&output, "nothing written");
    assert!(!t.deployments().exists());
}

#[test]
fn test_dry_run_still_validates() {
    let t = Test::new();

    let output = t.dry_run(&["--postgresPort", "99999"]);
    assert_failure(&output);

    let t = Test::without_template();
    let output = t.dry_run(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "template not found");
}
