//! Tests for fatal errors.

use crate::support::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_missing_template_fails_before_any_output() {
    let t = Test::without_template();

    t.cmd()
        .args(["--name", "Demo"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("template not found"))
        .stderr(predicate::str::contains("--template"));
    assert!(!t.deployments().exists());
}

#[test]
fn test_template_is_a_directory() {
    let t = Test::without_template();
    fs::create_dir_all(t.dir.path().join("src/docker-compose.yaml")).unwrap();

    let output = t.create(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read template");
    assert!(!t.deployments().exists());
}

#[test]
fn test_non_utf8_template() {
    let t = Test::without_template();
    fs::create_dir_all(t.dir.path().join("src")).unwrap();
    fs::write(t.dir.path().join("src/docker-compose.yaml"), [0xff, 0xfe, 0x00]).unwrap();

    let output = t.create(&[]);
    assert_failure(&output);
    assert!(!t.deployments().exists());
}

#[test]
fn test_output_root_is_a_file() {
    let t = Test::new();
    fs::write(t.deployments(), "in the way").unwrap();

    let output = t.create(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to create directory");
    assert_stdout_excludes(&output, "created deployment instance");
}

#[test]
fn test_project_name_with_path_separator_rejected() {
    let t = Test::new();

    t.cmd()
        .args(["--name", "../escape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid name"))
        .stderr(predicate::str::contains("deploy-instance --help"));
    assert!(!t.deployments().exists());
    assert!(!t.dir.path().join("escape").exists());
}

#[test]
fn test_quote_in_stack_name_rejected() {
    let t = Test::new();

    t.cmd()
        .args(["--stackName", "say \"hi\""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid stackName"));
    assert!(!t.deployments().exists());
}

#[test]
fn test_bad_port_rejected() {
    let t = Test::new();

    t.cmd()
        .args(["--postgresPort", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("postgresPort").and(predicate::str::contains("not-a-port")));
    assert!(t.instances().is_empty());
}
