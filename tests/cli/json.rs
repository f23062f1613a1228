//! Tests for `--json` output.

use crate::support::*;
use serde_json::Value;

#[test]
fn test_json_summary() {
    let t = Test::new();

    let output = t.create_json(&["--name", "Demo", "--stackPrefix", "p"]);
    assert_success(&output);

    let summary: Value = serde_json::from_str(&stdout(&output)).expect("stdout is not JSON");
    let id = summary["id"].as_str().unwrap();
    assert_eq!(id.len(), 10);
    assert_eq!(summary["name"], format!("di-{}-Demo", id));
    assert_eq!(summary["dry_run"], false);
    assert_eq!(summary["files"][0], "stack.env");
    assert_eq!(summary["files"][1], "docker-compose.yaml");
    assert_eq!(summary["services"]["postgres"], "p-postgres");
    assert_eq!(summary["services"]["hasura"], "p-hasura");
    assert_eq!(summary["services"]["hlambda"], "p-hlambda");

    let instance = t.only_instance();
    assert!(summary["path"]
        .as_str()
        .unwrap()
        .ends_with(&*instance.file_name().unwrap().to_string_lossy()));
}

#[test]
fn test_json_summary_never_contains_secrets() {
    let t = Test::new();

    let output = t.create_json(&[]);
    assert_success(&output);

    let out = stdout(&output);
    let env = read_env(&t.only_instance());
    let password = env_value(&env, "POSTGRES_PASSWORD").unwrap();
    assert!(!out.contains(password));
    assert!(!out.contains("PRIVATE KEY"));
}

#[test]
fn test_json_dry_run() {
    let t = Test::new();

    let output = t.cmd().args(["--json", "--dry-run"]).output().unwrap();
    assert_success(&output);

    let summary: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(summary["dry_run"], true);
    assert!(!t.deployments().exists());
}
