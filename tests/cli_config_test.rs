//! Integration tests for `qdash config show` and `qdash config init`.

mod common;

use common::{TestEnv, parse_json};
use predicates::prelude::*;

#[test]
fn test_config_show_defaults() {
    let env = TestEnv::new();
    let output = env.qdash().args(["config", "show"]).output().unwrap();
    assert!(output.status.success());

    let json = parse_json(&output.stdout);
    assert_eq!(json["project"]["value"], "ecommerce-platform");
    assert_eq!(json["project"]["source"]["kind"], "default");
    assert_eq!(json["top_n"]["value"], 5);
    assert_eq!(json["aggregate"]["value"], "supplied");
}

#[test]
fn test_config_show_reports_sources() {
    let env = TestEnv::with_config("default-tab \"tools\"\ntop-n 3\n");
    let output = env
        .qdash()
        .args(["config", "show", "--project", "mobile-banking"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = parse_json(&output.stdout);
    assert_eq!(json["project"]["source"]["kind"], "cli-flag");
    assert_eq!(json["tab"]["value"], "tools");
    assert_eq!(json["tab"]["source"]["kind"], "config-file");
    assert_eq!(json["top_n"]["value"], 3);
}

#[test]
fn test_config_show_env_log_filter() {
    let env = TestEnv::new();
    let output = env
        .qdash()
        .env("QDASH_LOG", "qdash=debug")
        .args(["config", "show"])
        .output()
        .unwrap();
    let json = parse_json(&output.stdout);
    assert_eq!(json["log_level"]["value"], "qdash=debug");
    assert_eq!(json["log_level"]["source"]["kind"], "env-var");
}

#[test]
fn test_config_show_human() {
    TestEnv::new()
        .qdash()
        .args(["config", "show", "-H"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-project"))
        .stdout(predicate::str::contains("(default)"));
}

#[test]
fn test_config_output_format_from_file() {
    TestEnv::with_config("output-format \"human\"\n")
        .qdash()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file:"));
}

#[test]
fn test_config_init_writes_file() {
    let env = TestEnv::new();
    env.qdash()
        .args(["config", "init", "--tab", "trends"])
        .assert()
        .success();

    assert!(env.config_path().exists());

    // The written file is picked up on the next run
    let output = env.qdash().arg("snapshot").output().unwrap();
    let json = parse_json(&output.stdout);
    assert_eq!(json["body"]["tab"], "trends");
}

#[test]
fn test_config_init_does_not_persist_run_only_overrides() {
    let env = TestEnv::new();
    env.qdash()
        .env("QDASH_LOG", "qdash=trace")
        .args(["config", "init", "-H", "--project", "mobile-banking"])
        .assert()
        .success();

    let output = env.qdash().args(["config", "show"]).output().unwrap();
    let json = parse_json(&output.stdout);
    assert_eq!(json["project"]["value"], "mobile-banking");
    assert_eq!(json["output_format"]["value"], "json");
    assert_eq!(json["log_level"]["value"], "info");
}

#[test]
fn test_config_init_refuses_overwrite() {
    let env = TestEnv::with_config("top-n 4\n");
    env.qdash()
        .args(["config", "init"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    env.qdash()
        .args(["config", "init", "--force"])
        .assert()
        .success();
    let output = env.qdash().args(["config", "show"]).output().unwrap();
    let json = parse_json(&output.stdout);
    assert_eq!(json["top_n"]["value"], 4);
    assert_eq!(json["top_n"]["source"]["kind"], "config-file");
}

#[test]
fn test_unparsable_config_fails() {
    TestEnv::with_config("default-tab \"unterminated\n")
        .qdash()
        .args(["config", "show"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse KDL"));
}
