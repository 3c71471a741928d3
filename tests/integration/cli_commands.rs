//! Integration tests for the jsondir binary

use super::test_utils::Fixture;
use serde_json::{json, Value};
use std::path::Path;
use std::process::{Command, Output};

fn jsondir(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jsondir"))
        .current_dir(cwd)
        .arg("--quiet")
        .args(args)
        .env_remove("JSONDIR_LOG")
        .output()
        .expect("failed to run jsondir")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "jsondir failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn fixture() -> Fixture {
    let fx = Fixture::new();
    fx.json("db.json", json!({"name": "main", "server": {"port": 80}}))
        .json("db/server/port.json", json!(8080))
        .json("db/tags.json", json!(["a"]));
    fx
}

#[test]
fn test_dump_prints_merged_tree() {
    let fx = fixture();
    let output = jsondir(fx.root(), &["dump", "db"]);
    assert_eq!(
        stdout_json(&output),
        json!({"name": "main", "server": {"port": 8080}, "tags": ["a"]})
    );
}

#[test]
fn test_dump_pretty_uses_tabs() {
    let fx = fixture();
    let output = jsondir(fx.root(), &["dump", "db.json", "--pretty"]);
    let text = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(text.starts_with("{\n\t\"name\": \"main\""));
    stdout_json(&output);
}

#[test]
fn test_dump_to_file() {
    let fx = fixture();
    let output = jsondir(fx.root(), &["dump", "db", "--output", "out/all.json"]);
    assert!(output.status.success());

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(fx.path("out/all.json")).unwrap()).unwrap();
    assert_eq!(written["server"]["port"], json!(8080));
}

#[test]
fn test_get_value() {
    let fx = fixture();
    let output = jsondir(fx.root(), &["get", "db", "server.port"]);
    assert_eq!(stdout_json(&output), json!(8080));
}

#[test]
fn test_get_bad_path_fails() {
    let fx = fixture();
    let output = jsondir(fx.root(), &["get", "db", "name.first"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad path: name"), "stderr: {}", stderr);
}

#[test]
fn test_set_writes_updated_tree() {
    let fx = fixture();
    let output = jsondir(
        fx.root(),
        &[
            "set",
            "db",
            "tags",
            r#"["b"]"#,
            "--output",
            "merged.json",
            "--append-arrays",
        ],
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(fx.path("merged.json")).unwrap()).unwrap();
    assert_eq!(written["tags"], json!(["a", "b"]));
}

#[test]
fn test_missing_entry_point_fails() {
    let fx = Fixture::new();
    let output = jsondir(fx.root(), &["dump", "absent"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("entry point not found"), "stderr: {}", stderr);
}

#[test]
fn test_workspace_config_changes_extension() {
    let fx = Fixture::new();
    fx.raw("jsondir.toml", "[ingest]\nextension = \".cfg\"\n")
        .json("db/a.cfg", json!(1));

    let output = jsondir(fx.root(), &["dump", "db"]);
    assert_eq!(stdout_json(&output), json!({"a": 1}));
}

#[test]
fn test_explicit_config_file() {
    let fx = fixture();
    fx.raw("custom.toml", "[output]\npretty = true\n");

    let output = jsondir(fx.root(), &["--config", "custom.toml", "get", "db", "server"]);
    let text = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(text.starts_with("{\n\t\"port\": 8080"));
}
