//! Integration tests for Configuration System

use super::test_utils::Fixture;
use jsondir::config::ConfigLoader;
use jsondir::error::ApiError;
use jsondir::ingest::Ingestor;
use jsondir::tree::MergePolicy;
use serde_json::{json, Value};

#[test]
fn test_config_drives_ingestion() {
    let fx = Fixture::new();
    fx.raw(
        "jsondir.toml",
        r#"
[ingest]
extension = ".data"
append_arrays = true
ignore_patterns = ["skip"]
"#,
    )
    .json("db.data", json!({"xs": [1]}))
    .json("db/xs.data", json!([2]))
    .json("db/skip/x.data", json!(true));

    let config = ConfigLoader::load_layers(None, fx.root()).unwrap();
    assert_eq!(
        config.ingest.policy(),
        MergePolicy::MERGE_MAPS | MergePolicy::APPEND_ARRAYS
    );

    let ingestor = Ingestor::with_config(config.to_ingest_config());
    let tree = ingestor.load_entry_point(&fx.path("db")).unwrap();
    assert_eq!(Value::Object(tree), json!({"xs": [1, 2]}));
}

#[test]
fn test_invalid_logging_section_is_rejected() {
    let fx = Fixture::new();
    fx.raw("jsondir.toml", "[logging]\noutput = \"syslog\"\n");

    let result = ConfigLoader::load_layers(None, fx.root());
    match result {
        Err(ApiError::ConfigError(msg)) => assert!(msg.contains("Logging: ")),
        other => panic!("expected ConfigError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_malformed_toml_is_config_error() {
    let fx = Fixture::new();
    fx.raw("broken.toml", "[ingest\nextension = ");

    let result = ConfigLoader::load_from_file(&fx.path("broken.toml"));
    assert!(matches!(result, Err(ApiError::ConfigError(_))));
}

#[test]
fn test_global_file_is_lowest_file_layer() {
    let fx = Fixture::new();
    fx.raw(
        "global/config.toml",
        "[ingest]\nappend_arrays = true\n\n[output]\npretty = true\n",
    )
    .raw("jsondir.toml", "[output]\npretty = false\n");

    let config =
        ConfigLoader::load_layers(Some(&fx.path("global/config.toml")), fx.root()).unwrap();
    assert!(config.ingest.append_arrays);
    assert!(!config.output.pretty);
}
