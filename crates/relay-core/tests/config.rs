use relay_core::ChainConfig;
use serde_json::json;

#[test]
fn default_config_has_empty_fields() {
    let config = ChainConfig::default();
    assert!(config.run_name.is_none());
    assert!(config.tags.is_empty());
    assert!(config.metadata.is_empty());
    assert_eq!(config.display_name(), "anonymous");
}

#[test]
fn config_builder_pattern() {
    let config = ChainConfig::default()
        .with_tags(vec!["checkout".into()])
        .with_run_name("order-pipeline")
        .with_metadata("owner", json!("payments"));
    assert_eq!(config.tags, vec!["checkout"]);
    assert_eq!(config.run_name.as_deref(), Some("order-pipeline"));
    assert_eq!(config.display_name(), "order-pipeline");
    assert_eq!(config.metadata["owner"], json!("payments"));
}

#[test]
fn config_deserializes_with_missing_fields() {
    let config: ChainConfig = serde_json::from_str(r#"{"run_name": "ingest"}"#).unwrap();
    assert_eq!(config.run_name.as_deref(), Some("ingest"));
    assert!(config.tags.is_empty());
    assert!(config.metadata.is_empty());
}

#[test]
fn config_serializes_all_fields() {
    let config = ChainConfig::default()
        .with_run_name("ingest")
        .with_tags(vec!["a".into(), "b".into()]);
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["run_name"], json!("ingest"));
    assert_eq!(value["tags"], json!(["a", "b"]));
    assert_eq!(value["metadata"], json!({}));
}
