//! Configuration tests

use super::*;
use tempfile::NamedTempFile;

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(config, parsed);
}

#[test]
fn test_minimal_config_uses_defaults() {
    let config: Config = serde_yaml::from_str("version: \"1.0\"\n").unwrap();

    assert!(config.validate().is_ok());
    assert!(config.plugins.enabled.is_none());
    assert!(config.plugins.is_enabled("CsvInput"));
    assert!(config.plugins.is_enabled("JsonInput"));
    assert_eq!(config.render, RenderConfig::default());
}

#[test]
fn test_config_from_file() {
    let yaml = r#"
version: "1.0"
plugins:
  enabled: [JsonInput]
  options:
    JsonInput:
      pointer: /items
render:
  default_format: JsonInput
  variables:
    title: Inventory
"#;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), yaml).unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();
    assert_eq!(config.plugins.enabled, Some(vec!["JsonInput".to_string()]));
    assert!(!config.plugins.is_enabled("CsvInput"));
    assert_eq!(config.render.default_format.as_deref(), Some("JsonInput"));
    assert_eq!(config.render.variables["title"], "Inventory");

    let plugin_config = config.plugins.plugin_config("JsonInput");
    assert_eq!(
        plugin_config.options["pointer"],
        serde_yaml::Value::String("/items".to_string())
    );
}

#[test]
fn test_config_save_and_reload() {
    let mut config = Config::default();
    config.render.variables.insert("team".to_string(), "ops".to_string());

    let temp_file = NamedTempFile::new().unwrap();
    config.save_to_file(temp_file.path()).unwrap();

    let loaded = Config::from_file(temp_file.path()).unwrap();
    assert_eq!(config, loaded);
}

#[test]
fn test_config_rejects_unsupported_version() {
    let config = Config {
        version: "2.0".to_string(),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_unknown_plugin() {
    let mut config = Config::default();
    config.plugins.enabled = Some(vec!["XmlInput".to_string()]);

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("XmlInput"));
}

#[test]
fn test_config_rejects_duplicate_enabled_plugin() {
    let mut config = Config::default();
    config.plugins.enabled = Some(vec!["CsvInput".to_string(), "CsvInput".to_string()]);
    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_options_for_unknown_plugin() {
    let mut config = Config::default();
    config
        .plugins
        .options
        .insert("YamlInput".to_string(), serde_yaml::Value::Null);
    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_disabled_default_format() {
    let mut config = Config::default();
    config.plugins.enabled = Some(vec!["CsvInput".to_string()]);
    config.render.default_format = Some("JsonInput".to_string());
    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_dotted_extension() {
    let mut config = Config::default();
    config.render.template_extensions = vec![".html".to_string()];
    assert!(config.validate().is_err());
}

#[test]
fn test_template_dirs_are_expanded() {
    std::env::set_var("HELM_TEST_TEMPLATES", "/srv/templates");

    let mut render = RenderConfig {
        template_dirs: vec!["$HELM_TEST_TEMPLATES/reports".into()],
        ..RenderConfig::default()
    };
    render.expand_paths().unwrap();

    assert_eq!(
        render.template_dirs,
        vec![std::path::PathBuf::from("/srv/templates/reports")]
    );
}
