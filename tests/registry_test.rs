use helm::plugin::{CsvReaderFactory, FnFactory, InputReader, JsonReader, JsonReaderFactory};
use helm::{InputSource, PluginConfig, PluginError, PluginMetadata, PluginRegistry, RegistryError};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn builtin_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    registry
        .register("CsvInput", Box::new(CsvReaderFactory))
        .unwrap();
    registry
        .register("JsonInput", Box::new(JsonReaderFactory))
        .unwrap();
    registry
}

#[test]
fn test_csv_and_json_scenario() {
    let registry = builtin_registry();

    assert_eq!(
        registry.list_available().collect::<Vec<_>>(),
        vec!["CsvInput", "JsonInput"]
    );

    let source = json!([
        {"name": "alpha", "port": 8080, "tags": ["web"]},
        {"name": "beta", "port": 9090, "tags": []}
    ]);

    let reader = registry.resolve("JsonInput").unwrap();
    let records = reader
        .open(InputSource::Text(source.to_string()))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    let expected = source.as_array().unwrap();
    assert_eq!(records.len(), expected.len());
    for (record, object) in records.iter().zip(expected) {
        let object = object.as_object().unwrap();
        assert_eq!(record.len(), object.len());
        for (key, value) in object {
            assert_eq!(&record[key.as_str()], value);
        }
    }
}

#[test]
fn test_resolve_invokes_registered_factory() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let metadata = PluginMetadata {
        name: "CountingJson".to_string(),
        description: "JSON reader that counts constructions".to_string(),
        version: "0.0.1".to_string(),
        extensions: vec!["json".to_string()],
    };
    let factory = FnFactory::new(metadata, move |_config: &PluginConfig| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(JsonReader::default()) as Box<dyn InputReader>)
    });

    let mut registry = PluginRegistry::new();
    registry.register("CountingJson", Box::new(factory)).unwrap();

    registry.resolve("CountingJson").unwrap();
    registry.resolve("CountingJson").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_duplicate_registration_keeps_first() {
    let mut registry = builtin_registry();

    let err = registry
        .register("CsvInput", Box::new(JsonReaderFactory))
        .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateName(ref name) if name == "CsvInput"));

    assert_eq!(registry.len(), 2);
    let reader = registry.resolve("CsvInput").unwrap();
    assert_eq!(reader.format_name(), "CsvInput");
}

#[test]
fn test_unknown_format_leaves_registry_usable() {
    let registry = builtin_registry();

    let err = registry.resolve("NoSuchFormat").err().unwrap();
    assert!(matches!(err, RegistryError::UnknownFormat { ref name, .. } if name == "NoSuchFormat"));
    assert!(err.to_string().contains("NoSuchFormat"));

    assert!(registry.resolve("CsvInput").is_ok());
    assert_eq!(registry.list_available().count(), 2);
}

#[test]
fn test_list_available_is_restartable() {
    let registry = builtin_registry();
    let names = registry.list_available();

    let first: Vec<_> = names.clone().collect();
    registry.resolve("JsonInput").unwrap();
    let second: Vec<_> = names.collect();

    assert_eq!(first, second);
}

#[test]
fn test_factory_errors_are_wrapped() {
    let mut registry = PluginRegistry::new();
    registry
        .register_with_config(
            "CsvInput",
            Box::new(CsvReaderFactory),
            PluginConfig::new(serde_yaml::from_str("delimiter: 7").unwrap()),
        )
        .unwrap();

    match registry.resolve("CsvInput").err().unwrap() {
        RegistryError::Factory { name, source } => {
            assert_eq!(name, "CsvInput");
            assert!(matches!(source, PluginError::InvalidConfig { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}
