use helm::{Config, Helm, HelmError, InputSource, PluginError, RegistryError, RenderRequest};
use indexmap::IndexMap;
use std::fs;
use tempfile::TempDir;

fn request(format: Option<&str>, input: InputSource, name: &str, template: &str) -> RenderRequest {
    RenderRequest {
        format: format.map(str::to_string),
        input,
        template_name: name.to_string(),
        template: template.to_string(),
        variables: IndexMap::new(),
    }
}

#[test]
fn test_render_csv_file_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let csv_file = temp_dir.path().join("inventory.csv");
    fs::write(&csv_file, "item,qty\nbolts,40\nnuts,12\n").unwrap();

    let helm = Helm::new(Config::default()).unwrap();
    let mut req = request(
        Some("CsvInput"),
        InputSource::File(csv_file),
        "inventory.txt",
        "{{ vars.title }}\n{% for r in records %}{{ r.item }}={{ r.qty }}\n{% endfor %}total {{ record_count }}",
    );
    req.variables
        .insert("title".to_string(), "Stock".to_string());

    let output = helm.render(&req).unwrap();

    assert_eq!(output.content, "Stock\nbolts=40\nnuts=12\ntotal 2");
    assert_eq!(output.record_count, 2);
    assert_eq!(output.format, "CsvInput");
}

#[test]
fn test_render_json_with_configured_pointer() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("helm.yaml");
    fs::write(
        &config_file,
        r#"
version: "1.0"
plugins:
  enabled: [JsonInput]
  options:
    JsonInput:
      pointer: /data/hosts
render:
  default_format: JsonInput
  variables:
    env: staging
"#,
    )
    .unwrap();

    let config = Config::from_file(&config_file).unwrap();
    let helm = Helm::new(config).unwrap();

    let json = r#"{"data": {"hosts": [{"name": "alpha", "up": true}, {"name": "beta", "up": false}]}}"#;
    let output = helm
        .render(&request(
            None,
            InputSource::Text(json.to_string()),
            "hosts.txt",
            "{{ vars.env }}:{% for h in records %} {{ h.name }}={{ h.up }}{% endfor %}",
        ))
        .unwrap();

    assert_eq!(output.content, "staging: alpha=true beta=false");
    assert_eq!(output.format, "JsonInput");

    // CsvInput was not enabled
    assert!(!helm.registry().contains("CsvInput"));
}

#[test]
fn test_render_unknown_format() {
    let helm = Helm::new(Config::default()).unwrap();
    let result = helm.render(&request(
        Some("XmlInput"),
        InputSource::Text("<a/>".to_string()),
        "out.txt",
        "{{ record_count }}",
    ));

    match result {
        Err(HelmError::Registry(RegistryError::UnknownFormat { name, available })) => {
            assert_eq!(name, "XmlInput");
            assert_eq!(available, vec!["CsvInput", "JsonInput"]);
        }
        other => panic!("expected unknown format error, got {:?}", other.map(|o| o.content)),
    }
}

#[test]
fn test_render_without_format_or_default() {
    let helm = Helm::new(Config::default()).unwrap();
    let result = helm.render(&request(
        None,
        InputSource::Text("a\n1\n".to_string()),
        "out.txt",
        "{{ record_count }}",
    ));

    let err = result.err().unwrap();
    assert!(matches!(err, HelmError::Config(_)));
    assert!(err.to_string().contains("CsvInput"));
}

#[test]
fn test_render_reports_ragged_csv() {
    let helm = Helm::new(Config::default()).unwrap();
    let result = helm.render(&request(
        Some("CsvInput"),
        InputSource::Text("a,b\n1,2\n3\n".to_string()),
        "out.txt",
        "{{ record_count }}",
    ));

    match result {
        Err(HelmError::Plugin(PluginError::FieldMismatch { record, .. })) => assert_eq!(record, 1),
        other => panic!("expected field mismatch, got {:?}", other.map(|o| o.content)),
    }
}

#[test]
fn test_render_with_shared_templates() {
    let temp_dir = TempDir::new().unwrap();
    let templates = temp_dir.path().join("templates");
    fs::create_dir_all(templates.join("partials")).unwrap();
    fs::write(templates.join("partials/row.txt"), "- {{ r.name }}").unwrap();

    let mut config = Config::default();
    config.render.template_dirs = vec![templates];
    let helm = Helm::new(config).unwrap();

    let output = helm
        .render(&request(
            Some("JsonInput"),
            InputSource::Text(r#"[{"name": "alpha"}, {"name": "beta"}]"#.to_string()),
            "list.txt",
            "{% for r in records %}{% include \"partials/row.txt\" %}\n{% endfor %}",
        ))
        .unwrap();

    assert_eq!(output.content, "- alpha\n- beta\n");
}

#[test]
fn test_render_extends_shared_layout() {
    let temp_dir = TempDir::new().unwrap();
    let templates = temp_dir.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    // Sorts before the layout it extends
    fs::write(
        templates.join("card.txt"),
        "{% extends \"page_layout.txt\" %}{% block body %}card{% endblock %}",
    )
    .unwrap();
    fs::write(
        templates.join("page_layout.txt"),
        "# {{ vars.title }}\n{% block body %}{% endblock %}\n({{ record_count }} records)",
    )
    .unwrap();

    let mut config = Config::default();
    config.render.template_dirs = vec![templates];
    config
        .render
        .variables
        .insert("title".to_string(), "Hosts".to_string());
    let helm = Helm::new(config).unwrap();

    let output = helm
        .render(&request(
            Some("CsvInput"),
            InputSource::Text("host\nalpha\nbeta\n".to_string()),
            "hosts.txt",
            "{% extends \"page_layout.txt\" %}{% block body %}{% for r in records %}- {{ r.host }}\n{% endfor %}{% endblock %}",
        ))
        .unwrap();

    assert_eq!(output.content, "# Hosts\n- alpha\n- beta\n\n(2 records)");
}

#[test]
fn test_load_records_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let json_file = temp_dir.path().join("people.json");
    fs::write(&json_file, r#"{"name": "Ada", "age": 36}"#).unwrap();

    let helm = Helm::new(Config::default()).unwrap();
    let records = helm
        .load_records("JsonInput", InputSource::File(json_file))
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Ada");
    assert_eq!(records[0]["age"], 36);
}

#[test]
fn test_load_records_missing_file() {
    let helm = Helm::new(Config::default()).unwrap();
    let err = helm
        .load_records("CsvInput", InputSource::File("/nonexistent/data.csv".into()))
        .unwrap_err();

    assert!(err.to_string().contains("/nonexistent/data.csv"));
}
