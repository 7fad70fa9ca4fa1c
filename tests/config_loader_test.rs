use std::fs;

use herald::config::schema::HeraldConfig;
use herald::config::{ConfigError, load_and_validate_config, load_config, validate_config};

#[test]
fn test_missing_file_is_fatal_with_remediation_hint() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("nowhere.yaml");

    let err = load_config(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { .. }));

    let message = err.to_string();
    assert!(message.contains("nowhere.yaml"));
    assert!(message.contains("config.example.yaml"));
}

#[test]
fn test_empty_document_treated_as_empty_mapping() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "\n# only a comment\n").unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config, HeraldConfig::default());
}

#[test]
fn test_explicit_fields_round_trip_unchanged() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(
        &path,
        r#"
schedule:
  time: "17:30"
rss:
  feeds:
    - url: "https://example.com/feed.xml"
      name: "Example"
llm:
  provider: "openai"
  api_key: "sk-test"
"#,
    )
    .unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.schedule.time, "17:30");
    assert_eq!(config.rss.feeds[0].url, "https://example.com/feed.xml");
    assert_eq!(config.rss.feeds[0].name, "Example");
    assert_eq!(config.llm.provider, "openai");
    assert_eq!(config.llm.api_key, "sk-test");
    // Unset fields keep the schema defaults.
    assert_eq!(config.schedule.timezone, "US/Eastern");
    assert_eq!(config.llm.max_summary_tokens, 1024);
}

#[test]
fn test_syntax_error_surfaces_decode_error() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "schedule:\n  time: \"08:00\n").unwrap();

    let err = load_config(Some(&path)).unwrap_err();
    match err {
        ConfigError::Parse { path: err_path, .. } => assert_eq!(err_path, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_facade_reports_every_violation_at_once() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(
        &path,
        format!(
            r#"
schedule:
  time: "25:99"
rss:
  feeds:
    - url: "ftp://x"
      name: "x"
projects:
  file: {}
"#,
            temp.path().join("missing.yaml").display()
        ),
    )
    .unwrap();

    let err = load_and_validate_config(Some(&path)).unwrap_err();
    let ConfigError::Invalid { violations } = &err else {
        panic!("expected invalid config, got {err:?}");
    };

    assert!(
        violations
            .iter()
            .any(|v| v.contains("schedule.time is out of range"))
    );
    assert!(
        violations
            .iter()
            .any(|v| v.contains("rss.feeds[0].url must start with http:// or https://"))
    );
    assert!(
        violations
            .iter()
            .any(|v| v == "At least one delivery method must be enabled")
    );
    assert!(violations.iter().any(|v| v.contains("projects.file")));
}

#[test]
fn test_validator_deterministic_over_loaded_config() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "schedule:\n  time: \"25:99\"\n").unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(validate_config(&config), validate_config(&config));
}
