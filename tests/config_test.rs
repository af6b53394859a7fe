// tests/config_test.rs
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tagit::config::{load_config, Config, FailurePolicy, ParseMode};
use tagit::domain::TagOrdering;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[prefixes]
production = "release-"
staging_suffix = "-v"

[versioning]
initial = "0.1.0"
ordering = "lexical"
parsing = "strict"

[remote]
name = "upstream"
timeout_secs = 15

[behavior]
refresh = "fail-fast"
push = "best-effort"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.prefixes.production, "release-");
    assert_eq!(config.prefixes.staging_suffix, "-v");
    assert_eq!(config.versioning.initial, "0.1.0");
    assert_eq!(config.versioning.ordering, TagOrdering::Lexical);
    assert_eq!(config.versioning.parsing, ParseMode::Strict);
    assert_eq!(config.remote.name, "upstream");
    assert_eq!(config.remote.timeout_secs, 15);
    assert_eq!(config.behavior.refresh, FailurePolicy::FailFast);
    assert_eq!(config.behavior.push, FailurePolicy::BestEffort);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");
    assert!(load_config(Some(path.to_str().unwrap())).is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[remote\nname = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_unknown_section_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[branches]\nmain = \"v{version}\"\n").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
#[serial]
fn test_load_from_current_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tagit.toml"),
        "[remote]\nname = \"mirror\"\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    let config = result.unwrap();
    assert_eq!(config.remote.name, "mirror");
    assert_eq!(config.prefixes, Config::default().prefixes);
}
