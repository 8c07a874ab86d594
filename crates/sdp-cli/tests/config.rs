//! Model settings precedence and config file parsing.

use std::path::{Path, PathBuf};

use sdp_artifact::DEFAULT_MODEL_PATH;
use sdp_cli::config::{
    ConfigFile, ModelSection, load_config, parse_config, resolve_model_settings,
};

fn file_config() -> ConfigFile {
    ConfigFile {
        model: ModelSection {
            path: Some(PathBuf::from("from-file.json")),
            sha256: Some("a".repeat(64)),
        },
    }
}

#[test]
fn parses_model_section() {
    let config = parse_config(
        r#"
[model]
path = "models/depression.json"
sha256 = "abc"
"#,
    )
    .unwrap();
    assert_eq!(
        config.model.path.as_deref(),
        Some(Path::new("models/depression.json"))
    );
    assert_eq!(config.model.sha256.as_deref(), Some("abc"));
}

#[test]
fn empty_config_is_default() {
    assert_eq!(parse_config("").unwrap(), ConfigFile::default());
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(parse_config("[model]\nfile = \"x.json\"\n").is_err());
    assert!(parse_config("[server]\nport = 1\n").is_err());
}

#[test]
fn cli_flag_wins() {
    let settings = resolve_model_settings(
        Some(Path::new("from-cli.json")),
        None,
        Some(PathBuf::from("from-env.json")),
        &file_config(),
    );
    assert_eq!(settings.path, PathBuf::from("from-cli.json"));
    assert_eq!(settings.sha256, None);
}

#[test]
fn cli_pin_follows_cli_path() {
    let settings = resolve_model_settings(
        Some(Path::new("from-cli.json")),
        Some("c"),
        None,
        &file_config(),
    );
    assert_eq!(settings.path, PathBuf::from("from-cli.json"));
    assert_eq!(settings.sha256.as_deref(), Some("c"));
}

#[test]
fn file_pin_is_not_applied_to_env_path() {
    let settings = resolve_model_settings(
        None,
        None,
        Some(PathBuf::from("from-env.json")),
        &file_config(),
    );
    assert_eq!(settings.path, PathBuf::from("from-env.json"));
    assert_eq!(settings.sha256, None);
}

#[test]
fn file_pin_applies_to_file_path() {
    let settings = resolve_model_settings(None, None, None, &file_config());
    assert_eq!(settings.path, PathBuf::from("from-file.json"));
    assert_eq!(settings.sha256, Some("a".repeat(64)));
}

#[test]
fn env_beats_config_file() {
    let settings = resolve_model_settings(
        None,
        Some("b"),
        Some(PathBuf::from("from-env.json")),
        &file_config(),
    );
    assert_eq!(settings.path, PathBuf::from("from-env.json"));
    assert_eq!(settings.sha256.as_deref(), Some("b"));
}

#[test]
fn falls_back_to_default_path() {
    let settings = resolve_model_settings(None, None, None, &ConfigFile::default());
    assert_eq!(settings.path, PathBuf::from(DEFAULT_MODEL_PATH));
    assert_eq!(settings.sha256, None);
}

#[test]
fn explicit_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config(Some(&dir.path().join("missing.toml"))).is_err());

    let path = dir.path().join("sdp.toml");
    std::fs::write(&path, "[model]\npath = \"m.json\"\n").unwrap();
    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.model.path, Some(PathBuf::from("m.json")));
}
