use std::path::PathBuf;

use modorder_core::config::{dirs_path, Settings, SETTINGS_FILE_NAME};
use modorder_util::errors::ModError;
use tempfile::TempDir;

#[test]
fn test_default_catalog_settings() {
    let settings = Settings::default();
    assert_eq!(settings.catalog.base_dir, "data/base");
    assert_eq!(settings.catalog.manifest_name, "info.json");
    assert!(!settings.catalog.strict);
    assert!(settings.game_path.is_none());
    assert!(settings.mods_path.is_none());
}

#[test]
fn test_empty_toml_uses_defaults() {
    let settings = Settings::from_str("").unwrap();
    assert_eq!(settings.catalog.base_dir, "data/base");
    assert_eq!(settings.catalog.manifest_name, "info.json");
}

#[test]
fn test_parse_from_toml() {
    let toml = r#"
game-path = "/opt/factorio"
mods-path = "/home/me/.factorio/mods"

[catalog]
base-dir = "data/core-base"
strict = true
"#;
    let settings = Settings::from_str(toml).unwrap();
    assert_eq!(settings.game_path, Some(PathBuf::from("/opt/factorio")));
    assert_eq!(
        settings.mods_path,
        Some(PathBuf::from("/home/me/.factorio/mods"))
    );
    assert_eq!(settings.catalog.base_dir, "data/core-base");
    assert_eq!(settings.catalog.manifest_name, "info.json");
    assert!(settings.catalog.strict);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = Settings::from_str("game-path = [").unwrap_err();
    assert!(matches!(err, ModError::Config { .. }), "{err}");
}

#[test]
fn test_require_paths() {
    let settings = Settings::default();
    assert!(settings.require_game_path().is_err());
    assert!(settings.require_mods_path().is_err());

    let settings = Settings::from_str("game-path = \"/g\"\nmods-path = \"/m\"").unwrap();
    assert_eq!(settings.require_game_path().unwrap(), PathBuf::from("/g"));
    assert_eq!(settings.require_mods_path().unwrap(), PathBuf::from("/m"));
}

#[test]
fn test_discover_finds_ancestor_settings() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(SETTINGS_FILE_NAME),
        "game-path = \"/from/ancestor\"",
    )
    .unwrap();
    let nested = tmp.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();

    let settings = Settings::discover(&nested).unwrap();
    assert_eq!(settings.game_path, Some(PathBuf::from("/from/ancestor")));
}

#[test]
fn test_from_path_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    assert!(Settings::from_path(&tmp.path().join("nope.toml")).is_err());
}

#[test]
fn test_dirs_path_contains_modorder() {
    assert!(dirs_path().ends_with(".modorder"));
    assert!(Settings::default_path().ends_with(".modorder/config.toml"));
}
