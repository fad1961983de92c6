//! Integration tests for Settings layered loading.
//!
//! These tests pass an explicit config file, so the user's global config
//! never leaks in.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use rnboot::application::ApplicationError;
use rnboot::config::Settings;

#[test]
fn given_no_config_file_when_loading_then_uses_defaults() {
    let settings = Settings::load_from(None).expect("load defaults");
    assert_eq!(settings.node, "node");
    assert_eq!(settings.install_command, "npm install --save react-native");
}

#[test]
fn given_missing_config_file_when_loading_then_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::load_from(Some(&temp.path().join("absent.toml"))).unwrap();
    assert_eq!(
        settings.module_path,
        PathBuf::from("node_modules/react-native/cli")
    );
}

#[test]
fn given_config_file_when_loading_then_overrides_specified_fields() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("rnboot.toml");
    fs::write(
        &path,
        r#"
install_command = "yarn add react-native"
node = "/opt/node/bin/node"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_from(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.install_command, "yarn add react-native");
    assert_eq!(settings.node, "/opt/node/bin/node");
    assert_eq!(
        settings.start_script,
        "node_modules/react-native/packager/packager.sh"
    );
}

#[test]
fn given_env_var_when_loading_then_overrides_config() {
    // Only this test touches RNBOOT_MANIFEST_FILE
    std::env::set_var("RNBOOT_MANIFEST_FILE", "app.json");
    let settings = Settings::load_from(None);
    std::env::remove_var("RNBOOT_MANIFEST_FILE");

    assert_eq!(settings.unwrap().manifest_file, "app.json");
}

#[test]
fn given_broken_config_file_when_loading_then_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("rnboot.toml");
    fs::write(&path, "install_command = [unterminated").unwrap();

    let err = Settings::load_from(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("rnboot.toml"));
}
