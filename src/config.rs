//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rnboot/rnboot.toml`
//! 3. Environment variables: `RNBOOT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// Unified configuration for rnboot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Node.js executable used to drive the delegated cli module
    pub node: String,
    /// Command line that installs the framework into a new project
    pub install_command: String,
    /// Delegated cli module, relative to the project directory
    pub module_path: PathBuf,
    /// Manifest written into a new project
    pub manifest_file: String,
    /// `scripts.start` entry of the manifest
    pub start_script: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            node: "node".into(),
            install_command: "npm install --save react-native".into(),
            module_path: PathBuf::from("node_modules/react-native/cli"),
            manifest_file: "package.json".into(),
            start_script: "node_modules/react-native/packager/packager.sh".into(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub node: Option<String>,
    pub install_command: Option<String>,
    pub module_path: Option<PathBuf>,
    pub manifest_file: Option<String>,
    pub start_script: Option<String>,
}

/// Get the XDG config directory for rnboot.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rnboot").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rnboot.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        self.node = expand_env_vars(&self.node);
        let expanded = expand_env_vars(self.module_path.to_string_lossy().as_ref());
        self.module_path = PathBuf::from(expanded);
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            node: overlay.node.clone().unwrap_or_else(|| self.node.clone()),
            install_command: overlay
                .install_command
                .clone()
                .unwrap_or_else(|| self.install_command.clone()),
            module_path: overlay
                .module_path
                .clone()
                .unwrap_or_else(|| self.module_path.clone()),
            manifest_file: overlay
                .manifest_file
                .clone()
                .unwrap_or_else(|| self.manifest_file.clone()),
            start_script: overlay
                .start_script
                .clone()
                .unwrap_or_else(|| self.start_script.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/rnboot/rnboot.toml`
    /// 3. Environment variables: `RNBOOT_*` prefix
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `config_file` as the global config layer.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply RNBOOT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("RNBOOT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("node") {
            settings.node = val;
        }
        if let Ok(val) = config.get_string("install_command") {
            settings.install_command = val;
        }
        if let Ok(val) = config.get_string("module_path") {
            settings.module_path = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("manifest_file") {
            settings.manifest_file = val;
        }
        if let Ok(val) = config.get_string("start_script") {
            settings.start_script = val;
        }

        Ok(settings)
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
