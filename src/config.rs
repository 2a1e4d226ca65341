//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treestore/treestore.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `TREESTORE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::TreeBuilder;

/// Unified configuration for treestore.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Reject input whose first record does not declare `parent: "root"`
    pub strict_root: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict_root: false,
            pretty: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub strict_root: Option<bool>,
    pub pretty: Option<bool>,
}

/// Get the XDG config directory for treestore.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treestore").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treestore.toml"))
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
    /// Overlay wins where it specifies a value, otherwise keep self.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            strict_root: overlay.strict_root.unwrap_or(self.strict_root),
            pretty: overlay.pretty.unwrap_or(self.pretty),
        }
    }

    /// Load settings with layered precedence from the default global location.
    ///
    /// A missing global file is skipped; an explicit `local` file must exist.
    pub fn load(local: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with(global_config_path().as_deref(), local)
    }

    /// Load settings from explicit global and local file locations.
    pub fn load_with(global: Option<&Path>, local: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(local_path) = local {
            let raw = load_raw_settings(local_path)?;
            current = current.merge_with(&raw);
        }

        current.apply_env(None)
    }

    /// Apply `TREESTORE_*` variables as explicit overrides.
    ///
    /// `vars` replaces the process environment when given. A variable that is
    /// present but not a boolean is a config error.
    pub fn apply_env(&self, vars: Option<Map<String, String>>) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TREESTORE")
                    .prefix_separator("_")
                    .separator("__")
                    .source(vars),
            )
            .build()
            .map_err(config_err)?;

        let raw = RawSettings {
            strict_root: env_bool(&config, "strict_root")?,
            pretty: env_bool(&config, "pretty")?,
        };
        Ok(self.merge_with(&raw))
    }

    /// Tree builder configured from these settings.
    pub fn builder(&self) -> TreeBuilder {
        TreeBuilder::new().strict_root(self.strict_root)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# treestore configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/treestore/treestore.toml
#   Explicit: file passed with --config
#   Env:      TREESTORE_* environment variables

# Reject input whose first record does not declare parent "root".
# By default the first record is the root, whatever its parent field says.
# strict_root = false

# Pretty-print JSON output (--pretty and --compact override)
# pretty = true
"#
        .to_string()
    }
}

fn env_bool(config: &Config, key: &str) -> Result<Option<bool>, ApplicationError> {
    match config.get_bool(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("TREESTORE_{}: {}", key.to_uppercase(), e),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
