//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/repo-create/repo-create.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `REPO_CREATE_*` prefix
//!
//! Settings are only ever read; nothing here writes a config file.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// Default external tool.
pub const DEFAULT_GH_PROGRAM: &str = "gh";

/// Where users are sent when the external tool is missing.
pub const DEFAULT_INSTALL_URL: &str = "https://cli.github.com/";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "REPO_CREATE";

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub gh_program: Option<String>,
    pub install_url: Option<String>,
}

/// Unified configuration for repo-create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Program to run for `repo create` (default: gh)
    pub gh_program: String,
    /// Install hint shown when the program is missing
    pub install_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gh_program: DEFAULT_GH_PROGRAM.into(),
            install_url: DEFAULT_INSTALL_URL.into(),
        }
    }
}

/// Get the XDG config directory for repo-create.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "repo-create").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("repo-create.toml"))
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
    ///
    /// Handles `~`, `$VAR`, and `${VAR}` syntax.
    fn expand_paths(&mut self) {
        self.gh_program = expand_env_vars(&self.gh_program);
    }

    /// Overlay a raw layer: specified values win, the rest is inherited.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            gh_program: overlay
                .gh_program
                .clone()
                .unwrap_or_else(|| self.gh_program.clone()),
            install_url: overlay
                .install_url
                .clone()
                .unwrap_or_else(|| self.install_url.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist when given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            debug!("load: explicit config {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply REPO_CREATE_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(config_err)?;

        let raw = RawSettings {
            gh_program: config.get_string("gh_program").ok(),
            install_url: config.get_string("install_url").ok(),
        };

        Ok(settings.merge_with(&raw))
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_points_at_gh() {
        let settings = Settings::default();
        assert_eq!(settings.gh_program, "gh");
        assert_eq!(settings.install_url, "https://cli.github.com/");
    }

    #[test]
    fn given_partial_overlay_when_merging_then_unspecified_fields_inherit() {
        let base = Settings::default();
        let overlay = RawSettings {
            gh_program: Some("/opt/gh/bin/gh".into()),
            install_url: None,
        };

        let result = base.merge_with(&overlay);

        assert_eq!(result.gh_program, "/opt/gh/bin/gh");
        assert_eq!(result.install_url, DEFAULT_INSTALL_URL);
    }

    #[test]
    fn given_tilde_in_program_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            gh_program: "~/bin/gh".into(),
            install_url: DEFAULT_INSTALL_URL.into(),
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(
            settings.gh_program.starts_with(&home),
            "gh_program should start with home dir: {}",
            settings.gh_program
        );
    }

    #[test]
    fn given_settings_when_to_toml_then_contains_fields() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("gh_program = \"gh\""));
        assert!(toml.contains("install_url"));
    }
}
