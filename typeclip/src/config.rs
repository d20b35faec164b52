use std::path::{Path, PathBuf};

use derive_more::From;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use theme::{Theme, ThemeName};

pub mod theme;

const SETTINGS_FILE: &str = "settings.toml";
const LOG_FILE: &str = "typeclip.log";

/// User settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeName,
    /// How often the status bar refreshes while typing
    pub tick_interval_ms: u64,
    pub skip_indentation: bool,
    pub scroll_padding: usize,
    pub min_height: usize,
    /// Where finished attempts are reported. `-` means stdout
    pub output: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        let core = stenograph::Configuration::default();
        Self {
            theme: ThemeName::default(),
            tick_interval_ms: 500,
            skip_indentation: core.skip_indentation,
            scroll_padding: core.scroll_padding,
            min_height: core.min_height,
            output: None,
            log_file: None,
        }
    }
}

impl Settings {
    /// The part of the settings the typing engine cares about
    pub const fn session_config(&self) -> stenograph::Configuration {
        stenograph::Configuration {
            skip_indentation: self.skip_indentation,
            scroll_padding: self.scroll_padding,
            min_height: self.min_height,
        }
    }

    pub const fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }

    /// The configured log file, or `typeclip.log` in the data directory
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE)))
    }
}

/// Settings given on the command line. Unset fields leave the configured value alone
#[derive(Debug, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_indentation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, From, Error)]
pub enum ConfigError {
    #[error(
        "Failed to get configuration directory. Please specify the location using the `--config <path>` flag"
    )]
    NoDirectory,

    #[error("Failed to create config directory: {0}")]
    CreateDirectory(std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(Box<figment::Error>),
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "TypeClip", "typeclip")
}

impl Settings {
    /// Load the settings
    ///
    /// Layers, from lowest to highest priority: defaults, `settings.toml` in the config
    /// directory, `TYPECLIP_*` environment variables, command line overrides.
    pub fn get(override_path: Option<PathBuf>, overrides: Overrides) -> Result<Self, ConfigError> {
        let config_dir = override_path
            .or_else(|| project_dirs().map(|dirs| dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::NoDirectory)?;

        // Ensure path exists
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir)?;
        }

        let settings = Self::figment(&config_dir)
            .merge(Env::prefixed("TYPECLIP_"))
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(Box::new)?;

        tracing::debug!(?config_dir, ?settings, "loaded settings");

        Ok(settings)
    }

    fn figment(config_dir: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let settings_toml = config_dir.join(SETTINGS_FILE);
        if settings_toml.exists() {
            figment = figment.merge(Toml::file(settings_toml));
        }

        figment
    }
}
