//! Configuration file support for Fitlog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitlog/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub exercise: ExerciseConfig,
}

/// The single user's fixed body profile
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_age")]
    pub age: u32,

    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            age: default_age(),
            weight: default_weight(),
        }
    }
}

/// Exercise logging parameters
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExerciseConfig {
    /// MET used when the entered value cannot be parsed
    #[serde(default = "default_met")]
    pub default_met: f64,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            default_met: default_met(),
        }
    }
}

// Default value functions
fn default_name() -> String {
    "John Doe".into()
}

fn default_age() -> u32 {
    30
}

fn default_weight() -> f64 {
    75.0
}

fn default_met() -> f64 {
    8.0
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::default_config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("HOME environment variable not set".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("fitlog").join("config.toml"))
    }

    /// Check that the profile and defaults describe a usable user
    pub fn validate(&self) -> Result<()> {
        if self.profile.age == 0 {
            return Err(Error::Config("profile.age must be positive".into()));
        }
        if !(self.profile.weight.is_finite() && self.profile.weight > 0.0) {
            return Err(Error::Config(format!(
                "profile.weight must be positive, got {}",
                self.profile.weight
            )));
        }
        if !self.exercise.default_met.is_finite() {
            return Err(Error::Config(format!(
                "exercise.default_met must be a finite number, got {}",
                self.exercise.default_met
            )));
        }
        Ok(())
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
