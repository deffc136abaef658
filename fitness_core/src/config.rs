//! Configuration file support for the fitness journal.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitjournal/config.toml`.
//! Every field has a default, so a missing file or a partial file is fine.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub workout: WorkoutConfig,
}

/// Order in which a meal's nutrients are listed
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NutrientOrder {
    /// The order the nutrients were entered in
    #[default]
    Insertion,
    /// Alphabetical by nutrient name
    Name,
}

/// Progress report rendering
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct ReportConfig {
    #[serde(default)]
    pub nutrient_order: NutrientOrder,

    /// Fixed decimals for the goal percentage; unset prints the shortest form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_decimals: Option<usize>,
}

/// What to do when the workout type is neither Cardio nor Strength
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnknownWorkoutPolicy {
    /// Record no workout and carry on
    #[default]
    Skip,
    /// Stop with an error
    Reject,
}

/// Workout collection
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct WorkoutConfig {
    #[serde(default)]
    pub unknown_kind: UnknownWorkoutPolicy,
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from(".config"))
        });
        base.join("fitjournal").join("config.toml")
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.report.nutrient_order, NutrientOrder::Insertion);
        assert_eq!(config.report.progress_decimals, None);
        assert_eq!(config.workout.unknown_kind, UnknownWorkoutPolicy::Skip);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.report.nutrient_order = NutrientOrder::Name;
        config.report.progress_decimals = Some(1);

        let toml_str = config.to_toml_string().unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[workout]
unknown_kind = "reject"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.workout.unknown_kind, UnknownWorkoutPolicy::Reject);
        assert_eq!(config.report.nutrient_order, NutrientOrder::Insertion); // default
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[report]\nnutrient_order = \"name\"\nprogress_decimals = 2\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.report.nutrient_order, NutrientOrder::Name);
        assert_eq!(config.report.progress_decimals, Some(2));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[report\nnutrient_order = ").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_unknown_order_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[report]\nnutrient_order = \"random\"\n");
        assert!(result.is_err());
    }
}
