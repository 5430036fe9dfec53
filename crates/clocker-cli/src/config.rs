//! Configuration loading and management.

use std::path::{Path, PathBuf};

use chrono::TimeDelta;
use clocker_core::Settings;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file.
    pub database_path: PathBuf,

    #[serde(default)]
    pub behavior: BehaviorConfig,

    #[serde(default)]
    pub work: WorkConfig,
}

/// `[behavior]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Round start/stop times to quarter-hours.
    #[serde(default)]
    pub round_to_quarter: bool,
}

/// `[work]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkConfig {
    /// Pause assumed for days longer than six hours.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "pause_time")]
    pub default_pause_time: Option<TimeDelta>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            database_path: data_dir.join("clocker.db"),
            behavior: BehaviorConfig::default(),
            work: WorkConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from default locations, then optionally from a
    /// specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (CLOCKER_*, sections split on "__")
        figment = figment.merge(Env::prefixed("CLOCKER_").split("__"));

        figment.extract()
    }
}

impl Settings for Config {
    fn round_to_quarter(&self) -> bool {
        self.behavior.round_to_quarter
    }

    fn default_pause_time(&self) -> Option<TimeDelta> {
        self.work.default_pause_time
    }
}

/// Returns the platform-specific config directory for clocker.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("clocker"))
}

/// Returns the platform-specific data directory for clocker.
///
/// On Linux: `~/.local/share/clocker`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("clocker"))
}

/// Pause durations as human strings (`45m`, `1h30m`, `0:45`).
mod pause_time {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::commands::util::{format_pause, parse_pause};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        pause: &Option<TimeDelta>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match pause {
            Some(pause) => serializer.serialize_str(&format_pause(*pause)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<TimeDelta>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        parse_pause(&raw).map(Some).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use figment::Jail;

    #[test]
    fn test_dirs_data_path_ends_with_clocker() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "clocker");
    }

    #[test]
    fn test_default_config_uses_data_dir_for_db() {
        let config = Config::default();
        let data_dir = dirs_data_path().unwrap();
        assert_eq!(config.database_path, data_dir.join("clocker.db"));
        assert!(!config.round_to_quarter());
        assert_eq!(config.default_pause_time(), None);
    }

    #[test]
    fn test_config_file_sections_map_to_settings() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "clocker.toml",
                r#"
                database_path = "/tmp/clocker-test.db"

                [behavior]
                round_to_quarter = true

                [work]
                default_pause_time = "45m"
                "#,
            )?;

            let config = Config::load_from(Some(Path::new("clocker.toml")))?;
            assert_eq!(config.database_path, PathBuf::from("/tmp/clocker-test.db"));
            assert!(config.round_to_quarter());
            assert_eq!(config.default_pause_time(), Some(TimeDelta::minutes(45)));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_nested_keys() {
        Jail::expect_with(|jail| {
            jail.set_env("CLOCKER_BEHAVIOR__ROUND_TO_QUARTER", "true");
            jail.set_env("CLOCKER_WORK__DEFAULT_PAUSE_TIME", "1h30m");

            let config = Config::load_from(None)?;
            assert!(config.round_to_quarter());
            assert_eq!(config.default_pause_time(), Some(TimeDelta::minutes(90)));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_pause_time_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "clocker.toml",
                r#"
                [work]
                default_pause_time = "lunch"
                "#,
            )?;

            assert!(Config::load_from(Some(Path::new("clocker.toml"))).is_err());
            Ok(())
        });
    }
}
