//! Bridge configuration
//!
//! Every section falls back to its defaults when missing, so an empty or
//! partial TOML file is a valid configuration:
//!
//! ```toml
//! [pump]
//! event_delay_ms = 10
//! thread_name = "inputbridge-pump"
//!
//! [gilrs]
//! announce_connected = true
//!
//! [logging]
//! level = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings of the [`EventPump`](crate::pump::EventPump) worker.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PumpSettings {
    /// Pause between drain passes in milliseconds; 0 re-polls immediately.
    pub event_delay_ms: u64,
    /// Name given to the worker thread.
    pub thread_name: String,
}

impl Default for PumpSettings {
    fn default() -> Self {
        Self {
            event_delay_ms: 10,
            thread_name: "inputbridge-pump".to_string(),
        }
    }
}

impl PumpSettings {
    pub fn event_delay(&self) -> Duration {
        Duration::from_millis(self.event_delay_ms)
    }
}

/// Settings of the [`GilrsBackend`](crate::backend::GilrsBackend).
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GilrsSettings {
    /// Report gamepads that are already plugged in at startup as added.
    pub announce_connected: bool,
}

impl Default for GilrsSettings {
    fn default() -> Self {
        Self {
            announce_connected: true,
        }
    }
}

/// Settings consumed by [`logging::init`](crate::logging::init).
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct LogSettings {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
    pub thread_ids: bool,
    pub file_and_line: bool,
    pub pretty: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            thread_ids: true,
            file_and_line: true,
            pretty: true,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BridgeConfig {
    pub pump: PumpSettings,
    pub gilrs: GilrsSettings,
    pub logging: LogSettings,
}

impl BridgeConfig {
    /// `<config dir>/inputbridge/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("inputbridge").join("config.toml"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Like [`load`](Self::load), but a missing file is `Ok(None)`.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Loads `path`, falling back to defaults when it is missing or broken.
    ///
    /// Reports through `tracing`, so install a subscriber first if the
    /// fallback should be visible.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_optional(path) {
            Ok(Some(config)) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Ok(None) => {
                info!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Unable to load config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = BridgeConfig::from_toml_str("").unwrap();
        assert_eq!(config, BridgeConfig::default());
        assert_eq!(config.pump.event_delay(), Duration::from_millis(10));
        assert!(config.gilrs.announce_connected);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = BridgeConfig::from_toml_str(
            r#"
            [pump]
            event_delay_ms = 0

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.pump.event_delay_ms, 0);
        assert_eq!(config.pump.thread_name, "inputbridge-pump");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.pretty);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = BridgeConfig::from_toml_str("[pump]\nevent_delay_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("inputbridge-config-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let mut config = BridgeConfig::default();
        config.pump.event_delay_ms = 25;
        config.gilrs.announce_connected = false;

        config.save(&path).unwrap();
        assert_eq!(BridgeConfig::load(&path).unwrap(), config);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("inputbridge-does-not-exist.toml");
        assert!(BridgeConfig::load_optional(&path).unwrap().is_none());
        assert_eq!(BridgeConfig::load_or_default(&path), BridgeConfig::default());
    }

    #[test]
    fn malformed_file_is_reported_then_replaced_by_defaults() {
        let dir = std::env::temp_dir().join(format!("inputbridge-malformed-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[pump]\nevent_delay_ms = \"soon\"\n").unwrap();

        assert!(matches!(
            BridgeConfig::load_optional(&path),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(BridgeConfig::load_or_default(&path), BridgeConfig::default());

        fs::remove_dir_all(&dir).unwrap();
    }
}
