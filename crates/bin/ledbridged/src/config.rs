//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `ledbridge.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::fmt;

use ledbridge_adapter_mqtt::{MqttConfig, MqttError};
use ledbridge_domain::output::PinId;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Broker session settings.
    pub mqtt: MqttConfig,
    /// Controlled output settings.
    pub output: OutputConfig,
    /// Network credentials.
    pub wifi: WifiConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Controlled output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pin driven by output commands.
    pub pin: PinId,
}

/// Wireless network credentials, handed to network bring-up as-is.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct WifiConfig {
    /// Network name.
    pub ssid: String,
    /// Network passphrase.
    pub password: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `ledbridge.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("ledbridge.toml")?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("LEDBRIDGE_BROKER_URL") {
            self.mqtt.broker_url = val;
        }
        if let Some(val) = var("LEDBRIDGE_CLIENT_ID") {
            self.mqtt.client_id = val;
        }
        if let Some(val) = var("LEDBRIDGE_PIN") {
            if let Ok(pin) = val.parse() {
                self.output.pin = PinId::new(pin);
            }
        }
        if let Some(val) = var("LEDBRIDGE_WIFI_SSID") {
            self.wifi.ssid = val;
        }
        if let Some(val) = var("LEDBRIDGE_WIFI_PASSWORD") {
            self.wifi.password = val;
        }
        if let Some(val) = var("LEDBRIDGE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.mqtt.broker_endpoint()?;
        if self.mqtt.client_id.is_empty() {
            return Err(ConfigError::Validation(
                "client_id must not be empty".to_string(),
            ));
        }
        if self.mqtt.request_capacity == 0 {
            return Err(ConfigError::Validation(
                "request_capacity must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pin: PinId::new(2),
        }
    }
}

impl fmt::Debug for WifiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiConfig")
            .field("ssid", &self.ssid)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "ledbridge=info,rumqttc=warn".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// The broker URL is unusable.
    #[error("invalid broker configuration")]
    Broker(#[from] MqttError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
