//! MQTT session configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::MqttError;

/// Port used when the broker URL does not name one.
pub const DEFAULT_PORT: u16 = 1883;

/// Configuration for the MQTT session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MqttConfig {
    /// Broker URL, `mqtt://host[:port]` or `tcp://host[:port]`.
    pub broker_url: String,
    /// MQTT client identifier.
    pub client_id: String,
    /// Keep-alive interval in seconds; `0` disables keep-alive.
    pub keep_alive_secs: u16,
    /// Pause before reconnecting after the session fails, in seconds.
    pub reconnect_delay_secs: u16,
    /// Capacity of the outgoing request queue.
    pub request_capacity: usize,
}

/// Host and port parsed out of [`MqttConfig::broker_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerEndpoint {
    pub host: String,
    pub port: u16,
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            broker_url: "mqtt://mqtt.eclipseprojects.io".to_string(),
            client_id: "ledbridge".to_string(),
            keep_alive_secs: 120,
            reconnect_delay_secs: 10,
            request_capacity: 10,
        }
    }
}

impl MqttConfig {
    /// Split the broker URL into host and port.
    ///
    /// # Errors
    ///
    /// Returns [`MqttError::UnsupportedScheme`] for schemes other than
    /// `mqtt` / `tcp`, and [`MqttError::InvalidBrokerUrl`] when the URL has
    /// no scheme, no host, or a malformed port.
    pub fn broker_endpoint(&self) -> Result<BrokerEndpoint, MqttError> {
        let url = self.broker_url.trim();
        let invalid = || MqttError::InvalidBrokerUrl(url.to_string());

        let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
        if !matches!(scheme, "mqtt" | "tcp") {
            return Err(MqttError::UnsupportedScheme(scheme.to_string()));
        }

        let authority = rest.split_once('/').map_or(rest, |(authority, _)| authority);
        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) => (host, port.parse::<u16>().map_err(|_| invalid())?),
            None => (authority, DEFAULT_PORT),
        };
        if host.is_empty() || port == 0 {
            return Err(invalid());
        }

        Ok(BrokerEndpoint {
            host: host.to_string(),
            port,
        })
    }

    /// Keep-alive interval as a [`Duration`].
    #[must_use]
    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(u64::from(self.keep_alive_secs))
    }

    /// Reconnect pause as a [`Duration`].
    #[must_use]
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_secs(u64::from(self.reconnect_delay_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = MqttConfig::default();
        assert_eq!(config.broker_url, "mqtt://mqtt.eclipseprojects.io");
        assert_eq!(config.client_id, "ledbridge");
        assert_eq!(config.keep_alive_secs, 120);
        assert_eq!(config.reconnect_delay_secs, 10);
        assert_eq!(config.request_capacity, 10);
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            broker_url = "mqtt://192.168.0.10:1884"
            client_id = "esp32-led"
            keep_alive_secs = 60
            reconnect_delay_secs = 3
            request_capacity = 4
        "#;
        let config: MqttConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.broker_url, "mqtt://192.168.0.10:1884");
        assert_eq!(config.client_id, "esp32-led");
        assert_eq!(config.keep_alive(), Duration::from_secs(60));
        assert_eq!(config.reconnect_delay(), Duration::from_secs(3));
        assert_eq!(config.request_capacity, 4);
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: MqttConfig = toml::from_str(r#"client_id = "bench""#).unwrap();
        assert_eq!(config.client_id, "bench");
        assert_eq!(config.broker_url, "mqtt://mqtt.eclipseprojects.io");
        assert_eq!(config.keep_alive_secs, 120);
    }

    fn endpoint(url: &str) -> Result<BrokerEndpoint, MqttError> {
        MqttConfig {
            broker_url: url.to_string(),
            ..MqttConfig::default()
        }
        .broker_endpoint()
    }

    #[test]
    fn should_default_to_port_1883() {
        let endpoint = endpoint("mqtt://mqtt.eclipseprojects.io").unwrap();
        assert_eq!(endpoint.host, "mqtt.eclipseprojects.io");
        assert_eq!(endpoint.port, DEFAULT_PORT);
    }

    #[test]
    fn should_parse_explicit_port_and_ignore_path() {
        let endpoint = endpoint("tcp://10.0.0.5:2883/ignored").unwrap();
        assert_eq!(
            endpoint,
            BrokerEndpoint {
                host: "10.0.0.5".to_string(),
                port: 2883,
            }
        );
    }

    #[test]
    fn should_reject_unsupported_scheme() {
        let err = endpoint("mqtts://broker:8883").unwrap_err();
        assert!(matches!(err, MqttError::UnsupportedScheme(scheme) if scheme == "mqtts"));
    }

    #[test]
    fn should_reject_url_without_scheme() {
        assert!(matches!(
            endpoint("broker:1883"),
            Err(MqttError::InvalidBrokerUrl(_))
        ));
    }

    #[test]
    fn should_reject_missing_host_or_bad_port() {
        for url in ["mqtt://", "mqtt://:1883", "mqtt://broker:port", "mqtt://broker:0"] {
            assert!(
                matches!(endpoint(url), Err(MqttError::InvalidBrokerUrl(_))),
                "url {url}"
            );
        }
    }
}
