//! MQTT adapter error types.

use ledbridge_domain::error::BridgeError;

/// Errors specific to the MQTT adapter.
#[derive(Debug, thiserror::Error)]
pub enum MqttError {
    /// The broker URL could not be parsed.
    #[error("invalid broker URL {0:?}")]
    InvalidBrokerUrl(String),

    /// The broker URL names a transport this adapter does not speak.
    #[error("unsupported broker URL scheme {0:?}")]
    UnsupportedScheme(String),

    /// The rumqttc client could not queue a request.
    #[error("MQTT client error")]
    Client(#[source] rumqttc::ClientError),
}

impl MqttError {
    /// Convert into a [`BridgeError::Session`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> BridgeError {
        BridgeError::Session(Box::new(self))
    }
}

impl From<MqttError> for BridgeError {
    fn from(err: MqttError) -> Self {
        err.into_domain()
    }
}
