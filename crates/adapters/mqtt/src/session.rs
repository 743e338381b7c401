//! rumqttc-backed [`SessionHandle`].

use ledbridge_app::ports::SessionHandle;
use ledbridge_domain::error::BridgeError;
use ledbridge_domain::topic::QoS;
use rumqttc::AsyncClient;

use crate::error::MqttError;
use crate::translate;

/// Session handle that queues requests on the rumqttc client.
///
/// Cheap to clone; every clone feeds the same event loop.
#[derive(Clone)]
pub struct MqttSession {
    client: AsyncClient,
}

impl MqttSession {
    pub(crate) fn new(client: AsyncClient) -> Self {
        Self { client }
    }

    /// Queue a DISCONNECT for the broker.
    ///
    /// # Errors
    ///
    /// Returns [`MqttError::Client`] if the request queue is full or closed.
    pub fn disconnect(&self) -> Result<(), MqttError> {
        self.client.try_disconnect().map_err(MqttError::Client)
    }
}

impl SessionHandle for MqttSession {
    fn subscribe(&self, topic: &str, qos: QoS) -> Result<(), BridgeError> {
        self.client
            .try_subscribe(topic, translate::qos(qos))
            .map_err(|err| MqttError::Client(err).into_domain())
    }
}
