//! Session port — requests the router sends toward the broker session.

use ledbridge_domain::error::BridgeError;
use ledbridge_domain::topic::QoS;

/// Handle to an established broker session.
///
/// Implementations are called from inside event dispatch, so they must
/// queue the request and return without waiting for the broker.
pub trait SessionHandle {
    /// Request a subscription to `topic` at the given `qos`.
    ///
    /// The acknowledgement arrives later as a `Subscribed` event.
    ///
    /// # Errors
    ///
    /// Returns a [`BridgeError`] if the request could not be queued.
    fn subscribe(&self, topic: &str, qos: QoS) -> Result<(), BridgeError>;
}

impl<T: SessionHandle + ?Sized> SessionHandle for &T {
    fn subscribe(&self, topic: &str, qos: QoS) -> Result<(), BridgeError> {
        (**self).subscribe(topic, qos)
    }
}

impl<T: SessionHandle + ?Sized> SessionHandle for std::sync::Arc<T> {
    fn subscribe(&self, topic: &str, qos: QoS) -> Result<(), BridgeError> {
        (**self).subscribe(topic, qos)
    }
}
