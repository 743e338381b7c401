//! Topic names and the subscription QoS.
//!
//! Topics are compared byte-for-byte over their full length. A topic that is
//! a prefix or an extension of another is a different topic; there is no
//! wildcard expansion at this layer.

use std::borrow::Cow;
use std::fmt;

/// The single topic the device listens to for output commands.
pub const COMMAND_TOPIC: &str = "/ifpe/ads/embarcados/esp32/led";

/// Delivery guarantee requested when subscribing to [`COMMAND_TOPIC`].
pub const COMMAND_QOS: QoS = QoS::AtLeastOnce;

/// A message channel name as delivered by the broker.
///
/// May be empty and is not required to be valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic(Vec<u8>);

impl Topic {
    /// Build a topic from raw bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The command topic.
    #[must_use]
    pub fn command() -> Self {
        Self::from(COMMAND_TOPIC)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact, length-sensitive comparison against the command topic.
    #[must_use]
    pub fn is_command(&self) -> bool {
        self.0.as_slice() == COMMAND_TOPIC.as_bytes()
    }

    /// Text form for logs; invalid UTF-8 is replaced.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<&str> for Topic {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl From<String> for Topic {
    fn from(value: String) -> Self {
        Self(value.into_bytes())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// MQTT quality-of-service level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QoS {
    AtMostOnce,
    AtLeastOnce,
    ExactlyOnce,
}

impl QoS {
    /// Numeric level as it appears on the wire (`0`, `1`, `2`).
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::AtMostOnce => 0,
            Self::AtLeastOnce => 1,
            Self::ExactlyOnce => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_recognise_command_topic() {
        assert!(Topic::command().is_command());
        assert!(Topic::from("/ifpe/ads/embarcados/esp32/led").is_command());
    }

    #[test]
    fn should_reject_proper_prefix_of_command_topic() {
        assert!(!Topic::from("/ifpe/ads/embarcados/esp32/le").is_command());
        assert!(!Topic::from("/ifpe").is_command());
    }

    #[test]
    fn should_reject_extension_of_command_topic() {
        assert!(!Topic::from("/ifpe/ads/embarcados/esp32/led/").is_command());
        assert!(!Topic::from("/ifpe/ads/embarcados/esp32/led2").is_command());
    }

    #[test]
    fn should_reject_empty_topic() {
        let topic = Topic::new(Vec::new());
        assert!(topic.is_empty());
        assert!(!topic.is_command());
    }

    #[test]
    fn should_render_invalid_utf8_lossily() {
        let topic = Topic::new(vec![b'a', 0xFF, b'b']);
        assert_eq!(topic.len(), 3);
        assert_eq!(topic.to_string(), "a\u{fffd}b");
    }

    #[test]
    fn should_subscribe_command_topic_at_least_once() {
        assert_eq!(COMMAND_QOS, QoS::AtLeastOnce);
        assert_eq!(COMMAND_QOS.level(), 1);
    }
}
