//! Connection events — what the transport reports to the router.
//!
//! Each event is produced by the session collaborator, handed to the router
//! exactly once, and then dropped.

use std::fmt;

use crate::payload::Payload;
use crate::topic::Topic;

/// Packet identifier assigned by the session (`0` for QoS 0 traffic).
pub type MessageId = u16;

/// A lifecycle or delivery event from the broker session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionEvent {
    /// The broker accepted the session.
    Connected,
    /// The session was lost or closed.
    Disconnected,
    /// A subscription was acknowledged.
    Subscribed { message_id: MessageId },
    /// An unsubscription was acknowledged.
    Unsubscribed { message_id: MessageId },
    /// A publish from this device was acknowledged.
    Published { message_id: MessageId },
    /// A message arrived on a subscribed topic.
    MessageReceived {
        topic: Topic,
        payload: Payload,
        message_id: MessageId,
    },
    /// The session reported a failure.
    Error { kind: ErrorKind, detail: String },
    /// Anything else the session reports (pings, outgoing acks, …).
    Other { id: &'static str },
}

impl ConnectionEvent {
    /// Short name used in log fields.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::Subscribed { .. } => "subscribed",
            Self::Unsubscribed { .. } => "unsubscribed",
            Self::Published { .. } => "published",
            Self::MessageReceived { .. } => "message_received",
            Self::Error { .. } => "error",
            Self::Other { id } => id,
        }
    }
}

/// Classification of a session failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The underlying transport failed (socket, TLS, timeout).
    Transport,
    /// The broker rejected the session.
    ConnectionRefused,
    /// A failure shape outside the taxonomy above.
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => f.write_str("transport"),
            Self::ConnectionRefused => f.write_str("connection_refused"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}
