//! Session lifecycle as observed by the router.

use std::fmt;

/// Where the broker session stands from the router's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// No session, or the last one was lost.
    #[default]
    Disconnected,
    /// Connected; the command subscription has been requested but not acknowledged.
    AwaitingSubscription,
    /// Subscribed to the command topic; messages are acted upon.
    Ready,
}

impl SessionState {
    /// Whether delivered messages should be interpreted.
    #[must_use]
    pub fn accepts_commands(self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => f.write_str("disconnected"),
            Self::AwaitingSubscription => f.write_str("awaiting_subscription"),
            Self::Ready => f.write_str("ready"),
        }
    }
}
