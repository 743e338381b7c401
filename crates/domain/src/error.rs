//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts them into
//! [`BridgeError`] when they cross a port boundary.

/// Base error type for ledbridge.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The session collaborator is not running (its event loop is gone).
    #[error("session closed")]
    SessionClosed,

    /// The session collaborator could not accept a request.
    #[error("session error")]
    Session(#[source] Box<dyn std::error::Error + Send + Sync>),
}
