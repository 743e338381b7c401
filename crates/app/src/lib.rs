//! # ledbridge-app
//!
//! Application layer — the event router and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `SessionHandle` — requests toward the broker session (subscribe)
//!   - `OutputPin` — drives the controlled digital output
//! - Provide the **event router**, which consumes one `ConnectionEvent` at a
//!   time, tracks the session lifecycle, and applies recognised commands to
//!   the output
//!
//! ## Dependency rule
//! Depends on `ledbridge-domain` only (plus `tracing` for logs).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod router;
pub mod session;
