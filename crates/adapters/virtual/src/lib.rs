//! # ledbridge-adapter-virtual
//!
//! Virtual output adapter that stands in for a GPIO pin on hosts without
//! one, and in tests.
//!
//! ## Provided outputs
//!
//! | Output | Behaviour |
//! |--------|-----------|
//! | [`VirtualOutput`] | Remembers the last level written to its pin and logs every write |
//!
//! ## Dependency rule
//!
//! Depends on `ledbridge-app` (port traits) and `ledbridge-domain` only.

mod pin;

pub use pin::VirtualOutput;
