//! # ledbridge-domain
//!
//! Pure domain model for the ledbridge output controller.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, pin identifiers, output levels
//! - Define **Topics** and **Payloads** (length-aware byte strings)
//! - Define **Connection events** (the tagged lifecycle/message variants a
//!   transport delivers)
//! - Define **Actions** and the **command interpreter** that maps a
//!   `(topic, payload)` pair onto an action
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod output;

pub mod command;
pub mod event;
pub mod payload;
pub mod topic;
