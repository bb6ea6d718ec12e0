//! Shared test doubles for the port traits.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! - [`ScriptedStacks`] — records submissions and replays a scripted
//!   sequence of stack statuses.
//! - [`RecordingAdmin`] — counts and records admin-service calls.
//! - [`RecordingKeyPairs`] — in-memory key-pair store counting creations.

mod admin;
mod provider;

pub use admin::RecordingAdmin;
pub use provider::{CreateCall, RecordingKeyPairs, ScriptedStacks};
