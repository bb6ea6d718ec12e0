//! Ports: trait seams between the workflows and external services.

mod admin;
mod provider;

pub use admin::AdminApi;
pub use provider::{KeyMaterial, KeyPairProvider, StackProvider};
