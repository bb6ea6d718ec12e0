//! Adapters: concrete implementations of the ports plus the CLI surface.

pub mod admin;
pub mod cli;
pub mod provider;
