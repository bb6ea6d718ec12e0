//! Tinker - per-tenant web infrastructure provisioning.
//!
//! Creates and tears down per-tenant infrastructure stacks, keeps the admin
//! service's tenant records in sync, and signs the short-lived credentials
//! those calls need.
//!
//! # Architecture
//!
//! - [`domain`] - Validated identifiers, routing priorities, stack state
//! - [`port`] - Trait seams for the stack provider and the admin service
//! - [`adapter`] - HTTP implementations of the ports plus the CLI surface
//! - [`app`] - The create/destroy/deploy workflows and the stack waiter
//! - [`token`] - Signed admin credentials
//! - [`config`] - Environment-derived configuration
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use tinker::app::{DestroyProject, Waiter};
//! use tinker::adapter::{admin::HttpAdmin, provider::HttpProvider};
//! use tinker::config::Config;
//! use tinker::domain::ProjectName;
//!
//! # async fn demo() -> tinker::error::Result<()> {
//! let config = Config::from_env()?;
//! let provider = HttpProvider::new(config.provider_endpoint.clone());
//! let admin = HttpAdmin::new(config.admin_endpoint.clone());
//!
//! let workflow = DestroyProject::new(
//!     &provider,
//!     &admin,
//!     Waiter::new(config.waiter.clone()),
//!     &config.secret,
//! );
//! workflow.run(&ProjectName::parse("demo1")?).await
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod token;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
