//! Application layer: the provisioning and decommissioning workflows.

mod create;
mod destroy;
mod keys;
mod waiter;

pub mod deploy;

pub use create::{CreateOutcome, CreateProject};
pub use destroy::DestroyProject;
pub use keys::ensure_key_pair;
pub use waiter::{WaitTarget, Waiter};

pub use deploy::{DeployOutcome, DeploySharedInfra, SharedStackInputs};
