//! Domain types: validated identifiers, routing priorities, and stack state.
//!
//! Everything here is pure; side effects live in the adapters.

mod priority;
mod project;
mod region;
mod stack;

pub use priority::RulePriority;
pub use project::{DomainName, ProjectName};
pub use region::{InstanceType, Region};
pub use stack::{
    project_parameters, shared_parameters, StackDescription, StackOutputs, StackParameter,
    StackStatus, ADMIN_STACK_NAME, KEY_PAIR_NAME, OUTPUT_ADMIN_DOMAIN, OUTPUT_DOMAIN_NAME,
    OUTPUT_REGION,
};
