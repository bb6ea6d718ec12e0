//! Cloud provider ports for stack lifecycle and key-pair management.
//!
//! These are the primary integration points with the provider. Submission
//! calls return as soon as the provider acknowledges the request; waiting for
//! a terminal state is the waiter's job.

use async_trait::async_trait;

use crate::domain::{Region, StackDescription, StackParameter};
use crate::error::ProviderError;

/// Key material returned exactly once when a key pair is created.
#[derive(Debug, Clone)]
pub struct KeyMaterial {
    pub name: String,
    pub material: String,
}

/// Stack lifecycle operations.
#[async_trait]
pub trait StackProvider: Send + Sync {
    /// Submit a stack creation request; returns the provider-assigned stack
    /// id once the submission is acknowledged. Does not wait for completion.
    async fn create_stack(
        &self,
        region: &Region,
        name: &str,
        template_body: &str,
        parameters: &[StackParameter],
    ) -> Result<String, ProviderError>;

    /// Submit a stack deletion request. Does not wait for completion.
    async fn delete_stack(&self, name: &str) -> Result<(), ProviderError>;

    /// Fetch the current status and outputs of a stack.
    ///
    /// Returns [`ProviderError::StackNotFound`] when no stack with that name
    /// exists.
    async fn describe_stack(&self, name: &str) -> Result<StackDescription, ProviderError>;
}

/// Network key-pair operations.
#[async_trait]
pub trait KeyPairProvider: Send + Sync {
    /// List the names of existing key pairs in a region.
    async fn list_key_pairs(&self, region: &Region) -> Result<Vec<String>, ProviderError>;

    /// Create a named key pair, returning its material exactly once.
    async fn create_key_pair(
        &self,
        region: &Region,
        name: &str,
    ) -> Result<KeyMaterial, ProviderError>;
}
