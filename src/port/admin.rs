//! Admin service port: the system of record for tenant metadata.

use async_trait::async_trait;

use crate::error::AdminError;

/// Bearer-token authenticated operations against the admin service.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Allocate the next unused tenant ordinal (an atomic counter owned by
    /// the admin service).
    async fn next_project_ordinal(&self, token: &str) -> Result<u32, AdminError>;

    /// Insert a tenant record with its fully qualified domain.
    async fn register_project(
        &self,
        token: &str,
        name: &str,
        domain: &str,
    ) -> Result<(), AdminError>;

    /// Delete a tenant record by name. Deleting a record that does not exist
    /// is not an error.
    async fn deregister_project(&self, token: &str, name: &str) -> Result<(), AdminError>;
}
