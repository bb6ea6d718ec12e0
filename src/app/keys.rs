//! Idempotent key-pair provisioning.

use tracing::{debug, info};

use crate::domain::Region;
use crate::error::ProviderError;
use crate::port::{KeyMaterial, KeyPairProvider};

/// Create the named key pair unless it already exists.
///
/// Returns the key material only when a new pair was created; the provider
/// hands it out exactly once. Check-then-act is acceptable here: key-pair
/// names are unique per account/region and creation is operator-driven.
pub async fn ensure_key_pair<P>(
    provider: &P,
    region: &Region,
    name: &str,
) -> Result<Option<KeyMaterial>, ProviderError>
where
    P: KeyPairProvider + ?Sized,
{
    let existing = provider.list_key_pairs(region).await?;
    if existing.iter().any(|k| k == name) {
        debug!(key = name, "key pair already exists");
        return Ok(None);
    }

    let material = provider.create_key_pair(region, name).await?;
    info!(key = %material.name, region = %region, "created key pair");
    Ok(Some(material))
}
