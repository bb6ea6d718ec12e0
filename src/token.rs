//! Admin credential issuance.
//!
//! The admin service authenticates callers with a bearer token signed by a
//! shared secret. Tokens carry a single `role` claim and are minted fresh
//! for each workflow invocation; they are never persisted.

use jsonwebtoken::{EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::error::SigningError;

/// Claims asserted by every issued credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Fixed role accepted by the admin service.
    pub role: String,
}

/// Issue a signed HS256 token asserting the `admin` role.
///
/// No `exp` claim is set; expiry is enforced by the consuming service.
pub fn issue_admin_token(secret: &str) -> Result<String, SigningError> {
    if secret.is_empty() {
        return Err(SigningError::EmptySecret);
    }

    let claims = AdminClaims {
        role: "admin".to_string(),
    };
    let key = EncodingKey::from_secret(secret.as_bytes());

    Ok(jsonwebtoken::encode(&Header::default(), &claims, &key)?)
}
