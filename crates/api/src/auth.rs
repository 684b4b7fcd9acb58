//! Admin session gate.
//!
//! A single shared password unlocks a server-side `is_admin` flag kept
//! in the signed session cookie's server-side record. Every mutating
//! endpoint requires the [`AdminSession`] extractor, which rejects with
//! 401 before the handler body runs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sha2::{Digest, Sha256};
use tower_sessions::Session;

use crate::error::ApiError;

/// Session key holding the admin flag.
pub const IS_ADMIN_KEY: &str = "is_admin";

/// Compare the supplied password against the configured secret.
/// Both sides are hashed first, so the equality check runs over
/// fixed-length digests rather than the raw secrets.
pub fn password_matches(supplied: &str, configured: &str) -> bool {
    Sha256::digest(supplied.as_bytes()) == Sha256::digest(configured.as_bytes())
}

/// Extractor proving the request carries an authenticated admin
/// session. Use as a handler parameter on every admin-only endpoint.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| ApiError::Internal(msg.to_string()))?;

        let is_admin = session
            .get::<bool>(IS_ADMIN_KEY)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?
            .unwrap_or(false);

        if !is_admin {
            return Err(ApiError::Unauthorized);
        }

        Ok(AdminSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_passwords_compare_equal() {
        assert!(password_matches("hunter2", "hunter2"));
    }

    #[test]
    fn mismatched_passwords_compare_unequal() {
        assert!(!password_matches("wrong", "hunter2"));
        assert!(!password_matches("", "hunter2"));
        assert!(!password_matches("hunter2 ", "hunter2"));
    }
}
