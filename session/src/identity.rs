// session/src/identity.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims issued by the external identity provider on sign-in. `subject` is
/// the stable external identity id that keys the domain `User` record; it is
/// read on demand and treated as immutable for the session's duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub subject: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl IdentityClaims {
    pub fn new(subject: impl Into<String>) -> Self {
        IdentityClaims {
            subject: subject.into(),
            username: None,
            email: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("no authenticated session")]
    NotSignedIn,
    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Seam over the external identity provider. The real implementation wraps
/// whatever SDK issues the session token; tests supply claims directly.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_session(&self) -> Result<IdentityClaims, IdentityError>;
}
