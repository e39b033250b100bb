//! Identity error model.

use thiserror::Error;

/// Result type used by the fallible identity helpers.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Identity-level error.
///
/// Minting, cloning, moving and renaming are total and never produce one of
/// these. Only parsing and the explicit liveness check do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// Text could not be parsed as a numeric identity.
    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    /// A live identity was required but the vacated sentinel was found.
    #[error("identity has been vacated (moved from)")]
    Vacated,
}

impl IdentityError {
    pub fn invalid_identity(msg: impl Into<String>) -> Self {
        Self::InvalidIdentity(msg.into())
    }
}
