//! Numeric identity value.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{IdentityError, IdentityResult};

/// Program-wide numeric identity of an instance.
///
/// Freshly minted identities start at 1 and only grow. `0` is reserved for
/// instances whose identity was moved away (see [`Identity::VACATED`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(u64);

impl Identity {
    /// Sentinel carried by moved-from instances. Never minted.
    pub const VACATED: Identity = Identity(0);

    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn is_vacated(self) -> bool {
        self.0 == 0
    }

    /// Returns `self` unless it is the vacated sentinel.
    pub fn live(self) -> IdentityResult<Identity> {
        if self.is_vacated() {
            Err(IdentityError::Vacated)
        } else {
            Ok(self)
        }
    }
}

impl core::fmt::Display for Identity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Identity> for u64 {
    fn from(value: Identity) -> Self {
        value.0
    }
}

impl FromStr for Identity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = u64::from_str(s)
            .map_err(|e| IdentityError::invalid_identity(format!("{s:?}: {e}")))?;
        Ok(Self(raw))
    }
}
