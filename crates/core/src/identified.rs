//! Identity capability: one minted numeric identity per instance.

use crate::counter::{IdentityCounter, global_counter};
use crate::id::Identity;

/// Embeddable capability giving its owner a program-wide unique [`Identity`].
///
/// Lifecycle:
/// - [`Identified::new`] / [`Default`] mint a fresh identity from the global counter.
/// - [`Clone`] (and `clone_from`) produce an **exact clone**: both values carry
///   the same identity and nothing is minted.
/// - [`Identified::take`] / [`Identified::move_from`] transfer the identity and
///   leave the source holding [`Identity::VACATED`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identified {
    id: Identity,
}

impl Identified {
    pub fn new() -> Self {
        Self::with_counter(global_counter())
    }

    /// Mint from `counter` instead of the process-wide one.
    pub fn with_counter(counter: &IdentityCounter) -> Self {
        Self { id: counter.mint() }
    }

    pub fn id(&self) -> Identity {
        self.id
    }

    /// True once this value has been moved from and not reassigned.
    pub fn is_vacated(&self) -> bool {
        self.id.is_vacated()
    }

    /// Move construction: return the identity in a new value and vacate `self`.
    pub fn take(&mut self) -> Self {
        let id = core::mem::replace(&mut self.id, Identity::VACATED);
        tracing::trace!(id = id.get(), "identity moved");
        Self { id }
    }

    /// Move assignment: adopt `source`'s identity and vacate `source`.
    ///
    /// Whatever identity `self` held before is dropped, not recycled.
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }
}

impl Default for Identified {
    fn default() -> Self {
        Self::new()
    }
}
