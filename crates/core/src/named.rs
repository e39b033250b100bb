//! Named capability: an identity plus a human-readable, overridable name.
//!
//! A fresh [`Named`] is called `<prefix>-<id>`, e.g. `worker-3`. The name can be
//! replaced at any time; the prefix is kept for introspection but stops
//! describing the name once it has been overridden.

use core::fmt;

use crate::counter::{IdentityCounter, global_counter};
use crate::id::Identity;
use crate::identified::Identified;

/// Name carried by a value whose identity was moved away.
pub const MOVED_NAME: &str = "moved-0";

/// Embeddable capability giving its owner an identity and a name.
///
/// Copy and move follow [`Identified`]: cloning duplicates identity, name and
/// prefix verbatim; [`Named::take`] / [`Named::move_from`] transfer them and
/// leave the source with identity `0` and name [`MOVED_NAME`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Named {
    identified: Identified,
    name: String,
    prefix: String,
}

impl Named {
    /// Mint an identity from the global counter and name it `<prefix>-<id>`.
    ///
    /// An empty prefix is accepted and produces `-<id>`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_counter(prefix, global_counter())
    }

    pub fn with_counter(prefix: impl Into<String>, counter: &IdentityCounter) -> Self {
        let identified = Identified::with_counter(counter);
        let prefix = prefix.into();
        let name = default_name(&prefix, identified.id());
        Self {
            identified,
            name,
            prefix,
        }
    }

    pub fn id(&self) -> Identity {
        self.identified.id()
    }

    pub fn identified(&self) -> &Identified {
        &self.identified
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the live name. Identity and prefix are left alone.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Prefix given at construction.
    ///
    /// Only describes the current name while [`Named::has_default_name`] holds.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// True while the live name is still `<prefix>-<id>`.
    pub fn has_default_name(&self) -> bool {
        self.name
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|digits| digits == self.id().to_string())
    }

    pub fn is_vacated(&self) -> bool {
        self.identified.is_vacated()
    }

    /// Move construction: return identity, name and prefix in a new value and
    /// leave `self` as identity `0` named [`MOVED_NAME`].
    pub fn take(&mut self) -> Self {
        let identified = self.identified.take();
        let name = core::mem::replace(&mut self.name, MOVED_NAME.to_owned());
        let prefix = core::mem::take(&mut self.prefix);
        tracing::trace!(id = identified.id().get(), name = %name, "name moved");
        Self {
            identified,
            name,
            prefix,
        }
    }

    /// Move assignment: adopt `source`'s identity, name and prefix and vacate it.
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }
}

impl fmt::Display for Named {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn default_name(prefix: &str, id: Identity) -> String {
    format!("{prefix}-{id}")
}
