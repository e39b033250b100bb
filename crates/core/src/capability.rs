//! Capability traits for types that embed [`Identified`] or [`Named`].
//!
//! Consumers pick either capability independently: identity only, or a name
//! (which always brings an identity with it). The `impl_identify!` and
//! `impl_name!` macros wire the traits to an embedded field.

use crate::id::Identity;
use crate::identified::Identified;
use crate::named::Named;

/// Anything carrying a program-wide numeric identity.
pub trait Identify {
    fn identified(&self) -> &Identified;

    fn id(&self) -> Identity {
        self.identified().id()
    }
}

/// Anything carrying an identity-derived, overridable name.
pub trait Name: Identify {
    fn named(&self) -> &Named;

    fn named_mut(&mut self) -> &mut Named;

    fn name(&self) -> &str {
        self.named().name()
    }

    fn set_name(&mut self, name: impl Into<String>)
    where
        Self: Sized,
    {
        self.named_mut().set_name(name);
    }

    /// See [`Named::prefix`] for the caveat on overridden names.
    fn prefix(&self) -> &str {
        self.named().prefix()
    }
}

impl Identify for Identified {
    fn identified(&self) -> &Identified {
        self
    }
}

impl Identify for Named {
    fn identified(&self) -> &Identified {
        Named::identified(self)
    }
}

impl Name for Named {
    fn named(&self) -> &Named {
        self
    }

    fn named_mut(&mut self) -> &mut Named {
        self
    }
}

/// Implement [`Identify`] for a struct by delegating to an embedded
/// [`Identified`] or [`Named`] field.
///
/// ```ignore
/// struct Task { identity: Identified, retries: u32 }
/// impl_identify!(Task, identity);
/// ```
#[macro_export]
macro_rules! impl_identify {
    ($t:ty, $field:ident) => {
        impl $crate::Identify for $t {
            fn identified(&self) -> &$crate::Identified {
                $crate::Identify::identified(&self.$field)
            }
        }
    };
}

/// Implement [`Identify`] and [`Name`] for a struct by delegating to an
/// embedded [`Named`] field.
#[macro_export]
macro_rules! impl_name {
    ($t:ty, $field:ident) => {
        $crate::impl_identify!($t, $field);

        impl $crate::Name for $t {
            fn named(&self) -> &$crate::Named {
                &self.$field
            }

            fn named_mut(&mut self) -> &mut $crate::Named {
                &mut self.$field
            }
        }
    };
}
