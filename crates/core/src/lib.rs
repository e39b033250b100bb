//! `namemint-core` — process-wide identity and naming primitives.
//!
//! Embed [`Identified`] to give a type a unique numeric identity, or [`Named`]
//! to additionally give it a readable `<prefix>-<id>` name. Every participating
//! type draws from one shared lock-free counter; no registry is involved.

pub mod capability;
pub mod counter;
pub mod error;
pub mod id;
pub mod identified;
pub mod named;

pub use capability::{Identify, Name};
pub use counter::{IdentityCounter, global_counter};
pub use error::{IdentityError, IdentityResult};
pub use id::Identity;
pub use identified::Identified;
pub use named::{MOVED_NAME, Named};
