//! Lock-free identity counter shared by every identified type.

use core::sync::atomic::{AtomicU64, Ordering};

use crate::id::Identity;

static GLOBAL: IdentityCounter = IdentityCounter::new();

/// The single process-wide counter behind [`Identified::new`](crate::Identified::new)
/// and [`Named::new`](crate::Named::new).
///
/// All types share it, so identities of one concrete type are unique but not
/// necessarily consecutive.
pub fn global_counter() -> &'static IdentityCounter {
    &GLOBAL
}

/// Atomic monotonic counter that mints [`Identity`] values.
///
/// The first minted value is 1; `0` stays reserved for the vacated sentinel.
#[derive(Debug, Default)]
pub struct IdentityCounter {
    last: AtomicU64,
}

impl IdentityCounter {
    /// Create an isolated counter starting at 0.
    ///
    /// Useful when a deterministic sequence is needed (tests, replay). Values
    /// from different counters are not unique relative to each other.
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Atomically increment and return the post-increment value.
    pub fn mint(&self) -> Identity {
        // Only uniqueness matters here; no other memory is published with the id.
        let id = Identity::from_raw(self.last.fetch_add(1, Ordering::Relaxed).wrapping_add(1));
        tracing::trace!(id = id.get(), "minted identity");
        id
    }

    /// Most recently minted raw value (0 if nothing was minted yet).
    pub fn last(&self) -> u64 {
        self.last.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn first_mint_is_one() {
        let counter = IdentityCounter::new();
        assert_eq!(counter.last(), 0);
        assert_eq!(counter.mint().get(), 1);
        assert_eq!(counter.mint().get(), 2);
        assert_eq!(counter.last(), 2);
    }

    #[test]
    fn global_counter_is_shared() {
        let a = global_counter().mint();
        let b = global_counter().mint();
        assert!(b > a);
        assert!(!a.is_vacated());
    }

    #[test]
    fn concurrent_mints_are_distinct_and_gapless() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 2_000;

        let counter = IdentityCounter::new();
        let minted: Vec<Vec<Identity>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| s.spawn(|| (0..PER_THREAD).map(|_| counter.mint()).collect::<Vec<_>>()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let all: HashSet<u64> = minted.iter().flatten().map(|id| id.get()).collect();
        let total = (THREADS * PER_THREAD) as u64;
        assert_eq!(all.len() as u64, total);
        assert!(!all.contains(&0));
        // No lost increments: exactly 1..=total was handed out.
        assert_eq!(counter.last(), total);
        assert!((1..=total).all(|v| all.contains(&v)));
    }
}
