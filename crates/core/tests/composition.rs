//! Types composing the capabilities through the provided macros.

use std::collections::HashSet;
use std::sync::Mutex;

use namemint_core::{
    Identified, Identify, Identity, IdentityCounter, MOVED_NAME, Name, Named, impl_identify,
    impl_name,
};

#[derive(Debug, Clone)]
struct Connection {
    identity: Identified,
    peer: String,
}

impl_identify!(Connection, identity);

#[derive(Debug, Clone)]
struct Session {
    named: Named,
    requests: u32,
}

impl_name!(Session, named);

impl Session {
    fn new(counter: &IdentityCounter) -> Self {
        Self {
            named: Named::with_counter("session", counter),
            requests: 0,
        }
    }

    /// Move-assign identity and name while keeping this session's other state.
    fn adopt(&mut self, other: &mut Session) {
        self.named.move_from(&mut other.named);
    }
}

#[test]
fn identity_only_type_exposes_id() {
    let conn = Connection {
        identity: Identified::new(),
        peer: "10.0.0.1:443".to_owned(),
    };
    assert!(!conn.id().is_vacated());
    assert_eq!(conn.peer, "10.0.0.1:443");

    let copy = conn.clone();
    assert_eq!(copy.id(), conn.id());
}

#[test]
fn named_type_exposes_name_prefix_and_id() {
    let counter = IdentityCounter::new();
    let mut s = Session::new(&counter);
    assert_eq!(s.id().get(), 1);
    assert_eq!(s.name(), "session-1");
    assert_eq!(s.prefix(), "session");

    s.set_name("checkout");
    assert_eq!(s.name(), "checkout");
    assert_eq!(s.prefix(), "session");
    assert_eq!(s.id().get(), 1);
}

#[test]
fn vacating_leaves_other_state_untouched() {
    let counter = IdentityCounter::new();
    let mut a = Session::new(&counter);
    a.requests = 7;
    let mut b = Session::new(&counter);
    b.requests = 3;

    b.adopt(&mut a);

    assert_eq!(b.name(), "session-1");
    assert_eq!(b.requests, 3);
    assert_eq!(a.id(), Identity::VACATED);
    assert_eq!(a.name(), MOVED_NAME);
    assert_eq!(a.requests, 7);
}

#[test]
fn mixed_types_share_the_global_counter_across_threads() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 500;

    let seen = Mutex::new(Vec::with_capacity(THREADS * PER_THREAD * 2));
    std::thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                let mut local = Vec::with_capacity(PER_THREAD * 2);
                for i in 0..PER_THREAD {
                    let conn = Connection {
                        identity: Identified::new(),
                        peer: format!("peer-{i}"),
                    };
                    local.push(conn.id());
                    local.push(Named::new("task").id());
                }
                seen.lock().unwrap().extend(local);
            });
        }
    });

    let ids = seen.into_inner().unwrap();
    let unique: HashSet<Identity> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
    assert!(!unique.contains(&Identity::VACATED));
}
