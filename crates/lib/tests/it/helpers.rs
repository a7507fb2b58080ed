use std::sync::Arc;

use roster::{FixedClock, Instance, UserRecord, UserStore};

// ==========================
// CORE TEST FACTORIES
// ==========================

/// Creates an Instance with the default capacity and a [`FixedClock`] for
/// controllable token timestamps.
pub fn test_instance() -> Instance {
    Instance::with_clock(100, Arc::new(FixedClock::default()))
}

/// Creates an Instance with a specific user-store capacity.
#[allow(dead_code)]
pub fn test_instance_with_capacity(capacity: usize) -> Instance {
    Instance::with_clock(capacity, Arc::new(FixedClock::default()))
}

/// Creates a user record with a derived email and a fixed password.
pub fn sample_user(username: &str) -> UserRecord {
    UserRecord::new(username, &format!("{username}@example.com"), 0, "pw")
        .expect("Failed to create sample user")
}

/// Creates a store of the given capacity populated with the named users.
pub fn populated_store(capacity: usize, names: &[&str]) -> UserStore {
    let mut store = UserStore::new(capacity);
    for name in names {
        store
            .insert(sample_user(name))
            .expect("Failed to populate store");
    }
    store
}
