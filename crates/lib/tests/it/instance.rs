//! End-to-end tests through the Instance context.

use roster::{Instance, UserRecord, UserStore};

use crate::helpers::{sample_user, test_instance, test_instance_with_capacity};

#[test]
fn create_add_login_validate_scenario() {
    let mut instance = test_instance();

    let alice = UserRecord::new("alice", "a@x.com", 0, "p1").unwrap();
    let id = instance.add_user(alice).unwrap();
    assert_eq!(id, 1);

    let token = instance.login("alice").unwrap();
    assert!(!token.is_empty());

    // Idle limit is one check: first validation passes and ticks, the
    // second reports the expiry transition
    assert!(!instance.validate_session(&token));
    assert!(instance.validate_session(&token));
    assert!(!instance.validate_session(&token));
}

#[test]
fn login_replaces_session_and_reactivates() {
    let clock = std::sync::Arc::new(roster::FixedClock::default());
    let mut instance = Instance::with_clock(100, clock.clone());
    instance.add_user(sample_user("alice")).unwrap();

    let first = instance.login("alice").unwrap();
    // Expire the first session
    instance.validate_session(&first);
    instance.validate_session(&first);

    // Tokens embed whole seconds; move the clock past the current one
    clock.advance(5_000);
    let second = instance.login("alice").unwrap();
    assert_ne!(first, second);
    let user = instance.users().find_by_username("alice").unwrap();
    assert!(user.is_active);
    assert_eq!(user.session_token, second);
    assert!(!instance.validate_session(&second));
}

#[test]
fn full_store_refuses_additional_users() {
    let mut instance = test_instance_with_capacity(2);
    instance.add_user(sample_user("a")).unwrap();
    instance.add_user(sample_user("b")).unwrap();
    let err = instance.add_user(sample_user("c")).unwrap_err();
    assert!(err.is_capacity_exceeded());
}

#[test]
fn daily_ticks_age_evict_merge_and_compact() {
    let mut instance = test_instance();
    instance.add_user(sample_user("dup")).unwrap();
    instance.add_user(sample_user("dup")).unwrap();
    instance.add_user(sample_user("keeper")).unwrap();

    for day in 1..=8u32 {
        instance.daily_tick(day);
    }

    // The duplicate pair collapsed on day 4, the hole went away on day 8
    assert_eq!(instance.users().live_count(), 2);
    assert_eq!(instance.users().cursor(), 2);
    assert_eq!(instance.users().find_by_username("dup").unwrap().id, 1);
    // Everyone aged once per tick
    assert!(instance.users().iter().all(|u| u.inactivity_count == 8));
}

#[test]
fn inactivity_eviction_through_daily_ticks() {
    let mut instance = test_instance();
    instance.add_user(sample_user("fading")).unwrap();
    instance
        .users_mut()
        .find_by_username_mut("fading")
        .unwrap()
        .is_active = false;

    // Threshold 5, strict comparison: survives six aging ticks (count
    // reaching 6), evicted on the seventh
    for day in 1..=6u32 {
        instance.daily_tick(day);
        assert!(instance.users().find_by_username("fading").is_some());
    }
    instance.daily_tick(7);
    assert!(instance.users().find_by_username("fading").is_none());
}

#[test]
fn logged_in_user_survives_maintenance() {
    let mut instance = test_instance();
    instance.add_user(sample_user("alice")).unwrap();
    instance.login("alice").unwrap();

    // Tick 1 validates the session (still live), tick 2 expires it and
    // flags the user inactive; aging then runs its course
    instance.daily_tick(1);
    assert!(instance.users().find_by_username("alice").unwrap().is_active);
    instance.daily_tick(2);
    let alice = instance.users().find_by_username("alice").unwrap();
    assert!(!alice.is_active);
    assert_eq!(alice.inactivity_count, 2);
}

#[test]
fn deactivate_all_with_external_store() {
    let mut instance = test_instance();
    instance.add_user(sample_user("alice")).unwrap();
    let token = instance.login("alice").unwrap();

    let mut external = UserStore::new(4);
    let mut mirror = sample_user("alice");
    mirror.session_token = token;
    external.insert(mirror).unwrap();

    instance.deactivate_all_with(&mut external);

    assert_eq!(instance.sessions().active_count(), 0);
    assert!(!instance.users().find_by_username("alice").unwrap().is_active);
    assert!(!external.find_by_username("alice").unwrap().is_active);
}
