//! Tests for the daily-tick maintenance scheduler.

use roster::{MaintenanceScheduler, SessionManager, UserRecord};

use crate::helpers::populated_store;

#[test]
fn eviction_requires_inactive_and_past_threshold() {
    let scheduler = MaintenanceScheduler::new();
    let mut users = populated_store(10, &["idle", "busy"]);
    let mut sessions = SessionManager::default();

    {
        let u = users.find_by_username_mut("idle").unwrap();
        u.is_active = false;
        u.inactivity_count = 6;
    }
    users.find_by_username_mut("busy").unwrap().inactivity_count = 6;

    scheduler.run_tick(&mut users, &mut sessions, 1);

    // Inactive with count 6 (> threshold 5): evicted
    assert!(users.find_by_username("idle").is_none());
    // Active with the same count: aged to 7, not removed
    assert_eq!(users.find_by_username("busy").unwrap().inactivity_count, 7);
}

#[test]
fn eight_tick_schedule_runs_merge_and_compact_on_cadence() {
    let scheduler = MaintenanceScheduler::new();
    let mut users = populated_store(16, &["solo"]);
    let mut sessions = SessionManager::default();
    // Two byte-identical accounts that only the merge pass may collapse
    users.insert(UserRecord::new("twin", "t@x.com", 0, "pw").unwrap()).unwrap();
    users.insert(UserRecord::new("twin", "t@x.com", 0, "pw").unwrap()).unwrap();

    for day in 1..=8u32 {
        let live_before = users.live_count();
        scheduler.run_tick(&mut users, &mut sessions, day);

        if day == 4 {
            // Merge ran: one twin holed, cursor unchanged until compaction
            assert_eq!(users.live_count(), live_before - 1);
            assert_eq!(users.cursor(), 3);
        } else if day == 8 {
            // Merge (no-op) then compaction: holes eliminated
            assert_eq!(users.cursor(), users.live_count());
            assert_eq!(users.cursor(), 2);
        } else {
            assert_eq!(users.live_count(), live_before);
        }

        // Survivors age every tick
        for user in users.iter() {
            assert_eq!(user.inactivity_count, day);
        }
    }

    // The lower-indexed twin (lower id) won the merge
    assert_eq!(users.find_by_username("twin").unwrap().id, 2);
}

#[test]
fn corrupt_records_are_silently_evicted_first() {
    let scheduler = MaintenanceScheduler::new();
    let mut users = populated_store(10, &["fine", "broken"]);
    let mut sessions = SessionManager::default();
    // Out-of-range id fails the sanity oracle
    users.find_by_username_mut("broken").unwrap().id = 50_000;

    scheduler.run_tick(&mut users, &mut sessions, 1);

    assert!(users.find_by_username("broken").is_none());
    let fine = users.find_by_username("fine").unwrap();
    // The surviving record went through the normal aging branch
    assert_eq!(fine.inactivity_count, 1);
}

#[test]
fn corrupt_record_skips_aging_and_session_tick() {
    let scheduler = MaintenanceScheduler::new();
    let mut users = populated_store(10, &["broken"]);
    let mut sessions = SessionManager::default();
    {
        let u = users.find_by_username_mut("broken").unwrap();
        u.inactivity_count = 2_000;
        u.session_token = "session_broken_1".to_string();
    }

    scheduler.run_tick(&mut users, &mut sessions, 1);
    assert!(users.is_empty());
}

#[test]
fn custom_threshold_is_honored() {
    let scheduler = MaintenanceScheduler::with_inactivity_threshold(0);
    let mut users = populated_store(10, &["gone"]);
    let mut sessions = SessionManager::default();
    {
        let u = users.find_by_username_mut("gone").unwrap();
        u.is_active = false;
        u.inactivity_count = 1;
    }

    scheduler.run_tick(&mut users, &mut sessions, 1);
    assert!(users.is_empty());
}
