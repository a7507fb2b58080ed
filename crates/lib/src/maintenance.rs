//! Daily maintenance over the user and session stores
//!
//! [`MaintenanceScheduler`] is the daily-tick driver: it ages users, evicts
//! the long-inactive, expires idle sessions, merges duplicate accounts, and
//! compacts the user store, in that fixed order. Merge and compaction run
//! periodically, keyed to an externally supplied day counter, and operate
//! on post-eviction state.

use tracing::debug;

use crate::constants::{COMPACT_PERIOD, INACTIVITY_THRESHOLD, MERGE_PERIOD};
use crate::session::SessionManager;
use crate::user::UserStore;

/// Daily-tick driver for the maintenance sweep.
#[derive(Debug, Clone)]
pub struct MaintenanceScheduler {
    /// Inactivity count beyond which an inactive user is evicted
    inactivity_threshold: u32,
    /// Day-counter period for duplicate merging
    merge_period: u32,
    /// Day-counter period for compaction
    compact_period: u32,
}

impl MaintenanceScheduler {
    /// Create a scheduler with the default thresholds.
    pub fn new() -> Self {
        Self {
            inactivity_threshold: INACTIVITY_THRESHOLD,
            merge_period: MERGE_PERIOD,
            compact_period: COMPACT_PERIOD,
        }
    }

    /// Create a scheduler with an explicit inactivity threshold.
    pub fn with_inactivity_threshold(threshold: u32) -> Self {
        Self {
            inactivity_threshold: threshold,
            ..Self::new()
        }
    }

    /// Run one daily tick over the stores.
    ///
    /// Per occupied user slot, in index order:
    /// 1. A record failing the sanity oracle is holed (silent eviction).
    /// 2. An inactive record whose inactivity count exceeds the threshold
    ///    is evicted.
    /// 3. Otherwise the record's session (if any) is checked and ticked —
    ///    a session expiring on this check marks the user inactive — and
    ///    the inactivity count is incremented. Aging is unconditional:
    ///    active users seen every tick age too.
    ///
    /// After the full pass: duplicate merging when `day` is divisible by
    /// the merge period, then compaction when divisible by the compact
    /// period. Both see post-eviction state.
    pub fn run_tick(&self, users: &mut UserStore, sessions: &mut SessionManager, day: u32) {
        debug!(day, live = users.live_count(), "running daily maintenance tick");

        for slot in 0..users.cursor() {
            let Some(user) = users.get(slot) else {
                continue;
            };

            if !user.is_valid() {
                users.evict_corrupt(slot);
                continue;
            }

            if !user.is_active && user.inactivity_count > self.inactivity_threshold {
                if let Some(evicted) = users.remove(slot) {
                    debug!(
                        id = evicted.id,
                        username = %evicted.username,
                        inactivity = evicted.inactivity_count,
                        "evicted inactive user"
                    );
                }
                continue;
            }

            let token = user.session_token.clone();
            let just_expired = !token.is_empty() && sessions.validate_and_tick(&token);
            if let Some(user) = users.get_mut(slot) {
                if just_expired {
                    user.is_active = false;
                }
                user.inactivity_count += 1;
            }
        }

        if day % self.merge_period == 0 {
            users.merge_duplicates();
        }
        if day % self.compact_period == 0 {
            users.compact();
        }
    }
}

impl Default for MaintenanceScheduler {
    fn default() -> Self {
        Self::new()
    }
}
