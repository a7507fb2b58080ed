//! Application context tying the stores together
//!
//! [`Instance`] replaces the original system's global singletons (store,
//! session manager, day-counter pointer) with one explicit context struct:
//! constructed once at startup and threaded through every operation. It
//! owns the [`UserStore`], the [`SessionManager`], the maintenance
//! scheduler, and the clock, and exposes the collaborator-facing surface.
//!
//! ## Example
//!
//! ```
//! use roster::{Instance, UserRecord};
//!
//! # fn main() -> roster::Result<()> {
//! let mut instance = Instance::new(100);
//! let user = UserRecord::new("alice", "a@x.com", 0, "p1")?;
//! instance.add_user(user)?;
//! let token = instance.login("alice")?;
//! assert!(!token.is_empty());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::constants::DEFAULT_SESSION_CAPACITY;
use crate::maintenance::MaintenanceScheduler;
use crate::session::SessionManager;
use crate::user::{UserError, UserRecord, UserStore};

/// Single-threaded application context for the user directory.
///
/// All operations are direct in-memory mutations that complete before
/// returning; there are no suspension points. Callers that introduce
/// concurrency must serialize store-mutating operations behind one
/// exclusive lock per instance, because compaction reassigns slot contents
/// out from under any concurrent scanner.
#[derive(Debug)]
pub struct Instance {
    users: UserStore,
    sessions: SessionManager,
    scheduler: MaintenanceScheduler,
    clock: Arc<dyn Clock>,
    /// Last externally supplied day counter value
    day: u32,
}

impl Instance {
    /// Create an instance with the given user-store capacity, the default
    /// session capacity, and the system clock.
    pub fn new(capacity: usize) -> Self {
        Self::with_clock(capacity, Arc::new(SystemClock))
    }

    /// Create an instance with an explicit clock (tests use a
    /// [`FixedClock`](crate::FixedClock) for deterministic tokens).
    pub fn with_clock(capacity: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            users: UserStore::new(capacity),
            sessions: SessionManager::new(DEFAULT_SESSION_CAPACITY),
            scheduler: MaintenanceScheduler::new(),
            clock,
            day: 0,
        }
    }

    /// Insert an account into the user store, returning its assigned id.
    ///
    /// Refuses with `CapacityExceeded` when the store is full.
    pub fn add_user(&mut self, record: UserRecord) -> crate::Result<u32> {
        self.users.insert(record)
    }

    /// Log a user in by username.
    ///
    /// Resets the inactivity count, marks the account active, and creates a
    /// fresh session whose token is returned (and mirrored into the user
    /// record). Fails with `NotFound` for an unknown username; a full
    /// session table surfaces as a typed `CapacityExceeded` error rather
    /// than the original's process abort.
    pub fn login(&mut self, username: &str) -> crate::Result<String> {
        let Some(user) = self.users.find_by_username_mut(username) else {
            return Err(UserError::NotFound {
                username: username.to_string(),
            }
            .into());
        };

        debug!(id = user.id, username = %user.username, after_days = user.inactivity_count, "user login");
        user.inactivity_count = 0;
        user.is_active = true;
        self.sessions.create_session(user, &*self.clock)
    }

    /// Fetch the opaque stored password for a username.
    ///
    /// No verification happens anywhere in this core; returning the stored
    /// string is the documented policy of the original system.
    pub fn get_password(&self, username: &str) -> Option<&str> {
        self.users
            .find_by_username(username)
            .map(|u| u.password.as_str())
    }

    /// Check a session token and advance its idle counter.
    ///
    /// See [`SessionManager::validate_and_tick`] for the dual-purpose
    /// return value.
    pub fn validate_session(&mut self, token: &str) -> bool {
        self.sessions.validate_and_tick(token)
    }

    /// Run the daily maintenance sweep for the given external day counter.
    ///
    /// Invoked once per simulated day by the host.
    pub fn daily_tick(&mut self, day: u32) {
        self.day = day;
        self.scheduler
            .run_tick(&mut self.users, &mut self.sessions, day);
    }

    /// Force-expire every session, sweeping matching users inactive.
    pub fn deactivate_all(&mut self) {
        self.sessions.expire_and_sweep(&mut self.users, None);
    }

    /// Force-expire every session, sweeping matching users inactive in both
    /// this instance's store and a second, externally supplied store.
    pub fn deactivate_all_with(&mut self, other: &mut UserStore) {
        self.sessions.expire_and_sweep(&mut self.users, Some(other));
    }

    /// The user store.
    pub fn users(&self) -> &UserStore {
        &self.users
    }

    /// Mutable access to the user store, for hosts that manage records
    /// directly.
    pub fn users_mut(&mut self) -> &mut UserStore {
        &mut self.users
    }

    /// The session table.
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// The last day counter value seen by [`daily_tick`](Self::daily_tick).
    pub fn current_day(&self) -> u32 {
        self.day
    }
}
