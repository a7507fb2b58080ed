//! Bounded session table and token lifecycle
//!
//! [`SessionManager`] holds a fixed-capacity slot array of
//! [`SessionRecord`]s with an append-only cursor: new sessions always land
//! at the cursor, expired sessions leave holes, and the table is never
//! compacted. Cross-lookups into a user store take the store as an explicit
//! argument; the manager holds no back-reference.

use tracing::debug;

use crate::clock::Clock;
use crate::constants::{DEFAULT_SESSION_CAPACITY, SESSION_IDLE_LIMIT, SESSION_TOKEN_MAX_LEN};
use crate::session::{SessionError, SessionRecord};
use crate::user::{UserRecord, UserStore};

/// Fixed-capacity table of active sessions.
#[derive(Debug)]
pub struct SessionManager {
    slots: Vec<Option<SessionRecord>>,
    cursor: usize,
    capacity: usize,
    idle_limit: u32,
}

impl SessionManager {
    /// Create an empty session table with the given fixed capacity and the
    /// default idle limit.
    pub fn new(capacity: usize) -> Self {
        Self::with_idle_limit(capacity, SESSION_IDLE_LIMIT)
    }

    /// Create an empty session table with an explicit idle limit: the
    /// number of validation checks a session survives before expiring.
    pub fn with_idle_limit(capacity: usize, idle_limit: u32) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            cursor: 0,
            capacity,
            idle_limit,
        }
    }

    /// The fixed capacity of the session table.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The append cursor. Holes below it persist; it never rewinds.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of active sessions below the cursor.
    pub fn active_count(&self) -> usize {
        self.slots[..self.cursor]
            .iter()
            .filter(|s| s.as_ref().is_some_and(|r| r.is_active))
            .count()
    }

    /// Create a session for `user` and mirror the token into its record.
    ///
    /// The token is derived deterministically from the username and the
    /// clock's current timestamp (`session_<username>_<secs>`, truncated to
    /// the token bound). Fails with [`SessionError::InvalidUser`] when the
    /// username is empty and [`SessionError::CapacityExceeded`] when the
    /// append cursor has reached capacity; whether capacity exhaustion is
    /// fatal is the caller's policy, not the table's.
    ///
    /// Returns the token.
    pub fn create_session(
        &mut self,
        user: &mut UserRecord,
        clock: &dyn Clock,
    ) -> crate::Result<String> {
        if user.username.is_empty() {
            return Err(SessionError::InvalidUser.into());
        }
        if self.cursor >= self.capacity {
            return Err(SessionError::CapacityExceeded {
                capacity: self.capacity,
            }
            .into());
        }

        let token = generate_token(&user.username, clock.now_secs());
        let session = SessionRecord {
            user_id: user.id,
            username: user.username.clone(),
            token: token.clone(),
            idle_ticks: 0,
            is_active: true,
        };
        debug!(user_id = user.id, username = %user.username, slot = self.cursor, "created session");
        self.slots[self.cursor] = Some(session);
        self.cursor += 1;

        // Keep the user-side mirror of the token in step
        user.session_token = token.clone();
        Ok(token)
    }

    /// Find an active session by exact token match. Inactive sessions and
    /// holes are skipped; first match wins.
    pub fn find_by_token(&self, token: &str) -> Option<&SessionRecord> {
        self.slots[..self.cursor]
            .iter()
            .filter_map(|s| s.as_ref())
            .find(|s| s.is_active && s.token == token)
    }

    /// Check a session and advance its idle counter.
    ///
    /// The return value is dual-purpose and callers rely on both meanings:
    /// - `false`: the token is unknown/inactive ("invalid"), or the session
    ///   is still valid and its idle counter was advanced by one
    /// - `true`: the session reached its idle limit *on this check* and was
    ///   just marked inactive — the one-time transition into expiry
    ///
    /// Subsequent checks of an expired token return `false` again, so
    /// `true` fires exactly once per session lifetime.
    pub fn validate_and_tick(&mut self, token: &str) -> bool {
        let session = self.slots[..self.cursor]
            .iter_mut()
            .filter_map(|s| s.as_mut())
            .find(|s| s.is_active && s.token == token);
        let Some(session) = session else {
            return false;
        };

        if session.idle_ticks >= self.idle_limit {
            debug!(user_id = session.user_id, "session expired on idle check");
            session.is_active = false;
            true
        } else {
            session.idle_ticks += 1;
            false
        }
    }

    /// Expire every session and sweep the owning users inactive.
    ///
    /// For each occupied slot: sessions past the idle limit are marked
    /// inactive; the token is cross-referenced against `primary` and, when
    /// supplied, `extra`, and any matching user is marked inactive; then the
    /// slot is released. Holes persist (the session table is never
    /// compacted) and the cursor stays put.
    pub fn expire_and_sweep(&mut self, primary: &mut UserStore, mut extra: Option<&mut UserStore>) {
        for slot in self.slots[..self.cursor].iter_mut() {
            let Some(mut session) = slot.take() else {
                continue;
            };
            if session.idle_ticks >= self.idle_limit {
                session.is_active = false;
            }

            if let Some(user) = primary.find_by_session_token_mut(&session.token) {
                user.is_active = false;
            }
            if let Some(store) = extra.as_deref_mut()
                && let Some(user) = store.find_by_session_token_mut(&session.token)
            {
                user.is_active = false;
            }
            debug!(user_id = session.user_id, "swept session");
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_CAPACITY)
    }
}

/// Derive a session token from a username and a timestamp, truncated to the
/// fixed token bound on a char boundary.
fn generate_token(username: &str, timestamp: i64) -> String {
    let raw = format!("session_{username}_{timestamp}");
    crate::user::truncate_to(&raw, SESSION_TOKEN_MAX_LEN)
}
