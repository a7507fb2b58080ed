//! Bounded slot-array store for user records
//!
//! [`UserStore`] is a fixed-capacity arena of optional owned records.
//! Removal leaves a hole (tombstone) rather than shifting; the occupancy
//! `cursor` is an upper bound on the occupied index range, not a live count.
//! Holes persist until the maintenance scheduler invokes [`compact`].
//!
//! [`compact`]: UserStore::compact

use tracing::{debug, warn};

use crate::constants::DEFAULT_USER_CAPACITY;
use crate::user::{UserError, UserRecord};

/// Fixed-capacity ordered collection of [`UserRecord`] slots.
///
/// Invariants:
/// - `capacity` is constant for the store's lifetime
/// - `cursor <= capacity`; iteration tolerates holes below the cursor
/// - ids are assigned once at insertion, 1-based and monotonic per store
///   lifetime, and never reused while a slot is occupied
#[derive(Debug)]
pub struct UserStore {
    slots: Vec<Option<UserRecord>>,
    cursor: usize,
    capacity: usize,
    next_id: u32,
}

impl UserStore {
    /// Create an empty store with the given fixed capacity.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            cursor: 0,
            capacity,
            next_id: 1,
        }
    }

    /// The fixed capacity of the store.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The append/occupancy cursor.
    ///
    /// An upper bound on the occupied index range; not a live count once
    /// holes exist.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of occupied (non-hole) slots below the cursor.
    pub fn live_count(&self) -> usize {
        self.slots[..self.cursor].iter().filter(|s| s.is_some()).count()
    }

    /// True when no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    /// Insert a record, assigning it the next id.
    ///
    /// Fails with [`UserError::CapacityExceeded`] once the cursor has
    /// reached capacity, leaving the store unchanged. Duplicate usernames
    /// are not checked here; the maintenance merge pass resolves them.
    ///
    /// Returns the assigned id.
    pub fn insert(&mut self, mut record: UserRecord) -> crate::Result<u32> {
        if self.cursor >= self.capacity {
            return Err(UserError::CapacityExceeded {
                capacity: self.capacity,
            }
            .into());
        }

        let id = self.next_id;
        record.id = id;
        debug!(username = %record.username, id, slot = self.cursor, "inserting user");
        self.slots[self.cursor] = Some(record);
        self.cursor += 1;
        self.next_id += 1;
        Ok(id)
    }

    /// Find a record by id. Linear scan, first match wins.
    pub fn find_by_id(&self, id: u32) -> Option<&UserRecord> {
        self.iter().find(|u| u.id == id)
    }

    /// Find a record by username. Linear scan, first match wins.
    pub fn find_by_username(&self, username: &str) -> Option<&UserRecord> {
        self.iter().find(|u| u.username == username)
    }

    /// Mutable variant of [`find_by_username`](Self::find_by_username).
    pub fn find_by_username_mut(&mut self, username: &str) -> Option<&mut UserRecord> {
        self.iter_mut().find(|u| u.username == username)
    }

    /// Find a record by its mirrored session token. Linear scan, first
    /// match wins. An empty token never matches (empty means no session).
    pub fn find_by_session_token(&self, token: &str) -> Option<&UserRecord> {
        if token.is_empty() {
            return None;
        }
        self.iter().find(|u| u.session_token == token)
    }

    /// Mutable variant of [`find_by_session_token`](Self::find_by_session_token).
    pub fn find_by_session_token_mut(&mut self, token: &str) -> Option<&mut UserRecord> {
        if token.is_empty() {
            return None;
        }
        self.iter_mut().find(|u| u.session_token == token)
    }

    /// Borrow the record at a slot index, if occupied.
    pub fn get(&self, index: usize) -> Option<&UserRecord> {
        self.slots.get(index).and_then(|s| s.as_ref())
    }

    /// Mutably borrow the record at a slot index, if occupied.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut UserRecord> {
        self.slots.get_mut(index).and_then(|s| s.as_mut())
    }

    /// Release the record at a slot index, leaving a hole.
    ///
    /// The cursor is not decremented and later slots do not shift; the hole
    /// persists until the next compaction.
    pub fn remove(&mut self, index: usize) -> Option<UserRecord> {
        self.slots.get_mut(index).and_then(|s| s.take())
    }

    /// Eliminate all holes in the occupied range.
    ///
    /// Each live record moves into the lowest available hole, preserving
    /// order (and carrying its id with it); afterwards the cursor equals
    /// the live count. Idempotent. This is a point-in-time operation run by
    /// the maintenance scheduler, not a continuous policy.
    pub fn compact(&mut self) {
        let mut write = 0;
        for read in 0..self.cursor {
            if self.slots[read].is_some() {
                if read != write {
                    self.slots[write] = self.slots[read].take();
                }
                write += 1;
            }
        }
        debug!(before = self.cursor, after = write, "compacted user store");
        self.cursor = write;
    }

    /// Merge duplicate accounts.
    ///
    /// Two records are duplicates iff username, email, and password are all
    /// byte-equal. Scanning from the highest index down, the higher-indexed
    /// duplicate is released and its slot holed; the lowest-indexed
    /// occurrence survives. This can change which id "wins" a username,
    /// which is accepted behavior.
    pub fn merge_duplicates(&mut self) {
        for i in (1..self.cursor).rev() {
            if self.slots[i].is_none() {
                continue;
            }
            let is_dup = (0..i).any(|j| match (&self.slots[i], &self.slots[j]) {
                (Some(a), Some(b)) => a.same_identity(b),
                _ => false,
            });
            if is_dup {
                if let Some(dup) = self.slots[i].take() {
                    debug!(username = %dup.username, id = dup.id, slot = i, "merged duplicate user");
                }
            }
        }
    }

    /// Release a slot holding a record that failed the sanity oracle.
    ///
    /// Corruption is handled as a silent eviction, surfaced only in the log.
    pub(crate) fn evict_corrupt(&mut self, index: usize) {
        if let Some(user) = self.slots.get_mut(index).and_then(|s| s.take()) {
            warn!(id = user.id, slot = index, "evicting corrupt user record");
        }
    }

    /// Iterate over the occupied slots below the cursor, skipping holes.
    pub fn iter(&self) -> impl Iterator<Item = &UserRecord> {
        self.slots[..self.cursor].iter().filter_map(|s| s.as_ref())
    }

    /// Mutable variant of [`iter`](Self::iter).
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut UserRecord> {
        self.slots[..self.cursor]
            .iter_mut()
            .filter_map(|s| s.as_mut())
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new(DEFAULT_USER_CAPACITY)
    }
}
