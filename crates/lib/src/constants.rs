//! Constants used throughout the roster library.
//!
//! This module provides central definitions for the store bounds and
//! maintenance thresholds. Capacities and the idle limit are also injectable
//! through the relevant constructors; everything else is fixed policy.

/// Default capacity of a [`UserStore`](crate::user::UserStore).
pub const DEFAULT_USER_CAPACITY: usize = 100;

/// Default capacity of a [`SessionManager`](crate::session::SessionManager).
pub const DEFAULT_SESSION_CAPACITY: usize = 100;

/// Maximum stored length of a username, in bytes.
pub const USERNAME_MAX_LEN: usize = 49;

/// Maximum stored length of an email address, in bytes.
pub const EMAIL_MAX_LEN: usize = 49;

/// Maximum stored length of a password, in bytes.
pub const PASSWORD_MAX_LEN: usize = 99;

/// Maximum length of a session token, in bytes.
pub const SESSION_TOKEN_MAX_LEN: usize = 31;

/// Day-ticks of inactivity after which an inactive user is evicted.
///
/// The comparison is strict: a record is evicted once its inactivity count
/// *exceeds* this value.
pub const INACTIVITY_THRESHOLD: u32 = 5;

/// Number of validation checks a session survives before expiring.
///
/// With the default of 1, the first [`validate_and_tick`] call on a fresh
/// session reports it still valid and the second reports the expiry
/// transition.
///
/// [`validate_and_tick`]: crate::session::SessionManager::validate_and_tick
pub const SESSION_IDLE_LIMIT: u32 = 1;

/// Duplicate merging runs on day counters divisible by this period.
pub const MERGE_PERIOD: u32 = 4;

/// Compaction runs on day counters divisible by this period.
pub const COMPACT_PERIOD: u32 = 8;

/// Upper bound on a structurally valid user id (exclusive lower bound is 0).
pub const USER_ID_SANITY_MAX: u32 = 10_000;

/// Upper bound on a structurally valid inactivity count.
pub const INACTIVITY_SANITY_MAX: u32 = 1_000;
