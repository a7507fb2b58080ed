//! Core data types for the user directory

use serde::{Deserialize, Serialize};

use crate::constants::{
    EMAIL_MAX_LEN, INACTIVITY_SANITY_MAX, PASSWORD_MAX_LEN, USER_ID_SANITY_MAX, USERNAME_MAX_LEN,
};
use crate::user::errors::UserError;

/// One user account as stored in a [`UserStore`](crate::user::UserStore).
///
/// All string fields are bounded: constructors truncate over-long input
/// rather than rejecting it. The username is used for login and is expected
/// to be unique; duplicates are tolerated at insert time and resolved later
/// by the maintenance merge pass.
///
/// The password is an opaque bounded string, stored and compared as-is.
/// Credential hygiene (hashing, verification) is explicitly out of scope.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique username (login identifier)
    pub username: String,

    /// Contact email
    pub email: String,

    /// Opaque stored password (no hashing, by policy)
    pub password: String,

    /// Numeric id, assigned by the store at insertion (1-based, monotonic
    /// per store lifetime). Zero means not yet inserted.
    pub id: u32,

    /// Days since last login
    pub inactivity_count: u32,

    /// Account status
    pub is_active: bool,

    /// Token of the user's current session, empty when no session.
    ///
    /// Mirrors the [`SessionRecord`](crate::session::SessionRecord) held by
    /// the session manager; the two copies are kept in step by the session
    /// manager's own operations.
    pub session_token: String,
}

impl UserRecord {
    /// Create a new account record.
    ///
    /// All three strings are required: an empty username, email, or password
    /// is rejected with [`UserError::InvalidInput`]. Strings longer than
    /// their field bound are silently truncated, never rejected.
    ///
    /// `id_hint` is accepted for callers that track their own numbering, but
    /// the store overwrites it at insertion; pass 0 when there is no hint.
    pub fn new(username: &str, email: &str, id_hint: u32, password: &str) -> crate::Result<Self> {
        if username.is_empty() {
            return Err(UserError::InvalidInput { field: "username" }.into());
        }
        if email.is_empty() {
            return Err(UserError::InvalidInput { field: "email" }.into());
        }
        if password.is_empty() {
            return Err(UserError::InvalidInput { field: "password" }.into());
        }

        Ok(Self {
            username: truncate_to(username, USERNAME_MAX_LEN),
            email: truncate_to(email, EMAIL_MAX_LEN),
            password: truncate_to(password, PASSWORD_MAX_LEN),
            id: id_hint,
            inactivity_count: 0,
            is_active: true,
            session_token: String::new(),
        })
    }

    /// Structural sanity check used by the maintenance scheduler.
    ///
    /// A record is sound iff its id is in (0, 10000] and its inactivity
    /// count is at most 1000. Records failing this check are treated as
    /// corrupt and silently evicted.
    pub fn is_valid(&self) -> bool {
        self.id > 0
            && self.id <= USER_ID_SANITY_MAX
            && self.inactivity_count <= INACTIVITY_SANITY_MAX
    }

    /// Whether `other` denotes the same account: username, email, and
    /// password all byte-equal. Used by duplicate merging.
    pub(crate) fn same_identity(&self, other: &Self) -> bool {
        self.username == other.username
            && self.email == other.email
            && self.password == other.password
    }
}

/// Truncate `s` to at most `max` bytes, backing off to a char boundary.
pub(crate) fn truncate_to(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_string()
}
