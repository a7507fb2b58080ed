//! Core data types for the session subsystem

use serde::{Deserialize, Serialize};

/// One active login as held by a [`SessionManager`](crate::session::SessionManager).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Id of the owning user (foreign key into the user store)
    pub user_id: u32,

    /// Denormalized copy of the owning user's username
    pub username: String,

    /// Session token, unique among active sessions
    pub token: String,

    /// Number of validation checks survived so far.
    ///
    /// Advanced cooperatively by
    /// [`validate_and_tick`](crate::session::SessionManager::validate_and_tick),
    /// not by wall-clock time.
    pub idle_ticks: u32,

    /// Whether the session is still live
    pub is_active: bool,
}
