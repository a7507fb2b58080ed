//! Error types for the session subsystem
use thiserror::Error;

/// Errors that can occur during session operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SessionError {
    /// The owning user has an empty username and cannot hold a session.
    #[error("Invalid user for session: empty username")]
    InvalidUser,

    /// The session table's append cursor has reached its fixed capacity.
    ///
    /// The original system aborted the process here; callers that want that
    /// escalation can still do so, but the store itself only refuses.
    #[error("Session table full: capacity {capacity} reached")]
    CapacityExceeded {
        /// The fixed capacity of the session table
        capacity: usize,
    },
}

impl SessionError {
    /// Check if this error indicates invalid caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SessionError::InvalidUser)
    }

    /// Check if this error indicates the session table is full.
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, SessionError::CapacityExceeded { .. })
    }
}

impl From<SessionError> for crate::Error {
    fn from(err: SessionError) -> Self {
        crate::Error::Session(err)
    }
}
