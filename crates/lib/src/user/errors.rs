//! Error types for the user directory
use thiserror::Error;

/// Errors that can occur during user store operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum UserError {
    /// A required field was absent or empty.
    #[error("Invalid input: required field '{field}' is empty")]
    InvalidInput {
        /// The name of the offending field
        field: &'static str,
    },

    /// The store's occupancy cursor has reached its fixed capacity.
    #[error("User store full: capacity {capacity} reached")]
    CapacityExceeded {
        /// The fixed capacity of the store
        capacity: usize,
    },

    /// Lookup by username found no record.
    #[error("User not found: {username}")]
    NotFound {
        /// The username that was not found
        username: String,
    },
}

impl UserError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, UserError::NotFound { .. })
    }

    /// Check if this error indicates invalid caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, UserError::InvalidInput { .. })
    }

    /// Check if this error indicates the store is full.
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, UserError::CapacityExceeded { .. })
    }
}

impl From<UserError> for crate::Error {
    fn from(err: UserError) -> Self {
        crate::Error::User(err)
    }
}
