//!
//! Roster: a bounded in-memory user directory with session lifecycle and
//! daily maintenance.
//!
//! ## Core Concepts
//!
//! * **Records (`user::UserRecord`, `session::SessionRecord`)**: the data
//!   entities — one account, one active login.
//! * **Stores (`user::UserStore`, `session::SessionManager`)**:
//!   fixed-capacity slot arrays with explicit tombstones. Removal leaves a
//!   hole; scans skip holes; the user store's holes are eliminated by
//!   periodic compaction, the session table's never are.
//! * **Maintenance (`maintenance::MaintenanceScheduler`)**: the daily-tick
//!   driver that ages users, evicts the long-inactive, expires idle
//!   sessions, merges duplicate accounts, and compacts.
//! * **Instance (`instance::Instance`)**: the application context owning
//!   both stores, the scheduler, and the clock — the surface a host calls.
//! * **Clock (`clock::Clock`)**: time provider abstraction; session tokens
//!   embed a timestamp, and tests swap in a deterministic clock.
//!
//! The model is single-threaded and synchronous with a trusted caller:
//! every operation is a direct in-memory mutation that completes before
//! returning.

pub mod clock;
pub mod constants;
pub mod instance;
pub mod maintenance;
pub mod session;
pub mod user;

// Re-export the main types for easier access.
pub use clock::{Clock, FixedClock, SystemClock};
pub use instance::Instance;
pub use maintenance::MaintenanceScheduler;
pub use session::{SessionManager, SessionRecord};
pub use user::{UserRecord, UserStore};

/// Result type used throughout the roster library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the roster library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured user store errors from the user module
    #[error(transparent)]
    User(user::UserError),

    /// Structured session errors from the session module
    #[error(transparent)]
    Session(session::SessionError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::User(_) => "user",
            Error::Session(_) => "session",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates invalid caller input.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_invalid_input(),
            Error::Session(session_err) => session_err.is_invalid_input(),
        }
    }

    /// Check if this error indicates a store hit its fixed capacity.
    pub fn is_capacity_exceeded(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_capacity_exceeded(),
            Error::Session(session_err) => session_err.is_capacity_exceeded(),
        }
    }
}
