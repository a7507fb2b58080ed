//! Session subsystem: token lifecycle over a bounded session table.
//!
//! The module is split into:
//! - `types`: the [`SessionRecord`] data entity
//! - `manager`: the [`SessionManager`] bounded table and its operations
//! - `errors`: structured [`SessionError`] types

mod errors;
mod manager;
mod types;

pub use errors::SessionError;
pub use manager::SessionManager;
pub use types::SessionRecord;
