//! User directory: account records and their bounded store.
//!
//! The module is split into:
//! - `types`: the [`UserRecord`] data entity and its sanity oracle
//! - `store`: the [`UserStore`] bounded slot array
//! - `errors`: structured [`UserError`] types

mod errors;
mod store;
mod types;

pub use errors::UserError;
pub use store::UserStore;
pub use types::UserRecord;

pub(crate) use types::truncate_to;
