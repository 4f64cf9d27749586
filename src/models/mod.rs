//! Shared types used across all modules.
//!
//! User records and the paginated listing payload. The fetcher, the
//! CSV writer and the mock dispatcher all speak these types rather than
//! reaching into each other's internals.

pub mod page;
pub mod user;

pub use page::{PagePayload, Support};
pub use user::UserRecord;
