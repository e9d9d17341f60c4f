//! Immutable data types for pull operations.
//!
//! [`PullOptions`] is produced once by [`crate::build`] and only read
//! afterwards, so it can be shared across threads without locking.

pub mod options;
pub mod set;

pub use options::{ProgressFn, PullOptions};
pub use set::OrderedSet;
