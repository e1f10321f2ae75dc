pub mod model;
pub mod store;

pub use model::{EntryKind, LogEntry, NewPunishment, NewRelease};
pub use store::{ModLogStore, StoreError};
