//! Index construction and the persisted snapshot schema.

mod builder;
mod snapshot;

pub use builder::build;
pub use snapshot::{DocId, Posting, Snapshot};
