#![warn(unreachable_pub)]
#![warn(dead_code)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod query;
pub mod service;
pub mod text;
pub mod tracing;

// Re-export common types
pub use config::Config;
pub use error::{BuildError, EngineError, LoadError, QueryError, Result, ServiceError};
pub use index::{build, DocId, Posting, Snapshot};
pub use query::{correct, expand_query, rank, ScoredDoc, Toggles, WeightedTerm};
pub use service::{IndexService, SearchHit};
