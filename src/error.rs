//! Centralized error handling with typed error enums.
//!
//! This module provides structured error types for the indexing and search
//! surface. Errors are designed to:
//! - Provide detailed context via Debug for logging (`{:?}`)
//! - Provide user-friendly messages via Display for CLI output (`{}`)
//! - Enable pattern matching for programmatic error handling
//!
//! # Error Hierarchy
//!
//! ```text
//! EngineError (top-level)
//! ├── Build(BuildError)     - Corpus scanning / indexing failures
//! ├── Load(LoadError)       - Snapshot persistence failures
//! ├── Query(QueryError)     - Search input errors
//! └── Service(ServiceError) - Index-service lifecycle errors
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for internal operations, with context added
/// via `.context()` / `.with_context()` as errors propagate. Functions
/// whose failure modes are part of the public contract return one of the
/// typed enums below instead, via the `#[from]` conversions on
/// [`EngineError`].
pub type Result<T> = anyhow::Result<T>;

/// Top-level error type for engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Corpus scanning or per-document indexing failed.
    #[error("{0}")]
    Build(#[from] BuildError),

    /// Snapshot persistence (save/load) failed.
    #[error("{0}")]
    Load(#[from] LoadError),

    /// The search request itself was malformed.
    #[error("{0}")]
    Query(#[from] QueryError),

    /// The index service could not satisfy the request given its current
    /// lifecycle state.
    #[error("{0}")]
    Service(#[from] ServiceError),
}

impl EngineError {
    /// Get optional help text for this error, to append to CLI output.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::Build(e) => e.help(),
            Self::Load(e) => e.help(),
            Self::Query(e) => e.help(),
            Self::Service(e) => e.help(),
        }
    }

    /// Get a user-friendly message with optional help text appended.
    pub fn user_message(&self) -> String {
        match self.help() {
            Some(help) => format!("{self}\n\n{help}"),
            None => self.to_string(),
        }
    }
}

/// Errors from scanning the corpus directory or reading a document.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The corpus directory does not exist or is not a directory.
    #[error("corpus directory not found: {}", path.display())]
    CorpusNotFound { path: PathBuf },
}

impl BuildError {
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::CorpusNotFound { .. } => {
                Some("Check that --corpus points at a directory containing .txt files.")
            }
        }
    }
}

/// Errors from persisting or loading the index snapshot.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A required artifact file is missing from the data directory.
    #[error("required index artifact '{artifact}' missing at {}", path.display())]
    ArtifactMissing { artifact: String, path: PathBuf },

    /// An artifact failed to deserialize.
    #[error("failed to decode index artifact '{artifact}': {reason}")]
    Decode { artifact: String, reason: String },

    /// An artifact failed to serialize.
    #[error("failed to encode index artifact '{artifact}': {reason}")]
    Encode { artifact: String, reason: String },

    /// Filesystem I/O failed while reading or writing an artifact.
    #[error("index artifact I/O failed: {reason}")]
    Io { reason: String },
}

impl LoadError {
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::ArtifactMissing { .. } => {
                Some("Run the build or rebuild subcommand to (re)create the data directory.")
            }
            Self::Decode { .. } | Self::Encode { .. } | Self::Io { .. } => {
                Some("The data directory may be from an incompatible version; try rebuilding it.")
            }
        }
    }
}

/// Errors surfaced directly to a search caller.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The query string was empty (after trimming).
    #[error("query must not be empty")]
    EmptyQuery,

    /// No snapshot has ever been published; the service cannot search yet.
    #[error("index not ready: no snapshot loaded")]
    NotReady,
}

impl QueryError {
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::EmptyQuery => Some("Provide one or more search terms."),
            Self::NotReady => Some("Run the build subcommand before searching."),
        }
    }
}

/// Errors from the index service's lifecycle operations (load/rebuild).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A rebuild was requested while another was already in flight.
    #[error("rebuild already in progress")]
    RebuildInProgress,

    /// A rebuild ran to completion but failed; the prior snapshot (if any)
    /// remains published.
    #[error("rebuild failed: {reason}")]
    RebuildFailed {
        reason: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ServiceError {
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::RebuildInProgress => Some("Wait for the in-flight rebuild to finish and retry."),
            Self::RebuildFailed { .. } => {
                Some("The previously published snapshot is still serving search requests.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn build_error_messages_name_the_path() {
        let err = BuildError::CorpusNotFound {
            path: PathBuf::from("/no/such/dir"),
        };
        check!(err.to_string().contains("/no/such/dir"));
    }

    #[test]
    fn load_error_messages_name_the_artifact() {
        let err = LoadError::ArtifactMissing {
            artifact: "postings".to_string(),
            path: PathBuf::from("/data/postings.postcard"),
        };
        check!(err.to_string().contains("postings"));
    }

    #[test]
    fn query_error_display() {
        check!(QueryError::EmptyQuery.to_string().contains("empty"));
        check!(QueryError::NotReady.to_string().contains("not ready"));
    }

    #[test]
    fn engine_error_user_message_appends_help() {
        let err: EngineError = QueryError::EmptyQuery.into();
        let msg = err.user_message();
        check!(msg.contains("query must not be empty"));
        check!(msg.contains("search terms"));
    }

    #[test]
    fn service_error_carries_source() {
        let err = ServiceError::RebuildFailed {
            reason: "disk full".to_string(),
            source: anyhow::anyhow!("ENOSPC"),
        };
        check!(err.to_string().contains("disk full"));
    }
}
