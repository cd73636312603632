//! Index Service (I): snapshot lifecycle, atomic load/publish, and
//! single-writer/many-reader rebuild coordination.
//!
//! Grounded in the teacher's `DocState` (worker.rs): an `RwLock` guards
//! only the published pointer, never the snapshot's contents, and a
//! `Mutex` serializes the one mutating operation (rebuild) so a second
//! concurrent rebuild fails fast instead of queuing or interleaving.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::config::Config;
use crate::error::{EngineError, QueryError, Result, ServiceError};
use crate::index::{build, DocId, Snapshot};
use crate::query::{expand_query, rank, Toggles};
use crate::text::{Lemmatizer, PorterLemmatizer};

/// One ranked hit returned to a search caller (§6.3's Query API contract).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub filename: String,
    pub score: f64,
}

/// Holds the currently published [`Snapshot`] (if any) behind a
/// single-writer, many-reader handle.
pub struct IndexService {
    snapshot: RwLock<Option<Arc<Snapshot>>>,
    rebuild_lock: Mutex<()>,
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl Default for IndexService {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexService {
    /// Starts in the "not ready" state: no snapshot loaded, every search
    /// rejected with [`QueryError::NotReady`].
    pub fn new() -> Self {
        Self::with_lemmatizer(Arc::new(PorterLemmatizer::default()))
    }

    /// Same as [`Self::new`], but with a caller-supplied lemmatizer — the
    /// seam §4.1a names for callers with their own NLP stack.
    pub fn with_lemmatizer(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        Self {
            snapshot: RwLock::new(None),
            rebuild_lock: Mutex::new(()),
            lemmatizer,
        }
    }

    /// Whether a snapshot has ever been published.
    pub async fn is_ready(&self) -> bool {
        self.snapshot.read().await.is_some()
    }

    /// Loads a snapshot from `data_dir` and publishes it, replacing any
    /// previously loaded snapshot atomically.
    pub async fn load(&self, data_dir: &Path) -> Result<()> {
        let snapshot = Snapshot::load(data_dir)?;
        tracing::info!(
            dir = %data_dir.display(),
            docs = snapshot.total_docs(),
            terms = snapshot.term_dictionary.len(),
            "loaded index snapshot"
        );
        *self.snapshot.write().await = Some(Arc::new(snapshot));
        Ok(())
    }

    /// Drives a full corpus rebuild (§4.4) and publishes the result,
    /// exactly like [`Self::load`]. A second call arriving while one is
    /// already in flight returns [`ServiceError::RebuildInProgress`]
    /// immediately; the in-flight rebuild is unaffected and the previously
    /// published snapshot keeps serving readers throughout.
    pub async fn rebuild(&self, corpus_dir: &Path, data_dir: &Path) -> Result<()> {
        let _guard = self
            .rebuild_lock
            .try_lock()
            .map_err(|_| EngineError::from(ServiceError::RebuildInProgress))?;

        let corpus_dir = corpus_dir.to_path_buf();
        let data_dir_owned = data_dir.to_path_buf();
        let lemmatizer = Arc::clone(&self.lemmatizer);

        let built = tokio::task::spawn_blocking(move || -> Result<Snapshot> {
            let snapshot = build(&corpus_dir, lemmatizer.as_ref())?;
            snapshot.save(&data_dir_owned)?;
            Ok(snapshot)
        })
        .await
        .map_err(|join_err| {
            EngineError::from(ServiceError::RebuildFailed {
                reason: "build task panicked".to_string(),
                source: anyhow::Error::new(join_err),
            })
        })?
        .map_err(|build_err| {
            EngineError::from(ServiceError::RebuildFailed {
                reason: "corpus build failed".to_string(),
                source: build_err,
            })
        })?;

        tracing::info!(
            dir = %data_dir.display(),
            docs = built.total_docs(),
            terms = built.term_dictionary.len(),
            "rebuilt and published index snapshot"
        );
        *self.snapshot.write().await = Some(Arc::new(built));
        Ok(())
    }

    /// Runs §4.6 then §4.7 against the currently published snapshot.
    ///
    /// A query that begins against snapshot S1 always finishes against S1,
    /// even if a concurrent `rebuild` publishes S2 before it returns: the
    /// `Arc` clone taken here is independent of whatever the write lock
    /// later replaces.
    pub async fn search(&self, query: &str, k: usize, toggles: Toggles) -> Result<Vec<SearchHit>> {
        if query.trim().is_empty() {
            return Err(EngineError::from(QueryError::EmptyQuery).into());
        }

        let snapshot = {
            let guard = self.snapshot.read().await;
            guard.as_ref().cloned()
        }
        .ok_or_else(|| EngineError::from(QueryError::NotReady))?;

        let k = Config::clamp_top_k(k);
        let expanded = expand_query(query, self.lemmatizer.as_ref(), &snapshot, toggles);
        let ranked = rank(&expanded, &snapshot, k);

        Ok(ranked
            .into_iter()
            .filter_map(|scored| {
                let path = snapshot.doc_id_map.get(&scored.doc_id)?;
                Some(SearchHit {
                    doc_id: scored.doc_id,
                    filename: basename(path),
                    score: scored.score,
                })
            })
            .collect())
    }
}

/// Basename of a (possibly Windows-style) path, per §6.3.
fn basename(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    normalized
        .rsplit('/')
        .next()
        .unwrap_or(&normalized)
        .to_string()
}
