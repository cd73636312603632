//! The persisted index schema and its load/save operations.

use std::collections::HashMap;
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, Result};

/// Document identifier. Assigned sequentially from 1 in ascending
/// lexicographic order of filename.
pub type DocId = u32;

/// One occurrence record for a term in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub tf: u32,
    pub positions: Vec<u32>,
}

/// The complete set of index artifacts, loaded and swapped as one atomic
/// unit. All lookups during query processing and ranking go through this
/// type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub doc_id_map: HashMap<DocId, String>,
    pub postings: AHashMap<String, Vec<Posting>>,
    pub doc_freq: AHashMap<String, u32>,
    pub doc_len: HashMap<DocId, f64>,
    pub term_dictionary: AHashSet<String>,
    pub soundex_map: AHashMap<String, AHashSet<String>>,
    pub kgram_index: AHashMap<String, AHashSet<String>>,
    pub synonym_map: AHashMap<String, Vec<String>>,
}

const ARTIFACT_NAMES: &[&str] = &[
    "doc_id_map",
    "postings",
    "doc_freq",
    "doc_len",
    "term_dictionary",
    "soundex_map",
    "kgram_index",
];

impl Snapshot {
    /// Number of documents with a recorded length — the `N` used in idf.
    pub fn total_docs(&self) -> usize {
        self.doc_len.len()
    }

    /// Whether the core artifacts required to serve search are present.
    pub fn is_ready(&self) -> bool {
        !self.doc_id_map.is_empty() && !self.doc_len.is_empty()
    }

    /// Persist all artifacts to `dir`, one postcard file per artifact. The
    /// synonym map is never written here — it is supplied externally as a
    /// JSON file and only ever read (see [`Snapshot::load`]).
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)
            .map_err(|e| LoadError::Io { reason: e.to_string() })?;

        write_artifact(dir, "doc_id_map", &self.doc_id_map)?;
        write_artifact(dir, "postings", &self.postings)?;
        write_artifact(dir, "doc_freq", &self.doc_freq)?;
        write_artifact(dir, "doc_len", &self.doc_len)?;
        write_artifact(dir, "term_dictionary", &self.term_dictionary)?;
        write_artifact(dir, "soundex_map", &self.soundex_map)?;
        write_artifact(dir, "kgram_index", &self.kgram_index)?;
        Ok(())
    }

    /// Load a snapshot from `dir`. Missing optional artifacts (soundex_map,
    /// kgram_index) default to empty and simply disable the corresponding
    /// expansion mode. The synonym map is read from `dir/synonym_map.json`
    /// if present, defaulting to empty otherwise.
    pub fn load(dir: &Path) -> Result<Self> {
        let doc_id_map = read_required_artifact(dir, "doc_id_map")?;
        let postings = read_required_artifact(dir, "postings")?;
        let doc_freq = read_required_artifact(dir, "doc_freq")?;
        let doc_len = read_required_artifact(dir, "doc_len")?;
        let term_dictionary = read_required_artifact(dir, "term_dictionary")?;
        let soundex_map = read_optional_artifact(dir, "soundex_map");
        let kgram_index = read_optional_artifact(dir, "kgram_index");
        let synonym_map = read_synonym_map(dir);

        Ok(Self {
            doc_id_map,
            postings,
            doc_freq,
            doc_len,
            term_dictionary,
            soundex_map,
            kgram_index,
            synonym_map,
        })
    }
}

fn artifact_path(dir: &Path, name: &str) -> std::path::PathBuf {
    debug_assert!(ARTIFACT_NAMES.contains(&name));
    dir.join(format!("{name}.postcard"))
}

fn write_artifact<T: Serialize>(dir: &Path, name: &str, value: &T) -> Result<()> {
    let path = artifact_path(dir, name);
    let bytes = postcard::to_allocvec(value).map_err(|e| LoadError::Encode {
        artifact: name.to_string(),
        reason: e.to_string(),
    })?;
    std::fs::write(&path, bytes).map_err(|e| LoadError::Io { reason: e.to_string() })?;
    Ok(())
}

fn read_required_artifact<T: for<'de> Deserialize<'de>>(dir: &Path, name: &str) -> Result<T> {
    let path = artifact_path(dir, name);
    let bytes = std::fs::read(&path).map_err(|_| LoadError::ArtifactMissing {
        artifact: name.to_string(),
        path: path.clone(),
    })?;
    postcard::from_bytes(&bytes)
        .map_err(|e| {
            LoadError::Decode {
                artifact: name.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
}

fn read_optional_artifact<T: for<'de> Deserialize<'de> + Default>(dir: &Path, name: &str) -> T {
    let path = artifact_path(dir, name);
    std::fs::read(&path)
        .ok()
        .and_then(|bytes| postcard::from_bytes(&bytes).ok())
        .unwrap_or_default()
}

fn read_synonym_map(dir: &Path) -> AHashMap<String, Vec<String>> {
    let path = dir.join("synonym_map.json");
    std::fs::read_to_string(&path)
        .ok()
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use tempfile::tempdir;

    fn sample() -> Snapshot {
        let mut snapshot = Snapshot::default();
        snapshot.doc_id_map.insert(1, "a.txt".to_string());
        snapshot.doc_len.insert(1, 1.41);
        snapshot.doc_freq.insert("cat".to_string(), 1);
        snapshot.term_dictionary.insert("cat".to_string());
        snapshot.postings.insert(
            "cat".to_string(),
            vec![Posting {
                doc_id: 1,
                tf: 1,
                positions: vec![0],
            }],
        );
        snapshot
    }

    #[test]
    fn save_then_load_round_trips_core_artifacts() {
        let dir = tempdir().unwrap();
        let snapshot = sample();
        snapshot.save(dir.path()).unwrap();

        let loaded = Snapshot::load(dir.path()).unwrap();
        check!(loaded.doc_id_map == snapshot.doc_id_map);
        check!(loaded.doc_freq == snapshot.doc_freq);
        check!(loaded.postings == snapshot.postings);
        check!(loaded.is_ready());
    }

    #[test]
    fn missing_optional_artifacts_default_empty() {
        let dir = tempdir().unwrap();
        let snapshot = sample();
        snapshot.save(dir.path()).unwrap();

        let loaded = Snapshot::load(dir.path()).unwrap();
        check!(loaded.soundex_map.is_empty());
        check!(loaded.kgram_index.is_empty());
        check!(loaded.synonym_map.is_empty());
    }

    #[test]
    fn loading_from_empty_dir_fails_on_missing_core_artifact() {
        let dir = tempdir().unwrap();
        check!(Snapshot::load(dir.path()).is_err());
    }

    #[test]
    fn synonym_map_loaded_from_external_json() {
        let dir = tempdir().unwrap();
        sample().save(dir.path()).unwrap();
        std::fs::write(
            dir.path().join("synonym_map.json"),
            r#"{"happy": ["glad", "joyful"]}"#,
        )
        .unwrap();

        let loaded = Snapshot::load(dir.path()).unwrap();
        check!(loaded.synonym_map.get("happy").unwrap() == &vec!["glad".to_string(), "joyful".to_string()]);
    }
}
