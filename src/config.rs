//! On-disk configuration for the CLI.
//!
//! Mirrors the teacher's pattern of parsing a project manifest with
//! `toml::from_str`: a `corpus-search.toml` file in the current directory
//! supplies defaults (corpus dir, data dir, default `k`, default expansion
//! toggles); CLI flags always take precedence over file values, which in
//! turn take precedence over the built-in defaults below.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default `k` used when a caller (CLI or service) doesn't specify one.
pub const DEFAULT_TOP_K: usize = 10;

/// Upper clamp on `k` (§6.3).
pub const MAX_TOP_K: usize = 1000;

/// Deserialized shape of `corpus-search.toml`. Every field is optional so a
/// partial file only overrides what it names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub corpus_dir: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub top_k: Option<usize>,
    #[serde(default)]
    pub spelling: bool,
    #[serde(default)]
    pub synonyms: bool,
    #[serde(default)]
    pub soundex: bool,
}

impl Config {
    /// Loads `corpus-search.toml` from `dir` if present; returns defaults
    /// (all `None`/`false`) otherwise. A malformed file is an error — a
    /// missing one is not.
    pub fn load(dir: &Path) -> crate::error::Result<Self> {
        let path = dir.join("corpus-search.toml");
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(toml::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Clamps a requested `k` into `[1, MAX_TOP_K]`.
    pub fn clamp_top_k(k: usize) -> usize {
        k.clamp(1, MAX_TOP_K)
    }

    /// Resolves a raw, caller-supplied `k` (e.g. a `--top-k` flag value) per
    /// §6.3: values less than 1 map to 1, values greater than 1000 map to
    /// 1000, and values that don't parse as an integer at all map to
    /// [`DEFAULT_TOP_K`].
    pub fn resolve_top_k(raw: &str) -> usize {
        match raw.trim().parse::<i64>() {
            Ok(k) => Self::clamp_top_k(k.max(0) as usize),
            Err(_) => DEFAULT_TOP_K,
        }
    }
}
