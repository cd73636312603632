//! Corpus directory scanning.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{BuildError, Result};

/// Lists the `.txt` files directly under `corpus_dir`, sorted by filename
/// ascending. This order is load-bearing: doc ids are assigned by position
/// in this list.
pub fn list_documents(corpus_dir: &Path) -> Result<Vec<PathBuf>> {
    if !corpus_dir.is_dir() {
        return Err(BuildError::CorpusNotFound {
            path: corpus_dir.to_path_buf(),
        }
        .into());
    }

    // §4.4 step 1 is an unconditional directory listing, not a VCS-aware
    // walk: disable every one of WalkBuilder's default ignore behaviors
    // (.gitignore, .ignore, global/exclude files, hidden-file skipping) so a
    // corpus file never vanishes from doc_id_map without the diagnostic the
    // genuinely-unreadable-file path already gives it.
    let mut files: Vec<PathBuf> = WalkBuilder::new(corpus_dir)
        .max_depth(Some(1))
        .standard_filters(false)
        .build()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == "txt")
        })
        .collect();

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use tempfile::tempdir;

    #[test]
    fn lists_txt_files_sorted_by_name() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        std::fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let files = list_documents(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        check!(names == vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn missing_corpus_dir_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        check!(list_documents(&missing).is_err());
    }

    #[test]
    fn gitignored_and_hidden_txt_files_are_still_listed() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(".gitignore"), "secret.txt\n").unwrap();
        std::fs::write(dir.path().join("secret.txt"), "s").unwrap();
        std::fs::write(dir.path().join(".hidden.txt"), "h").unwrap();
        std::fs::write(dir.path().join("visible.txt"), "v").unwrap();

        let files = list_documents(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        check!(names == vec![".hidden.txt", "secret.txt", "visible.txt"]);
    }
}
