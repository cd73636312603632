//! Shared test fixtures for integration tests.

use corpus_search::IndexService;
use rstest::fixture;
use tempfile::TempDir;

/// A corpus directory plus a fresh data directory to build an index into,
/// both cleaned up automatically when dropped.
#[allow(dead_code)]
pub struct Corpus {
    pub corpus_dir: TempDir,
    pub data_dir: TempDir,
}

impl Corpus {
    #[allow(dead_code)]
    pub fn write(&self, filename: &str, contents: &str) {
        std::fs::write(self.corpus_dir.path().join(filename), contents).unwrap();
    }
}

/// The three-document corpus used throughout §8's concrete scenarios:
/// `a.txt = "cats and dogs"`, `b.txt = "the cat ran"`, `c.txt = "dogs run fast"`.
#[fixture]
pub fn three_doc_corpus() -> Corpus {
    let corpus = Corpus {
        corpus_dir: tempfile::tempdir().unwrap(),
        data_dir: tempfile::tempdir().unwrap(),
    };
    corpus.write("a.txt", "cats and dogs");
    corpus.write("b.txt", "the cat ran");
    corpus.write("c.txt", "dogs run fast");
    corpus
}

/// Builds `three_doc_corpus` into a ready-to-query [`IndexService`].
#[allow(dead_code)]
pub async fn build_service(corpus: &Corpus) -> IndexService {
    let service = IndexService::new();
    service
        .rebuild(corpus.corpus_dir.path(), corpus.data_dir.path())
        .await
        .unwrap();
    service
}
