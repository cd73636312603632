//! Text normalization pipeline shared by indexing and query processing.
//!
//! Both sides of the engine must agree on tokenization, stop-word filtering,
//! lemmatization, and bigram construction bit-for-bit, or postings built at
//! index time become unreachable at query time. This module is the single
//! place that pipeline lives.

mod kgram;
mod soundex;
mod stopwords;
mod tokenize;

pub use kgram::kgrams;
pub use soundex::soundex;
pub use stopwords::is_stop_word;
pub use tokenize::{normalize, word_tokenize, Lemmatizer, PorterLemmatizer};

/// A cleaned, ordered term stream: unigram lemmas followed by their adjacent
/// bigrams (`U ++ B`). Positions recorded against postings are indices into
/// this combined stream.
pub struct CleanedTerms {
    /// `U ++ B` in emission order.
    pub terms: Vec<String>,
    /// Index at which the bigram section starts (== `len(U)`).
    pub unigram_count: usize,
}

impl CleanedTerms {
    pub fn unigrams(&self) -> &[String] {
        &self.terms[..self.unigram_count]
    }

    pub fn bigrams(&self) -> &[String] {
        &self.terms[self.unigram_count..]
    }
}
