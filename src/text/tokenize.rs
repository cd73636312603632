//! Word tokenization and lemmatization.

use std::sync::LazyLock;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use super::stopwords::is_stop_word;
use super::CleanedTerms;

/// Matches runs of alphanumeric Unicode code points, the same class of
/// "words" a standard English word tokenizer would hand back.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{Alphabetic}\p{Number}]+").unwrap());

/// Splits raw text into surface tokens, discarding whitespace and punctuation.
pub fn word_tokenize(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// A pluggable term-normalization step, applied after stop-word filtering.
///
/// The engine ships [`PorterLemmatizer`] as its default implementation; a
/// caller with its own WordNet binding can supply a different one, provided
/// it is used identically at index time and query time.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, token: &str) -> String;
}

/// Porter-stemmer backed lemmatizer (see crate docs for why this substitutes
/// for a WordNet noun lemmatizer).
pub struct PorterLemmatizer {
    stemmer: Stemmer,
}

impl Default for PorterLemmatizer {
    fn default() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Lemmatizer for PorterLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        self.stemmer.stem(token).into_owned()
    }
}

/// Runs the full normalization pipeline: tokenize, filter to alphabetic-only,
/// lowercase, drop stop words, lemmatize, then append adjacent bigrams.
///
/// This is the one function indexing and query processing both call —
/// keeping it single-sourced is what keeps the two sides in sync.
pub fn normalize(text: &str, lemmatizer: &dyn Lemmatizer) -> CleanedTerms {
    let unigrams: Vec<String> = word_tokenize(text)
        .into_iter()
        .filter(|tok| tok.chars().all(char::is_alphabetic))
        .map(str::to_lowercase)
        .filter(|tok| !is_stop_word(tok))
        .map(|tok| lemmatizer.lemmatize(&tok))
        .collect();

    let bigrams: Vec<String> = unigrams
        .windows(2)
        .map(|pair| format!("{}_{}", pair[0], pair[1]))
        .collect();

    let unigram_count = unigrams.len();
    let mut terms = unigrams;
    terms.extend(bigrams);

    CleanedTerms {
        terms,
        unigram_count,
    }
}
