//! Query-time term expansion.
//!
//! Applies the same tokenize/filter/lowercase/stopword/lemmatize pipeline
//! as indexing (see [`crate::text::normalize`]), then optionally widens the
//! resulting lemma stream with spelling correction, synonym lookup, and
//! Soundex phonetic matches before handing a weighted term list to the
//! ranker.

use crate::index::Snapshot;
use crate::text::{is_stop_word, soundex, word_tokenize, Lemmatizer};

use super::correct;

/// Which expansion sources are active for a given query.
#[derive(Debug, Clone, Copy, Default)]
pub struct Toggles {
    pub spelling: bool,
    pub synonyms: bool,
    pub soundex: bool,
}

/// A term paired with its contribution weight. Every source in this crate
/// contributes uniform weight 1.0 (see DESIGN.md for the fractional-weight
/// variant this supersedes).
pub type WeightedTerm = (String, f32);

/// Runs §4.6's query processor: normalize the raw query the same way a
/// document is normalized, then expand it per `toggles`.
pub fn expand_query(
    query: &str,
    lemmatizer: &dyn Lemmatizer,
    snapshot: &Snapshot,
    toggles: Toggles,
) -> Vec<WeightedTerm> {
    // U_q, paired with the original surface token so soundex expansion can
    // see whether the query writer capitalized it.
    let lemmas_with_surface: Vec<(String, &str)> = word_tokenize(query)
        .into_iter()
        .filter(|tok| tok.chars().all(char::is_alphabetic))
        .filter(|tok| !is_stop_word(&tok.to_lowercase()))
        .map(|tok| (lemmatizer.lemmatize(&tok.to_lowercase()), tok))
        .collect();

    let bigrams: Vec<String> = lemmas_with_surface
        .windows(2)
        .map(|pair| format!("{}_{}", pair[0].0, pair[1].0))
        .collect();

    let mut expanded: Vec<WeightedTerm> = Vec::new();
    for (lemma, surface) in &lemmas_with_surface {
        let term = if toggles.spelling {
            correct(lemma, snapshot)
        } else {
            lemma.clone()
        };
        expanded.push((term.clone(), 1.0));

        if toggles.synonyms {
            if let Some(synonyms) = snapshot.synonym_map.get(&term) {
                expanded.extend(synonyms.iter().map(|s| (s.clone(), 1.0)));
            }
        }

        if toggles.soundex && surface.chars().next().is_some_and(char::is_uppercase) {
            let code = soundex(surface);
            if let Some(names) = snapshot.soundex_map.get(&code) {
                let lower_surface = surface.to_lowercase();
                expanded.extend(
                    names
                        .iter()
                        .filter(|name| **name != lower_surface)
                        .map(|name| (name.clone(), 1.0)),
                );
            }
        }
    }

    expanded.extend(bigrams.into_iter().map(|b| (b, 1.0)));
    expanded
}
