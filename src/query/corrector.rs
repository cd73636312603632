//! Spelling correction via Jaccard similarity over k-gram sets.

use crate::index::Snapshot;
use crate::text::kgrams;

/// Returns the best dictionary correction for `term`, or `term` itself
/// unchanged if it is already in the dictionary, too short to k-gram, or
/// has no k-gram-overlapping candidates.
///
/// Ties in Jaccard similarity break on ascending lexicographic order of the
/// candidate term, so results are reproducible across runs.
pub fn correct(term: &str, snapshot: &Snapshot) -> String {
    if snapshot.term_dictionary.contains(term) {
        return term.to_string();
    }

    let term_grams = kgrams(term);
    if term_grams.is_empty() {
        return term.to_string();
    }

    let mut candidates: Vec<&String> = Vec::new();
    let mut seen = ahash::AHashSet::default();
    for gram in &term_grams {
        if let Some(terms) = snapshot.kgram_index.get(gram) {
            for candidate in terms {
                if seen.insert(candidate.as_str()) {
                    candidates.push(candidate);
                }
            }
        }
    }
    if candidates.is_empty() {
        return term.to_string();
    }

    let mut best: Option<(&String, f64)> = None;
    for candidate in candidates {
        let candidate_grams = kgrams(candidate);
        let similarity = jaccard(&term_grams, &candidate_grams);
        best = Some(match best {
            None => (candidate, similarity),
            Some((best_term, best_sim)) => {
                if similarity > best_sim || (similarity == best_sim && candidate < best_term) {
                    (candidate, similarity)
                } else {
                    (best_term, best_sim)
                }
            }
        });
    }

    best.map(|(term, _)| term.clone()).unwrap_or_else(|| term.to_string())
}

fn jaccard(a: &ahash::AHashSet<String>, b: &ahash::AHashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
