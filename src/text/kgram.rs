//! K-gram generation for fuzzy term matching.

use ahash::AHashSet;

const K: usize = 3;

/// Returns the set of length-3 substrings of `$term$`.
///
/// A term shorter than `K` once padded (i.e. `len(term) < 1`) yields no
/// k-grams.
pub fn kgrams(term: &str) -> AHashSet<String> {
    let padded: Vec<char> = format!("${term}$").chars().collect();
    if padded.len() < K {
        return AHashSet::default();
    }
    padded
        .windows(K)
        .map(|w| w.iter().collect::<String>())
        .collect()
}
