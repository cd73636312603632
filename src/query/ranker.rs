//! Cosine-similarity ranking under the lnc.ltc weighting scheme.

use ahash::AHashMap;

use crate::index::{DocId, Snapshot};

use super::WeightedTerm;

/// One scored document in a ranked result list.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDoc {
    pub doc_id: DocId,
    pub score: f64,
}

/// Scores every document reachable from `expanded` and returns the top `k`,
/// sorted by descending score then ascending doc_id.
///
/// Implements §4.7: `ltc` weighting on the query side (log-tf × idf, cosine
/// normalized), `lnc` weighting on the document side (log-tf only — no idf,
/// no normalization until the final cosine divide). This asymmetry is
/// intrinsic to the lnc.ltc scheme, not an oversight.
pub fn rank(expanded: &[WeightedTerm], snapshot: &Snapshot, k: usize) -> Vec<ScoredDoc> {
    let n = snapshot.total_docs() as f64;
    if n == 0.0 {
        return Vec::new();
    }

    let mut q_tf: AHashMap<&str, f64> = AHashMap::default();
    for (term, weight) in expanded {
        *q_tf.entry(term.as_str()).or_insert(0.0) += f64::from(*weight);
    }

    let mut q_vec: AHashMap<&str, f64> = AHashMap::default();
    for (term, tf) in &q_tf {
        let Some(&df) = snapshot.doc_freq.get(*term) else {
            continue;
        };
        if df == 0 {
            continue;
        }
        let idf = (n / f64::from(df)).log10();
        q_vec.insert(term, (1.0 + tf.log10()) * idf);
    }

    let query_norm = q_vec.values().map(|w| w * w).sum::<f64>().sqrt();
    let query_norm = if query_norm == 0.0 { 1.0 } else { query_norm };

    let mut raw_scores: AHashMap<DocId, f64> = AHashMap::default();
    for (term, w_q) in &q_vec {
        let Some(postings) = snapshot.postings.get(*term) else {
            continue;
        };
        for posting in postings {
            let w_d = 1.0 + f64::from(posting.tf).log10();
            *raw_scores.entry(posting.doc_id).or_insert(0.0) += w_d * w_q;
        }
    }

    let mut results: Vec<ScoredDoc> = raw_scores
        .into_iter()
        .filter_map(|(doc_id, raw)| {
            let doc_len = *snapshot.doc_len.get(&doc_id)?;
            if doc_len <= 0.0 {
                return None;
            }
            Some(ScoredDoc {
                doc_id,
                score: raw / (doc_len * query_norm),
            })
        })
        .collect();

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.doc_id.cmp(&b.doc_id))
    });
    results.truncate(k);
    results
}
