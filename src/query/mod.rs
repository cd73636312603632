//! Query-time processing: expansion (F), ranking (G), and spelling
//! correction (H).

mod corrector;
mod processor;
mod ranker;

pub use corrector::correct;
pub use processor::{expand_query, Toggles, WeightedTerm};
pub use ranker::{rank, ScoredDoc};
