use indexmap::IndexMap;

use crate::algorithms::top_k::top_k_by;

/// Frequency of each distinct label, most frequent first.
///
/// Ties keep the order in which labels were first seen.
pub fn value_counts<I, S>(labels: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for label in labels {
        *counts.entry(label.into()).or_insert(0) += 1;
    }
    let total = counts.len();
    top_k_by(counts.into_iter().collect(), total, |(_, count)| *count)
}
