//! "Also likes": documents read by the other readers of a document.
//!
//! The pipeline is readers_of → co_read_events → ranking. Reads of the
//! queried document itself stay in the co-read set.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use docreads_core::{DocumentId, Event, ReadPair, VisitorId};
use docreads_store::{EventFilter, EventStore};

use crate::algorithms::top_k::top_k_by;

/// Ranking applied to the co-read events of a document.
///
/// Input is the filtered co-read events in store order; output is at most
/// `n` ranked (pair, count) entries.
pub trait LikesRanking {
    fn name(&self) -> &'static str;

    fn rank(&self, co_reads: &[&Event], n: usize) -> Vec<(ReadPair, usize)>;
}

/// Occurrences of each (visitor, document) pair; the `n` most frequent pairs
/// win, equal counts in first-seen order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairCount;

impl LikesRanking for PairCount {
    fn name(&self) -> &'static str {
        "pair-count"
    }

    fn rank(&self, co_reads: &[&Event], n: usize) -> Vec<(ReadPair, usize)> {
        let counts = count_pairs(co_reads);
        top_k_by(counts.into_iter().collect(), n, |(_, count)| *count)
    }
}

/// Ranks documents by how many distinct co-readers they have, then lists
/// the pairs behind them best document first, cut to `n` pairs. Each pair
/// carries its own occurrence count.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentPopularity;

impl LikesRanking for DocumentPopularity {
    fn name(&self) -> &'static str {
        "document-popularity"
    }

    fn rank(&self, co_reads: &[&Event], n: usize) -> Vec<(ReadPair, usize)> {
        let counts = count_pairs(co_reads);

        let mut readers: IndexMap<&str, usize> = IndexMap::new();
        for pair in counts.keys() {
            *readers.entry(pair.document_id.as_str()).or_insert(0) += 1;
        }
        let documents = readers.len();
        let ranked_docs = top_k_by(readers.into_iter().collect(), documents, |(_, r)| *r);

        ranked_docs
            .iter()
            .flat_map(|(doc, _)| {
                counts
                    .iter()
                    .filter(move |(pair, _)| pair.document_id == *doc)
                    .map(|(pair, count)| (pair.clone(), *count))
            })
            .take(n)
            .collect()
    }
}

fn count_pairs(events: &[&Event]) -> IndexMap<ReadPair, usize> {
    let mut counts: IndexMap<ReadPair, usize> = IndexMap::new();
    for event in events {
        *counts.entry(ReadPair::of(event)).or_insert(0) += 1;
    }
    counts
}

/// Distinct visitors with a `read` event on `document_id`, first-seen order.
pub fn readers_of(store: &EventStore, document_id: &str) -> Vec<VisitorId> {
    let readers: IndexSet<VisitorId> = store
        .scan(&EventFilter::new().document(document_id).reads())
        .into_iter()
        .map(|e| e.visitor_id.clone())
        .collect();
    readers.into_iter().collect()
}

/// `read` events by readers of `document_id`, minus those by `exclude`.
/// `None` or an empty id excludes nobody.
pub fn co_read_events<'a>(
    store: &'a EventStore,
    document_id: &str,
    exclude: Option<&str>,
) -> Vec<&'a Event> {
    let readers: HashSet<VisitorId> = readers_of(store, document_id).into_iter().collect();
    if readers.is_empty() {
        return Vec::new();
    }

    let filter = EventFilter::new()
        .reads()
        .visitor_in(readers)
        .excluding_visitor(exclude);
    store.scan(&filter)
}

/// Rank the co-reads of `document_id` with the given strategy.
pub fn top_likes_with(
    store: &EventStore,
    document_id: &str,
    exclude: Option<&str>,
    n: usize,
    ranking: &dyn LikesRanking,
) -> Vec<(ReadPair, usize)> {
    let co_reads = co_read_events(store, document_id, exclude);
    let ranked = ranking.rank(&co_reads, n);

    debug!(
        document = document_id,
        excluded = ?exclude,
        strategy = ranking.name(),
        co_reads = co_reads.len(),
        returned = ranked.len(),
        "Also-likes ranked"
    );

    ranked
}

/// The `n` most frequent (visitor, document) co-read pairs of `document_id`.
pub fn top_likes(
    store: &EventStore,
    document_id: &str,
    exclude: Option<&str>,
    n: usize,
) -> Vec<(ReadPair, usize)> {
    top_likes_with(store, document_id, exclude, n, &PairCount)
}

/// Documents among the ranked pairs, in rank order without repeats.
pub fn liked_documents(ranked: &[(ReadPair, usize)]) -> Vec<DocumentId> {
    let docs: IndexSet<&str> = ranked.iter().map(|(p, _)| p.document_id.as_str()).collect();
    docs.into_iter().map(str::to_string).collect()
}
