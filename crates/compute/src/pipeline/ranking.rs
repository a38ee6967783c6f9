use tracing::debug;

use docreads_core::VisitorId;
use docreads_store::EventStore;

use crate::algorithms::top_k::top_k_by_f64;

/// Total read time per visitor, in first-encounter order.
pub fn read_time_by_visitor(store: &EventStore) -> Vec<(VisitorId, f64)> {
    store
        .group_by(|e| e.visitor_id.clone())
        .into_iter()
        .map(|(visitor, events)| (visitor, events.iter().map(|e| e.read_time).sum()))
        .collect()
}

/// The `n` visitors with the largest total read time, descending.
/// Equal totals keep the order in which visitors were first seen.
pub fn top_readers(store: &EventStore, n: usize) -> Vec<(VisitorId, f64)> {
    let totals = read_time_by_visitor(store);
    let visitors = totals.len();
    let top = top_k_by_f64(totals, n, |(_, total)| *total);

    debug!(visitors, returned = top.len(), "Top readers ranked");
    top
}
