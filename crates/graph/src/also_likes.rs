use docreads_core::{EdgeType, EntityType, ReadPair};
use tracing::debug;

use crate::store::GraphStore;

/// Assemble the visitor → document graph for a ranked also-likes result.
///
/// One `Read` edge per ranked pair, weighted by its count. The queried
/// document, and the excluded visitor when one is given, are highlighted
/// even if no ranked pair touches them.
pub fn build_also_likes_graph(
    document_id: &str,
    visitor_id: Option<&str>,
    ranked: &[(ReadPair, usize)],
) -> GraphStore {
    let mut graph = GraphStore::new();

    graph.highlight(EntityType::Document, document_id);
    if let Some(visitor) = visitor_id.filter(|v| !v.is_empty()) {
        graph.highlight(EntityType::Visitor, visitor);
    }

    for (pair, count) in ranked {
        let source = graph.upsert_node(EntityType::Visitor, &pair.visitor_id);
        let target = graph.upsert_node(EntityType::Document, &pair.document_id);
        graph.add_edge(source, target, EdgeType::Read, *count as f64);
    }

    debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "Also-likes graph built"
    );

    graph
}
