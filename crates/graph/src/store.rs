use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;
use docreads_core::{EdgeId, EdgeType, EntityType, NodeId};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub entity_type: EntityType,
    pub key: String,
    /// Set on the queried document and the excluded visitor.
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub edge_type: EdgeType,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_by_type: HashMap<String, usize>,
    pub edges_by_type: HashMap<String, usize>,
}

/// Directed property graph. Nodes and edges iterate in insertion order.
#[derive(Debug, Default)]
pub struct GraphStore {
    pub nodes: IndexMap<NodeId, Node>,
    key_index: HashMap<(EntityType, String), NodeId>,
    edge_dedup: HashMap<(NodeId, NodeId, EdgeType), EdgeId>,
    pub edges: IndexMap<EdgeId, Edge>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert_node(&mut self, entity_type: EntityType, key: &str) -> NodeId {
        let lookup = (entity_type, key.to_string());
        if let Some(&existing_id) = self.key_index.get(&lookup) {
            return existing_id;
        }

        let id = Uuid::new_v4();
        let node = Node {
            id,
            entity_type,
            key: key.to_string(),
            highlighted: false,
        };

        self.nodes.insert(id, node);
        self.key_index.insert(lookup, id);
        id
    }

    pub fn find_node(&self, entity_type: EntityType, key: &str) -> Option<&Node> {
        self.key_index
            .get(&(entity_type, key.to_string()))
            .and_then(|id| self.nodes.get(id))
    }

    /// Mark a node for distinct rendering, creating it if needed.
    pub fn highlight(&mut self, entity_type: EntityType, key: &str) -> NodeId {
        let id = self.upsert_node(entity_type, key);
        if let Some(node) = self.nodes.get_mut(&id) {
            node.highlighted = true;
        }
        id
    }

    /// Add an edge, or bump the weight of an existing one by `weight`.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        edge_type: EdgeType,
        weight: f64,
    ) -> EdgeId {
        let dedup_key = (source, target, edge_type);
        if let Some(&existing_id) = self.edge_dedup.get(&dedup_key) {
            if let Some(edge) = self.edges.get_mut(&existing_id) {
                edge.weight += weight;
            }
            return existing_id;
        }

        let id = Uuid::new_v4();
        let edge = Edge {
            id,
            source,
            target,
            edge_type,
            weight,
        };

        self.edges.insert(id, edge);
        self.edge_dedup.insert(dedup_key, id);
        id
    }

    pub fn stats(&self) -> GraphStats {
        let mut nodes_by_type: HashMap<String, usize> = HashMap::new();
        for node in self.nodes.values() {
            *nodes_by_type.entry(node.entity_type.to_string()).or_default() += 1;
        }

        let mut edges_by_type: HashMap<String, usize> = HashMap::new();
        for edge in self.edges.values() {
            *edges_by_type.entry(edge.edge_type.to_string()).or_default() += 1;
        }

        GraphStats {
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            nodes_by_type,
            edges_by_type,
        }
    }
}
