//! Graphviz DOT rendering.

use std::fmt::Write;

use docreads_core::EntityType;

use crate::store::{GraphStore, Node};

const LABEL_CHARS: usize = 4;
const HIGHLIGHT_COLOR: &str = "#7fc97f";

/// Short label: the last four characters of the key.
fn short_label(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let start = chars.len().saturating_sub(LABEL_CHARS);
    chars[start..].iter().collect()
}

fn node_name(node: &Node) -> String {
    let prefix = match node.entity_type {
        EntityType::Visitor => "v",
        EntityType::Document => "d",
    };
    format!("{prefix}_{}", escape(&node.key))
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the graph as a directed DOT document. Node and edge order follow
/// insertion order, so the output is stable for a given input.
pub fn to_dot(graph: &GraphStore) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "digraph also_likes {{");
    let _ = writeln!(out, "  rankdir=TB;");

    for node in graph.nodes.values() {
        let shape = match node.entity_type {
            EntityType::Visitor => "box",
            EntityType::Document => "ellipse",
        };
        let style = if node.highlighted {
            format!(", style=filled, fillcolor=\"{HIGHLIGHT_COLOR}\"")
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "  \"{}\" [label=\"{}\", shape={shape}{style}];",
            node_name(node),
            escape(&short_label(&node.key)),
        );
    }

    for edge in graph.edges.values() {
        let (Some(source), Some(target)) = (graph.nodes.get(&edge.source), graph.nodes.get(&edge.target))
        else {
            continue;
        };
        let _ = writeln!(
            out,
            "  \"{}\" -> \"{}\" [weight={}];",
            node_name(source),
            node_name(target),
            edge.weight
        );
    }

    out.push_str("}\n");
    out
}
