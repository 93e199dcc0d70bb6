//! Field coercion and node compensation.
//!
//! Coercion turns loosely-keyed CSV rows into typed [`Node`]/[`Edge`]
//! records, failing on the first row that lacks a mandatory column.
//! Compensation then appends a node for every edge endpoint that no node row
//! declared, so every edge in the resulting document resolves.

use rustc_hash::FxHashSet;

use crate::core::error::{ConvertError, RecordKind};
use crate::core::output::{cell_preview, name_list_preview};
use crate::core::telemetry::TRACING_TARGET_NORMALIZE;
use crate::graph::convert::ConvertOptions;
use crate::graph::loader::CsvRecord;
use crate::graph::model::{Edge, GraphDocument, Node};

fn required<'a>(
    record: &'a CsvRecord,
    kind: RecordKind,
    field: &'static str,
) -> Result<&'a str, ConvertError> {
    record.get(field).ok_or(ConvertError::MissingField {
        kind,
        row: record.row,
        field,
    })
}

/// `name` is mandatory; an absent `group` column becomes `default_group`.
/// A present-but-empty `group` cell stays empty.
pub fn coerce_nodes(records: &[CsvRecord], default_group: &str) -> Result<Vec<Node>, ConvertError> {
    records
        .iter()
        .map(|rec| {
            let name = required(rec, RecordKind::Node, "name")?;
            let group = rec.get("group").unwrap_or(default_group);
            Ok(Node::new(name, group))
        })
        .collect()
}

/// `source`, `target` and `value` are all mandatory.
pub fn coerce_edges(records: &[CsvRecord]) -> Result<Vec<Edge>, ConvertError> {
    records
        .iter()
        .map(|rec| {
            Ok(Edge::new(
                required(rec, RecordKind::Edge, "source")?,
                required(rec, RecordKind::Edge, "target")?,
                required(rec, RecordKind::Edge, "value")?,
            ))
        })
        .collect()
}

/// Appends a `default_group` node for each edge endpoint not yet known.
///
/// Scans edges in order, source before target; the first sighting of a name
/// wins. Declared nodes are never reordered or deduplicated, and edges are
/// left untouched.
pub fn compensate_nodes(mut nodes: Vec<Node>, edges: &[Edge], default_group: &str) -> Vec<Node> {
    let mut known: FxHashSet<String> = nodes.iter().map(|n| n.name.clone()).collect();
    let declared = nodes.len();

    for name in edges.iter().flat_map(Edge::endpoints) {
        if known.insert(name.to_string()) {
            tracing::debug!(
                target: TRACING_TARGET_NORMALIZE,
                name = %cell_preview(name, 80),
                "compensating missing node"
            );
            nodes.push(Node::new(name, default_group));
        }
    }

    let added = &nodes[declared..];
    if !added.is_empty() {
        tracing::info!(
            target: TRACING_TARGET_NORMALIZE,
            count = added.len(),
            names = %name_list_preview(added.iter().map(|n| n.name.as_str()), 5, 40),
            "synthesized nodes referenced only by edges"
        );
    }

    nodes
}

/// Coerces both row sets and closes the node set over the edges.
pub fn normalize(
    node_records: &[CsvRecord],
    edge_records: &[CsvRecord],
    options: &ConvertOptions,
) -> Result<GraphDocument, ConvertError> {
    let nodes = coerce_nodes(node_records, &options.default_group)?;
    let edges = coerce_edges(edge_records)?;
    let nodes = compensate_nodes(nodes, &edges, &options.default_group);

    let doc = GraphDocument { nodes, edges };
    debug_assert!(doc.unresolved_names().is_empty());
    Ok(doc)
}
