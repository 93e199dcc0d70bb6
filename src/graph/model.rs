use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Group label used when a node row has no `group` column and for nodes
/// synthesized from edge endpoints.
pub const DEFAULT_GROUP: &str = "default";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub group: String,
}

impl Node {
    pub fn new(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
        }
    }
}

/// A directed relationship between two node names. `value` is an opaque
/// payload and is never parsed as a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub value: String,
}

impl Edge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            value: value.into(),
        }
    }

    /// Endpoints in compensation order: source before target.
    pub fn endpoints(&self) -> [&str; 2] {
        [&self.source, &self.target]
    }
}

/// The `{nodes, edges}` document handed to visualization front ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    /// Edge endpoints with no matching node, in first-seen order.
    ///
    /// Always empty for a document produced by `normalize`.
    pub fn unresolved_names(&self) -> Vec<&str> {
        let known: FxHashSet<&str> = self.nodes.iter().map(|n| n.name.as_str()).collect();
        let mut seen = FxHashSet::default();
        self.edges
            .iter()
            .flat_map(Edge::endpoints)
            .filter(|name| !known.contains(name) && seen.insert(*name))
            .collect()
    }
}
