use crate::domain::edge::NodeResolution;
use crate::domain::node::{ArtifactKey, ArtifactNode};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Render id of a node: 1-based, assigned in first-seen order.
pub type RenderId = usize;

/// Dependency graph - nodes deduplicated by artifact identity, edges kept in insertion order.
///
/// petgraph hands out node and edge indices sequentially and never reorders
/// them while nothing is removed, so iteration order is insertion order.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// The directed graph of artifacts and resolution-tagged edges
    pub graph: DiGraph<ArtifactNode, NodeResolution>,

    /// Mapping from artifact identity to node index
    key_to_node: HashMap<ArtifactKey, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing node for this identity or registers a new one.
    pub fn get_or_create_node(&mut self, node: ArtifactNode) -> NodeIndex {
        if let Some(&idx) = self.key_to_node.get(node.key()) {
            return idx;
        }
        let key = node.key().clone();
        let idx = self.graph.add_node(node);
        self.key_to_node.insert(key, idx);
        idx
    }

    /// Stores an edge unless one of its endpoints was filtered out.
    ///
    /// Returns `false` when the edge was dropped; endpoints are only registered
    /// when both are present.
    pub fn add_edge(
        &mut self,
        parent: Option<ArtifactNode>,
        child: Option<ArtifactNode>,
        resolution: NodeResolution,
    ) -> bool {
        let (Some(parent), Some(child)) = (parent, child) else {
            return false;
        };
        let source = self.get_or_create_node(parent);
        let target = self.get_or_create_node(child);
        self.graph.add_edge(source, target, resolution);
        true
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn render_id(&self, key: &ArtifactKey) -> Option<RenderId> {
        self.key_to_node.get(key).map(|idx| idx.index() + 1)
    }

    /// Nodes with their render ids, in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = (RenderId, &ArtifactNode)> {
        self.graph
            .node_indices()
            .map(move |idx| (idx.index() + 1, &self.graph[idx]))
    }

    /// Edges as `(parent id, child id, resolution)`, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (RenderId, RenderId, NodeResolution)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index() + 1, e.target().index() + 1, *e.weight()))
    }
}
