//! Read-only view of a dependency tree produced by a [`DependencyResolver`].
//!
//! [`DependencyResolver`]: crate::domain::ports::DependencyResolver

use crate::domain::edge::NodeResolution;
use crate::domain::node::Artifact;

/// One node of a resolved dependency tree.
///
/// The resolution state describes the relation to the parent node and is
/// decided by the resolver. A node without an artifact is a pruned or cyclic
/// marker.
#[derive(Debug, Clone)]
pub struct DependencyNode {
    artifact: Option<Artifact>,
    resolution: NodeResolution,
    children: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn new(artifact: Artifact, resolution: NodeResolution) -> Self {
        Self {
            artifact: Some(artifact),
            resolution,
            children: Vec::new(),
        }
    }

    pub fn pruned() -> Self {
        Self {
            artifact: None,
            resolution: NodeResolution::Included,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: DependencyNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    pub fn resolution(&self) -> NodeResolution {
        self.resolution
    }

    pub fn children(&self) -> &[DependencyNode] {
        &self.children
    }
}
