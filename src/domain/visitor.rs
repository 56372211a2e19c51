use crate::domain::builder::GraphBuilder;
use crate::domain::node::ArtifactNode;
use crate::domain::ports::ArtifactFilter;
use crate::domain::tree::DependencyNode;

/// Walks one dependency tree and feeds one edge per parent → child relation
/// into a [`GraphBuilder`].
///
/// Pre-order, children left to right. The edge kind is the child's
/// resolution state as reported by the resolver. Pruned markers (children
/// without an artifact) are skipped together with their subtree, and so are
/// the subtrees of artifacts rejected by the filter.
pub struct DependencyTreeVisitor<'a> {
    builder: &'a mut GraphBuilder,
    filter: &'a dyn ArtifactFilter,
}

impl<'a> DependencyTreeVisitor<'a> {
    pub fn new(builder: &'a mut GraphBuilder, filter: &'a dyn ArtifactFilter) -> Self {
        Self { builder, filter }
    }

    /// Visits the tree below `root`. Returns the number of edges offered to the builder.
    pub fn visit(&mut self, root: &DependencyNode) -> usize {
        let Some(artifact) = root.artifact() else {
            return 0;
        };
        let Some(root_node) = ArtifactNode::filtered(artifact, self.filter) else {
            return 0;
        };

        let mut offered = 0;
        // Explicit work stack of (parent, child); children pushed in reverse to keep pre-order.
        let mut stack: Vec<(ArtifactNode, &DependencyNode)> = root
            .children()
            .iter()
            .rev()
            .map(|child| (root_node.clone(), child))
            .collect();

        while let Some((parent, child)) = stack.pop() {
            let Some(artifact) = child.artifact() else {
                continue;
            };
            let child_node = ArtifactNode::filtered(artifact, self.filter);
            offered += 1;
            self.builder
                .add_edge(Some(parent), child_node.clone(), child.resolution());

            if let Some(child_node) = child_node {
                stack.extend(
                    child
                        .children()
                        .iter()
                        .rev()
                        .map(|grandchild| (child_node.clone(), grandchild)),
                );
            }
        }
        offered
    }
}
