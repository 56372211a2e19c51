use crate::domain::builder::GraphBuilder;
use crate::domain::edge::NodeResolution;
use crate::domain::node::ArtifactNode;
use crate::domain::ports::{ArtifactFilter, DependencyResolver, ProjectId, ProjectSource};
use crate::domain::visitor::DependencyTreeVisitor;
use anyhow::{Result, bail};
use std::collections::HashSet;
use tracing::{debug, info};

/// Builds a DOT graph from projects. Implementations differ in which projects they walk.
pub trait GraphFactory {
    /// Adds the edges reachable from `root` to `builder`.
    fn build_graph(&self, root: ProjectId, builder: &mut GraphBuilder) -> Result<()>;

    fn create_graph(&self, root: ProjectId, mut builder: GraphBuilder) -> Result<String> {
        self.build_graph(root, &mut builder)?;
        Ok(builder.render())
    }
}

/// Graph of a single project's dependency tree, without module edges.
pub struct SimpleGraphFactory<'a> {
    resolver: &'a dyn DependencyResolver,
    filter: &'a dyn ArtifactFilter,
}

impl<'a> SimpleGraphFactory<'a> {
    pub fn new(resolver: &'a dyn DependencyResolver, filter: &'a dyn ArtifactFilter) -> Self {
        Self { resolver, filter }
    }
}

impl GraphFactory for SimpleGraphFactory<'_> {
    fn build_graph(&self, root: ProjectId, builder: &mut GraphBuilder) -> Result<()> {
        let tree = self.resolver.resolve(root, self.filter)?;
        let edges = DependencyTreeVisitor::new(builder, self.filter).visit(&tree);
        debug!(edges, "dependency tree visited");
        Ok(())
    }
}

/// Module aggregator: one graph for a root project and all of its sub-modules.
///
/// Module containment edges are emitted first for the whole hierarchy, then
/// the dependency tree of every sub-module that passes the filter is merged
/// into the same builder.
pub struct AggregatingGraphFactory<'a> {
    projects: &'a dyn ProjectSource,
    resolver: &'a dyn DependencyResolver,
    filter: &'a dyn ArtifactFilter,
}

impl<'a> AggregatingGraphFactory<'a> {
    pub fn new(
        projects: &'a dyn ProjectSource,
        resolver: &'a dyn DependencyResolver,
        filter: &'a dyn ArtifactFilter,
    ) -> Self {
        Self {
            projects,
            resolver,
            filter,
        }
    }

    /// Adds module and dependency edges for `root` to `builder`.
    ///
    /// A resolution failure of any sub-module aborts the whole build and is
    /// returned as reported by the resolver.
    pub fn aggregate(&self, root: ProjectId, builder: &mut GraphBuilder) -> Result<()> {
        let collected = self.projects.collected_projects(root);
        info!(modules = collected.len(), "aggregating module graph");

        self.build_module_tree(root, &collected, builder)?;

        for &project in &collected {
            let artifact = self.projects.artifact(project);
            if !self.filter.include(artifact) {
                debug!(
                    module = %artifact.coordinates(),
                    "module filtered out, skipping dependencies"
                );
                continue;
            }

            let tree = self.resolver.resolve(project, self.filter)?;
            let edges = DependencyTreeVisitor::new(builder, self.filter).visit(&tree);
            debug!(module = %artifact.coordinates(), edges, "dependency tree merged");
        }
        Ok(())
    }

    /// Emits `parent -> child` for every step of each module's parent chain,
    /// stopping once the root project has been reached. A chain that revisits
    /// a project is an error.
    fn build_module_tree(
        &self,
        root: ProjectId,
        collected: &[ProjectId],
        builder: &mut GraphBuilder,
    ) -> Result<()> {
        for &module in collected {
            let mut child = module;
            let mut parent = self.projects.parent(module);
            let mut seen = HashSet::from([module]);

            while let Some(current) = parent {
                if !seen.insert(current) {
                    bail!(
                        "Parent cycle involving module {}",
                        self.projects.artifact(current).coordinates()
                    );
                }
                let parent_node = self.filtered_node(current);
                let child_node = self.filtered_node(child);
                builder.add_edge(parent_node, child_node, NodeResolution::Included);

                if current == root {
                    break;
                }
                child = current;
                parent = self.projects.parent(current);
            }
        }
        Ok(())
    }

    fn filtered_node(&self, project: ProjectId) -> Option<ArtifactNode> {
        ArtifactNode::filtered(self.projects.artifact(project), self.filter)
    }
}

impl GraphFactory for AggregatingGraphFactory<'_> {
    fn build_graph(&self, root: ProjectId, builder: &mut GraphBuilder) -> Result<()> {
        self.aggregate(root, builder)
    }
}
