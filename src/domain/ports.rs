use crate::domain::node::Artifact;
use crate::domain::style::StyleConfiguration;
use crate::domain::tree::DependencyNode;
use anyhow::Result;

/// Handle of a project inside a [`ProjectSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(pub usize);

/// Artifact inclusion predicate (implemented by Infrastructure)
pub trait ArtifactFilter {
    fn include(&self, artifact: &Artifact) -> bool;
}

impl<F> ArtifactFilter for F
where
    F: Fn(&Artifact) -> bool,
{
    fn include(&self, artifact: &Artifact) -> bool {
        self(artifact)
    }
}

/// Project/module model of the host build system
pub trait ProjectSource {
    /// All sub-modules of `root`, collected transitively, in build order.
    fn collected_projects(&self, root: ProjectId) -> Vec<ProjectId>;

    fn artifact(&self, project: ProjectId) -> &Artifact;

    fn parent(&self, project: ProjectId) -> Option<ProjectId>;
}

/// Dependency resolver port
pub trait DependencyResolver {
    /// Builds the dependency tree of one project. May fail, e.g. on broken build metadata.
    fn resolve(&self, project: ProjectId, filter: &dyn ArtifactFilter) -> Result<DependencyNode>;
}

/// Style configuration source port
pub trait StyleSource {
    fn load(&self) -> Result<StyleConfiguration>;
}
