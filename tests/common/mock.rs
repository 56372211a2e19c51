//! Mock implementations for integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use anyhow::{Result, anyhow};
use depgraph::domain::edge::NodeResolution;
use depgraph::domain::node::Artifact;
use depgraph::domain::ports::{ArtifactFilter, DependencyResolver, ProjectId, ProjectSource};
use depgraph::domain::tree::DependencyNode;

/// In-memory project model and resolver.
#[derive(Default)]
pub struct MockProjects {
    artifacts: Vec<Artifact>,
    parents: Vec<Option<ProjectId>>,
    collected: HashMap<ProjectId, Vec<ProjectId>>,
    trees: HashMap<ProjectId, DependencyNode>,
    failing: HashSet<ProjectId>,
    resolved: RefCell<Vec<ProjectId>>,
}

impl MockProjects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_project(&mut self, artifact_id: &str, parent: Option<ProjectId>) -> ProjectId {
        let id = ProjectId(self.artifacts.len());
        self.artifacts
            .push(Artifact::new("com.example", artifact_id, "1.0"));
        self.parents.push(parent);
        id
    }

    pub fn set_parent(&mut self, project: ProjectId, parent: Option<ProjectId>) {
        self.parents[project.0] = parent;
    }

    pub fn set_collected(&mut self, root: ProjectId, modules: Vec<ProjectId>) {
        self.collected.insert(root, modules);
    }

    pub fn set_tree(&mut self, project: ProjectId, tree: DependencyNode) {
        self.trees.insert(project, tree);
    }

    pub fn fail_resolution(&mut self, project: ProjectId) {
        self.failing.insert(project);
    }

    /// Projects whose dependency tree was requested, in call order.
    pub fn resolved(&self) -> Vec<ProjectId> {
        self.resolved.borrow().clone()
    }
}

impl ProjectSource for MockProjects {
    fn collected_projects(&self, root: ProjectId) -> Vec<ProjectId> {
        self.collected.get(&root).cloned().unwrap_or_default()
    }

    fn artifact(&self, project: ProjectId) -> &Artifact {
        &self.artifacts[project.0]
    }

    fn parent(&self, project: ProjectId) -> Option<ProjectId> {
        self.parents[project.0]
    }
}

impl DependencyResolver for MockProjects {
    fn resolve(&self, project: ProjectId, _filter: &dyn ArtifactFilter) -> Result<DependencyNode> {
        self.resolved.borrow_mut().push(project);
        if self.failing.contains(&project) {
            return Err(anyhow!("malformed build metadata for project {}", project.0));
        }
        Ok(self
            .trees
            .get(&project)
            .cloned()
            .unwrap_or_else(|| {
                DependencyNode::new(self.artifacts[project.0].clone(), NodeResolution::Included)
            }))
    }
}

/// Filter rejecting the given artifact ids.
pub struct RejectArtifacts(pub Vec<&'static str>);

impl ArtifactFilter for RejectArtifacts {
    fn include(&self, artifact: &Artifact) -> bool {
        !self.0.contains(&artifact.artifact_id.as_str())
    }
}

pub fn include_all() -> impl Fn(&Artifact) -> bool {
    |_: &Artifact| true
}
