//! JSON project model: module hierarchy plus a pre-resolved dependency tree
//! per project. Stands in for the host build system when running the CLI.
//!
//! ```json
//! {
//!   "root": "parent",
//!   "projects": [
//!     { "id": "parent", "group-id": "com.example", "artifact-id": "parent", "version": "1.0",
//!       "modules": ["core"] },
//!     { "id": "core", "group-id": "com.example", "artifact-id": "core", "version": "1.0",
//!       "parent": "parent",
//!       "dependencies": {
//!         "group-id": "com.example", "artifact-id": "core", "version": "1.0",
//!         "children": [
//!           { "group-id": "org.slf4j", "artifact-id": "slf4j-api", "version": "2.0.9",
//!             "scopes": ["compile"] }
//!         ]
//!       } }
//!   ]
//! }
//! ```

use crate::adapters::fs::reader::read_document;
use crate::domain::edge::NodeResolution;
use crate::domain::node::Artifact;
use crate::domain::ports::{ArtifactFilter, DependencyResolver, ProjectId, ProjectSource};
use crate::domain::tree::DependencyNode;
use anyhow::{Context as _, Result, anyhow, bail};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ProjectModelDocument {
    root: String,
    projects: Vec<ProjectEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ProjectEntry {
    id: String,
    #[serde(flatten)]
    artifact: Artifact,
    #[serde(default)]
    parent: Option<String>,
    #[serde(default)]
    modules: Vec<String>,
    #[serde(default)]
    dependencies: Option<TreeEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct TreeEntry {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    #[serde(default)]
    scopes: Vec<String>,
    #[serde(default = "included")]
    resolution: NodeResolution,
    #[serde(default)]
    pruned: bool,
    #[serde(default)]
    children: Vec<TreeEntry>,
}

fn included() -> NodeResolution {
    NodeResolution::Included
}

impl TreeEntry {
    fn artifact(&self) -> Result<Artifact> {
        match (&self.group_id, &self.artifact_id, &self.version) {
            (Some(group_id), Some(artifact_id), Some(version)) => Ok(Artifact {
                group_id: group_id.clone(),
                artifact_id: artifact_id.clone(),
                version: version.clone(),
                scopes: self.scopes.clone(),
            }),
            _ => bail!(
                "Dependency node is missing group-id, artifact-id or version: {:?}:{:?}:{:?}",
                self.group_id,
                self.artifact_id,
                self.version
            ),
        }
    }

    /// Converts to a dependency tree, pruning children the filter rejects.
    fn to_tree(&self, filter: &dyn ArtifactFilter) -> Result<DependencyNode> {
        if self.pruned {
            return Ok(DependencyNode::pruned());
        }
        let mut node = DependencyNode::new(self.artifact()?, self.resolution);
        for child in &self.children {
            if !child.pruned && !filter.include(&child.artifact()?) {
                continue;
            }
            node = node.with_child(child.to_tree(filter)?);
        }
        Ok(node)
    }
}

#[derive(Debug)]
struct ProjectRecord {
    artifact: Artifact,
    parent: Option<ProjectId>,
    modules: Vec<ProjectId>,
    dependencies: Option<TreeEntry>,
}

/// Project model loaded from a JSON document.
#[derive(Debug)]
pub struct JsonProjectModel {
    root: ProjectId,
    projects: Vec<ProjectRecord>,
    ids: HashMap<String, ProjectId>,
}

impl JsonProjectModel {
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_document(path)?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid project model: {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let document: ProjectModelDocument =
            serde_json::from_str(content).context("Failed to parse project model JSON")?;

        let mut ids = HashMap::new();
        for (i, entry) in document.projects.iter().enumerate() {
            if ids.insert(entry.id.clone(), ProjectId(i)).is_some() {
                bail!("Duplicate project id: {}", entry.id);
            }
        }

        let lookup = |id: &str| {
            ids.get(id)
                .copied()
                .ok_or_else(|| anyhow!("Unknown project id: {id}"))
        };

        let names: Vec<String> = document.projects.iter().map(|e| e.id.clone()).collect();
        let mut projects = Vec::with_capacity(document.projects.len());
        for entry in document.projects {
            let parent = entry.parent.as_deref().map(lookup).transpose()?;
            let modules = entry
                .modules
                .iter()
                .map(|m| lookup(m))
                .collect::<Result<Vec<_>>>()?;
            projects.push(ProjectRecord {
                artifact: entry.artifact,
                parent,
                modules,
                dependencies: entry.dependencies,
            });
        }
        for (i, record) in projects.iter().enumerate() {
            let mut seen = HashSet::from([ProjectId(i)]);
            let mut parent = record.parent;
            while let Some(current) = parent {
                if !seen.insert(current) {
                    bail!("Parent cycle involving project {}", names[current.0]);
                }
                parent = projects[current.0].parent;
            }
        }
        let root = lookup(&document.root)?;

        Ok(Self {
            root,
            projects,
            ids,
        })
    }

    pub fn root(&self) -> ProjectId {
        self.root
    }

    pub fn project(&self, id: &str) -> Option<ProjectId> {
        self.ids.get(id).copied()
    }
}

impl ProjectSource for JsonProjectModel {
    /// Depth-first over `modules`, in declaration order; each project once.
    fn collected_projects(&self, root: ProjectId) -> Vec<ProjectId> {
        let mut collected = Vec::new();
        let mut seen = HashSet::from([root]);
        let mut stack: Vec<ProjectId> =
            self.projects[root.0].modules.iter().rev().copied().collect();

        while let Some(project) = stack.pop() {
            if !seen.insert(project) {
                continue;
            }
            collected.push(project);
            stack.extend(self.projects[project.0].modules.iter().rev().copied());
        }
        collected
    }

    fn artifact(&self, project: ProjectId) -> &Artifact {
        &self.projects[project.0].artifact
    }

    fn parent(&self, project: ProjectId) -> Option<ProjectId> {
        self.projects[project.0].parent
    }
}

impl DependencyResolver for JsonProjectModel {
    fn resolve(&self, project: ProjectId, filter: &dyn ArtifactFilter) -> Result<DependencyNode> {
        let record = &self.projects[project.0];
        let tree = record.dependencies.as_ref().ok_or_else(|| {
            anyhow!(
                "No dependency tree available for {}",
                record.artifact.coordinates()
            )
        })?;
        tree.to_tree(filter)
            .with_context(|| format!("Broken dependency tree of {}", record.artifact.coordinates()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = r#"{
        "root": "p",
        "projects": [
            { "id": "p", "group-id": "g", "artifact-id": "p", "version": "1",
              "modules": ["m1", "m3"] },
            { "id": "m1", "group-id": "g", "artifact-id": "m1", "version": "1", "parent": "p",
              "modules": ["m2"],
              "dependencies": { "group-id": "g", "artifact-id": "m1", "version": "1",
                "children": [
                  { "group-id": "x", "artifact-id": "lib", "version": "2", "scopes": ["compile"] },
                  { "group-id": "x", "artifact-id": "lib", "version": "1",
                    "resolution": "omitted-for-conflict" },
                  { "pruned": true }
                ] } },
            { "id": "m2", "group-id": "g", "artifact-id": "m2", "version": "1", "parent": "m1" },
            { "id": "m3", "group-id": "g", "artifact-id": "m3", "version": "1", "parent": "p" }
        ]
    }"#;

    fn include_all() -> impl Fn(&Artifact) -> bool {
        |_: &Artifact| true
    }

    #[test]
    fn collects_modules_depth_first() {
        let model = JsonProjectModel::from_json(MODEL).unwrap();
        let names: Vec<&str> = model
            .collected_projects(model.root())
            .into_iter()
            .map(|p| model.artifact(p).artifact_id.as_str())
            .collect();
        assert_eq!(names, ["m1", "m2", "m3"]);
        assert_eq!(model.parent(model.project("m2").unwrap()), model.project("m1"));
    }

    #[test]
    fn resolves_tree_with_states() {
        let model = JsonProjectModel::from_json(MODEL).unwrap();
        let tree = model
            .resolve(model.project("m1").unwrap(), &include_all())
            .unwrap();
        assert_eq!(tree.children().len(), 3);
        assert_eq!(
            tree.children()[1].resolution(),
            NodeResolution::OmittedForConflict
        );
        assert_eq!(tree.children()[0].artifact().unwrap().scopes, ["compile"]);
        assert!(tree.children()[2].artifact().is_none());
    }

    #[test]
    fn resolve_prunes_filtered_children() {
        let model = JsonProjectModel::from_json(MODEL).unwrap();
        let only_v2 = |a: &Artifact| a.group_id != "x" || a.version == "2";
        let tree = model.resolve(model.project("m1").unwrap(), &only_v2).unwrap();
        assert_eq!(tree.children().len(), 2);
    }

    #[test]
    fn missing_tree_is_a_resolution_failure() {
        let model = JsonProjectModel::from_json(MODEL).unwrap();
        let err = model
            .resolve(model.project("m2").unwrap(), &include_all())
            .unwrap_err();
        assert!(err.to_string().contains("No dependency tree"));
    }

    #[test]
    fn unknown_references_are_rejected() {
        let doc = r#"{"root": "p", "projects": [
            {"id": "p", "group-id": "g", "artifact-id": "p", "version": "1", "modules": ["nope"]}
        ]}"#;
        let err = JsonProjectModel::from_json(doc).unwrap_err();
        assert!(err.to_string().contains("Unknown project id: nope"));
    }

    #[test]
    fn parent_cycle_is_rejected() {
        let doc = r#"{"root": "p", "projects": [
            {"id": "p", "group-id": "g", "artifact-id": "p", "version": "1", "modules": ["a"]},
            {"id": "a", "group-id": "g", "artifact-id": "a", "version": "1", "parent": "b"},
            {"id": "b", "group-id": "g", "artifact-id": "b", "version": "1", "parent": "a"}
        ]}"#;
        let err = JsonProjectModel::from_json(doc).unwrap_err();
        assert!(err.to_string().contains("Parent cycle involving project"));
    }

    #[test]
    fn self_parent_is_rejected() {
        let doc = r#"{"root": "p", "projects": [
            {"id": "p", "group-id": "g", "artifact-id": "p", "version": "1", "parent": "p"}
        ]}"#;
        let err = JsonProjectModel::from_json(doc).unwrap_err();
        assert!(err.to_string().contains("Parent cycle involving project p"));
    }
}
