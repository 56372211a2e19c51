use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::ports::ArtifactFilter;

/// Scopes in descending priority, used to pick the effective scope of a node.
const SCOPE_PRIORITY: [&str; 5] = ["compile", "provided", "system", "runtime", "test"];

/// Raw artifact as handed over by the project model or the dependency resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Artifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

impl Artifact {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            scopes: Vec::new(),
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// `groupId:artifactId:version` coordinates, the form filter patterns match against.
    pub fn coordinates(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Identity of a node: equal keys always map to the same render id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactKey {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

/// A graph node for one distinct artifact.
///
/// Equality and hashing only look at `(group_id, artifact_id, version)`; the
/// scope information is display data.
#[derive(Debug, Clone)]
pub struct ArtifactNode {
    key: ArtifactKey,
    scopes: Vec<String>,
    effective_scope: Option<String>,
}

impl ArtifactNode {
    pub fn new(artifact: &Artifact) -> Self {
        Self {
            key: ArtifactKey {
                group_id: artifact.group_id.clone(),
                artifact_id: artifact.artifact_id.clone(),
                version: artifact.version.clone(),
            },
            scopes: artifact.scopes.clone(),
            effective_scope: effective_scope(&artifact.scopes),
        }
    }

    /// Resolves an artifact through the filter. A rejected artifact has no node.
    pub fn filtered(artifact: &Artifact, filter: &dyn ArtifactFilter) -> Option<Self> {
        if filter.include(artifact) {
            Some(Self::new(artifact))
        } else {
            tracing::trace!(artifact = %artifact.coordinates(), "artifact filtered out");
            None
        }
    }

    pub fn key(&self) -> &ArtifactKey {
        &self.key
    }

    pub fn group_id(&self) -> &str {
        &self.key.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.key.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.key.version
    }

    /// Scopes joined for display, e.g. `compile, test`.
    pub fn scope_label(&self) -> String {
        self.scopes.join(", ")
    }

    pub fn effective_scope(&self) -> Option<&str> {
        self.effective_scope.as_deref()
    }
}

impl PartialEq for ArtifactNode {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ArtifactNode {}

impl Hash for ArtifactNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

fn effective_scope(scopes: &[String]) -> Option<String> {
    SCOPE_PRIORITY
        .iter()
        .find(|candidate| scopes.iter().any(|s| s == *candidate))
        .map(|s| s.to_string())
        .or_else(|| scopes.first().cloned())
}
