use std::collections::BTreeSet;

use crate::domain::node::Artifact;
use crate::domain::ports::ArtifactFilter;

/// Keeps artifacts having at least one of the configured scopes.
///
/// Artifacts without any scope (projects and modules) always pass, so the
/// module hierarchy survives a scope restriction.
#[derive(Debug, Clone, Default)]
pub struct ScopeFilter {
    scopes: BTreeSet<String>,
}

impl ScopeFilter {
    pub fn new<S: AsRef<str>>(scopes: &[S]) -> Self {
        Self {
            scopes: scopes.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

impl ArtifactFilter for ScopeFilter {
    fn include(&self, artifact: &Artifact) -> bool {
        self.scopes.is_empty()
            || artifact.scopes.is_empty()
            || artifact.scopes.iter().any(|s| self.scopes.contains(s))
    }
}
