//! Artifact filters: wildcard coordinate patterns and scopes.

pub mod pattern;
pub mod scope;

use crate::domain::node::Artifact;
use crate::domain::ports::ArtifactFilter;

/// Includes an artifact only if every inner filter includes it.
#[derive(Default)]
pub struct AllOf {
    filters: Vec<Box<dyn ArtifactFilter>>,
}

impl AllOf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filter: impl ArtifactFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }
}

impl ArtifactFilter for AllOf {
    fn include(&self, artifact: &Artifact) -> bool {
        self.filters.iter().all(|f| f.include(artifact))
    }
}
