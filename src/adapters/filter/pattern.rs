use crate::domain::node::Artifact;
use crate::domain::ports::ArtifactFilter;
use anyhow::{Context as _, Result, bail};
use regex::Regex;

/// One `groupId[:artifactId[:version]]` pattern. `*` matches any run of
/// characters within a segment, omitted trailing segments match anything.
#[derive(Debug, Clone)]
pub struct ArtifactPattern {
    segments: Vec<Regex>,
}

impl ArtifactPattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        let parts: Vec<&str> = pattern.split(':').collect();
        if pattern.trim().is_empty() || parts.len() > 3 {
            bail!("Invalid artifact pattern '{pattern}', expected groupId[:artifactId[:version]]");
        }

        let segments = parts
            .iter()
            .map(|part| {
                let expr = format!("^{}$", regex::escape(part).replace(r"\*", ".*"));
                Regex::new(&expr).with_context(|| format!("Invalid artifact pattern '{pattern}'"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments })
    }

    pub fn matches(&self, artifact: &Artifact) -> bool {
        let values = [
            artifact.group_id.as_str(),
            artifact.artifact_id.as_str(),
            artifact.version.as_str(),
        ];
        self.segments
            .iter()
            .zip(values)
            .all(|(segment, value)| segment.is_match(value))
    }
}

/// Include/exclude filter over artifact coordinates.
///
/// No includes means everything is included; an exclude match always wins.
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    includes: Vec<ArtifactPattern>,
    excludes: Vec<ArtifactPattern>,
}

impl PatternFilter {
    pub fn new<S: AsRef<str>>(includes: &[S], excludes: &[S]) -> Result<Self> {
        let parse = |patterns: &[S]| {
            patterns
                .iter()
                .map(|p| ArtifactPattern::parse(p.as_ref()))
                .collect::<Result<Vec<_>>>()
        };
        Ok(Self {
            includes: parse(includes)?,
            excludes: parse(excludes)?,
        })
    }
}

impl ArtifactFilter for PatternFilter {
    fn include(&self, artifact: &Artifact) -> bool {
        let included =
            self.includes.is_empty() || self.includes.iter().any(|p| p.matches(artifact));
        included && !self.excludes.iter().any(|p| p.matches(artifact))
    }
}
