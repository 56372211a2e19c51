use crate::adapters::fs::reader::read_document;
use crate::domain::ports::StyleSource;
use crate::domain::style::StyleConfiguration;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

/// Style documents on disk, layered in order over the built-in style.
#[derive(Debug, Clone, Default)]
pub struct FileStyleSource {
    paths: Vec<PathBuf>,
}

impl FileStyleSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl StyleSource for FileStyleSource {
    fn load(&self) -> Result<StyleConfiguration> {
        let documents = self
            .paths
            .iter()
            .map(|path| {
                debug!(path = %path.display(), "loading style document");
                read_document(path)
            })
            .collect::<Result<Vec<_>>>()?;

        StyleConfiguration::from_layers(documents.as_slice()).with_context(|| {
            let names: Vec<String> = self.paths.iter().map(|p| p.display().to_string()).collect();
            format!("Failed to load style from [{}]", names.join(", "))
        })
    }
}
