use crate::adapters::fs::style::FileStyleSource;
use crate::app::dto::GraphRequest;
use crate::app::engine::GraphEngine;
use crate::domain::ports::StyleSource;
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

/// Build the requested graph and write the DOT text to `output` or stdout.
pub fn write_graph(request: &GraphRequest, output: Option<&Path>) -> Result<()> {
    let response = GraphEngine::run(request)?;
    tracing::info!(
        nodes = response.node_count,
        edges = response.edge_count,
        "graph rendered"
    );
    emit(&response.dot, output)
}

/// Print the effective style: the built-in defaults with `style_files` layered on top.
///
/// Without files this is the default template users can copy and edit.
pub fn write_style(style_files: &[PathBuf], output: Option<&Path>) -> Result<()> {
    let style = FileStyleSource::new(style_files.to_vec()).load()?;
    let mut json = style.to_json()?;
    json.push('\n');
    emit(&json, output)
}

fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            tracing::info!(path = %path.display(), "output written");
        }
        None => print!("{content}"),
    }
    Ok(())
}
