use anyhow::{Context, Result};
use std::path::Path;

/// Reads a UTF-8 document (style or project model) from disk.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
