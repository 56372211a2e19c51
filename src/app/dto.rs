use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphMode {
    /// Dependency tree of one project only
    #[default]
    Single,
    /// Module hierarchy plus the dependency trees of all sub-modules
    Aggregate,
}

#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// `groupId[:artifactId[:version]]` patterns; empty includes everything.
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    /// Dependency scopes to keep; empty keeps every scope.
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GraphRequest {
    pub project_file: PathBuf,
    /// Project id inside the model; the model's root when absent.
    pub project: Option<String>,
    pub mode: GraphMode,
    /// Style documents layered over the built-in style, in order.
    pub style_files: Vec<PathBuf>,
    pub filter: FilterOptions,
    pub graph_name: String,
}

#[derive(Debug, Clone)]
pub struct GraphResponse {
    pub dot: String,
    pub node_count: usize,
    pub edge_count: usize,
}
