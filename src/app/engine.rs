use crate::adapters::filter::AllOf;
use crate::adapters::filter::pattern::PatternFilter;
use crate::adapters::filter::scope::ScopeFilter;
use crate::adapters::fs::style::FileStyleSource;
use crate::adapters::json::project::JsonProjectModel;
use crate::app::dto::{FilterOptions, GraphMode, GraphRequest, GraphResponse};
use crate::domain::aggregator::{AggregatingGraphFactory, GraphFactory, SimpleGraphFactory};
use crate::domain::builder::GraphBuilder;
use crate::domain::ports::{
    ArtifactFilter, DependencyResolver, ProjectId, ProjectSource, StyleSource,
};
use crate::domain::style::StyleConfiguration;
use anyhow::{Result, anyhow};
use tracing::info;

/// Runs one graph request end to end: style, filter, project model, factory.
///
/// The style is loaded and validated before any project is touched.
pub struct GraphEngine {
    style: StyleConfiguration,
    filter: Box<dyn ArtifactFilter>,
}

impl GraphEngine {
    pub fn new(style: StyleConfiguration, filter: Box<dyn ArtifactFilter>) -> Self {
        Self { style, filter }
    }

    pub fn from_request(request: &GraphRequest) -> Result<Self> {
        let style = FileStyleSource::new(request.style_files.clone()).load()?;
        let filter = build_filter(&request.filter)?;
        Ok(Self::new(style, Box::new(filter)))
    }

    /// Loads the project model named by the request and renders its graph.
    pub fn run(request: &GraphRequest) -> Result<GraphResponse> {
        let engine = Self::from_request(request)?;
        let model = JsonProjectModel::load(&request.project_file)?;
        let root = match &request.project {
            Some(id) => model
                .project(id)
                .ok_or_else(|| anyhow!("Project not found: {id}"))?,
            None => model.root(),
        };
        engine.render(&model, &model, root, request.mode, &request.graph_name)
    }

    pub fn render(
        &self,
        projects: &dyn ProjectSource,
        resolver: &dyn DependencyResolver,
        root: ProjectId,
        mode: GraphMode,
        graph_name: &str,
    ) -> Result<GraphResponse> {
        info!(
            project = %projects.artifact(root).coordinates(),
            ?mode,
            "building dependency graph"
        );
        let mut builder = GraphBuilder::new(graph_name, self.style.clone());
        match mode {
            GraphMode::Single => SimpleGraphFactory::new(resolver, self.filter.as_ref())
                .build_graph(root, &mut builder)?,
            GraphMode::Aggregate => {
                AggregatingGraphFactory::new(projects, resolver, self.filter.as_ref())
                    .build_graph(root, &mut builder)?
            }
        }

        let graph = builder.graph();
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "dependency graph built"
        );
        Ok(GraphResponse {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            dot: builder.render(),
        })
    }
}

pub fn build_filter(options: &FilterOptions) -> Result<AllOf> {
    Ok(AllOf::new()
        .with(PatternFilter::new(
            options.includes.as_slice(),
            options.excludes.as_slice(),
        )?)
        .with(ScopeFilter::new(options.scopes.as_slice())))
}
