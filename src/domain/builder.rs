use crate::domain::edge::NodeResolution;
use crate::domain::graph::DependencyGraph;
use crate::domain::node::ArtifactNode;
use crate::domain::style::StyleConfiguration;
use crate::domain::style::attributes::escape_quoted;
use std::fmt::Write;

/// Graph builder - accumulates artifact edges and renders them as DOT.
///
/// One builder is shared by every tree walk of a single graph build; node ids
/// and statement order follow insertion order only.
pub struct GraphBuilder {
    graph_name: String,
    style: StyleConfiguration,
    graph: DependencyGraph,
}

impl GraphBuilder {
    pub fn new(graph_name: impl Into<String>, style: StyleConfiguration) -> Self {
        Self {
            graph_name: graph_name.into(),
            style,
            graph: DependencyGraph::new(),
        }
    }

    /// Adds `parent -> child`. An absent endpoint (filtered artifact) makes this a no-op.
    pub fn add_edge(
        &mut self,
        parent: Option<ArtifactNode>,
        child: Option<ArtifactNode>,
        resolution: NodeResolution,
    ) -> &mut Self {
        self.graph.add_edge(parent, child, resolution);
        self
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Renders the graph as DOT text.
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(256 + 128 * self.graph.node_count());
        let _ = writeln!(output, "digraph \"{}\" {{", escape_quoted(&self.graph_name));
        let _ = writeln!(output, "  node {}", self.style.configure_default_node());
        let _ = writeln!(output, "  edge {}", self.style.configure_default_edge());

        output.push_str("\n  // Node Definitions:\n");
        for (id, node) in self.graph.nodes() {
            let _ = writeln!(output, "  \"{}\"{}", id, self.style.configure_node(node));
        }

        output.push_str("\n  // Edge Definitions:\n");
        for (from, to, resolution) in self.graph.edges() {
            let _ = writeln!(
                output,
                "  \"{}\" -> \"{}\"{}",
                from,
                to,
                self.style.configure_edge(resolution)
            );
        }

        output.push_str("}\n");
        output
    }
}
