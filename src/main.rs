use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use depgraph::app::dto::{FilterOptions, GraphMode, GraphRequest};
use depgraph::cli;

#[derive(Parser, Debug)]
#[command(
    name = "depgraph",
    about = "Render dependency trees of a multi-module build as a Graphviz DOT graph",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dependency graph of a single project
    Graph(GraphArgs),
    /// Module hierarchy plus the dependencies of every sub-module
    Aggregate(GraphArgs),
    /// Print the effective style configuration (the default template without --style)
    Style {
        /// Style documents layered over the built-in style (repeatable)
        #[arg(long = "style", value_name = "FILE")]
        styles: Vec<PathBuf>,

        /// Output file path (writes to file instead of stdout)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct GraphArgs {
    /// JSON project model describing modules and their resolved dependency trees
    #[arg(value_name = "PROJECT_FILE")]
    project_file: PathBuf,

    /// Project id to start from (defaults to the model's root)
    #[arg(short = 'p', long = "project")]
    project: Option<String>,

    /// Include pattern groupId[:artifactId[:version]], `*` wildcards (repeatable)
    #[arg(long = "include", value_name = "PATTERN")]
    includes: Vec<String>,

    /// Exclude pattern groupId[:artifactId[:version]], `*` wildcards (repeatable)
    #[arg(long = "exclude", value_name = "PATTERN")]
    excludes: Vec<String>,

    /// Dependency scope to keep (repeatable)
    #[arg(long = "scope", value_name = "SCOPE")]
    scopes: Vec<String>,

    /// Style documents layered over the built-in style (repeatable)
    #[arg(long = "style", value_name = "FILE")]
    styles: Vec<PathBuf>,

    /// Name of the DOT graph
    #[arg(long = "graph-name", default_value = "G")]
    graph_name: String,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
}

impl GraphArgs {
    fn into_request(self, mode: GraphMode) -> (GraphRequest, Option<PathBuf>) {
        let request = GraphRequest {
            project_file: self.project_file,
            project: self.project,
            mode,
            style_files: self.styles,
            filter: FilterOptions {
                includes: self.includes,
                excludes: self.excludes,
                scopes: self.scopes,
            },
            graph_name: self.graph_name,
        };
        (request, self.output)
    }
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let args = Cli::parse();
    match args.command {
        Command::Graph(graph) => {
            let (request, output) = graph.into_request(GraphMode::Single);
            cli::write_graph(&request, output.as_deref())
        }
        Command::Aggregate(graph) => {
            let (request, output) = graph.into_request(GraphMode::Aggregate);
            cli::write_graph(&request, output.as_deref())
        }
        Command::Style { styles, output } => cli::write_style(&styles, output.as_deref()),
    }
}
