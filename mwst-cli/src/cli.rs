//! Command-line interface for the `mwst` spanning-tree tool.
//!
//! Reads a whitespace-separated graph description (node count, edge count,
//! then one `source target weight` triple per edge), computes the minimum
//! spanning forest with [`mwst_core::kruskal`], and renders the selected
//! edges plus the total weight.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use mwst_core::{Edge, MstError, SpanningForest, kruskal};
use thiserror::Error;
use tracing::info;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mwst",
    about = "Compute a minimum weight spanning tree with Kruskal's algorithm."
)]
pub struct Cli {
    /// Path to the graph description file.
    pub input: PathBuf,

    /// Path to write the result to; stdout when omitted.
    pub output: Option<PathBuf>,
}

/// Errors surfaced while executing the CLI pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed on an input or output path.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph description could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The core computation rejected the graph.
    #[error(transparent)]
    Core(#[from] MstError),
}

/// Errors reading the textual graph description.
///
/// Variants mirror the stages of the input contract: the node count, the
/// edge count, then one triple per edge.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    /// The node count was missing or not a non-negative integer.
    #[error("error reading number of nodes")]
    NodeCount,
    /// The edge count was missing or not a non-negative integer.
    #[error("error reading number of edges")]
    EdgeCount,
    /// Edge `index` (1-based) was missing a token or held a malformed one.
    #[error("error reading edge {index}")]
    Edge {
        /// 1-based position of the malformed edge.
        index: usize,
    },
}

/// A graph description decoded from text.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedGraph {
    /// Number of nodes; ids are `1..=node_count`.
    pub node_count: usize,
    /// Edges in input order, labelled 1-based.
    pub edges: Vec<Edge>,
}

/// Summarises the outcome of one CLI invocation.
#[derive(Clone, Debug)]
pub struct ExecutionSummary {
    /// Number of nodes in the input graph.
    pub node_count: usize,
    /// Number of edges in the input graph.
    pub input_edge_count: usize,
    /// The computed spanning forest.
    pub forest: SpanningForest,
}

/// Executes the pipeline described by `cli`: read, parse, compute.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed, or when the
/// core rejects the graph.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use mwst_cli::cli::{Cli, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 3\n1 2 1.0\n2 3 2.0\n1 3 4.0\n")?;
/// let cli = Cli {
///     input: file.path().to_path_buf(),
///     output: None,
/// };
/// let summary = run_cli(&cli)?;
/// assert_eq!(summary.forest.total_weight(), 3.0);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: &Cli) -> Result<ExecutionSummary, CliError> {
    let text = fs::read_to_string(&cli.input).map_err(|source| CliError::Io {
        path: cli.input.clone(),
        source,
    })?;
    let graph = parse_graph(&text)?;
    let forest = kruskal(graph.node_count, &graph.edges)?;

    info!(
        node_count = graph.node_count,
        input_edges = graph.edges.len(),
        selected_edges = forest.edges().len(),
        total_weight = forest.total_weight(),
        "spanning forest computed"
    );

    Ok(ExecutionSummary {
        node_count: graph.node_count,
        input_edge_count: graph.edges.len(),
        forest,
    })
}

/// Decodes a whitespace-separated graph description.
///
/// The expected token stream is `n`, `m`, then `m` triples
/// `source target weight`. Tokens past the final edge are ignored, matching
/// the tolerant reader this format has always had.
///
/// # Errors
/// Returns [`ParseError`] naming the stage (node count, edge count, or the
/// 1-based edge index) at which decoding failed.
///
/// # Examples
/// ```
/// use mwst_cli::cli::parse_graph;
///
/// let graph = parse_graph("2 1\n1 2 0.5\n")?;
/// assert_eq!(graph.node_count, 2);
/// assert_eq!(graph.edges.len(), 1);
/// # Ok::<(), mwst_cli::cli::ParseError>(())
/// ```
pub fn parse_graph(text: &str) -> Result<ParsedGraph, ParseError> {
    let mut tokens = text.split_whitespace();

    let node_count: usize = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or(ParseError::NodeCount)?;
    let edge_count: usize = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or(ParseError::EdgeCount)?;

    let mut edges = Vec::with_capacity(edge_count);
    for index in 1..=edge_count {
        let source: usize = edge_field(tokens.next(), index)?;
        let target: usize = edge_field(tokens.next(), index)?;
        let weight: f64 = edge_field(tokens.next(), index)?;
        edges.push(Edge::new(source, target, weight, index));
    }

    Ok(ParsedGraph { node_count, edges })
}

fn edge_field<T: FromStr>(token: Option<&str>, index: usize) -> Result<T, ParseError> {
    token
        .and_then(|raw| raw.parse().ok())
        .ok_or(ParseError::Edge { index })
}

/// Renders the selected edges and total weight to `writer`.
///
/// Each edge line is `{label:>4}: ({source}, {target}) {weight:.1}` and the
/// final line reports the total to two decimal places, reproducing the
/// established output format of this tool.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use mwst_cli::cli::render_forest;
/// # use mwst_core::{Edge, kruskal};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let forest = kruskal(2, &[Edge::new(1, 2, 1.5, 1)])?;
/// let mut buffer = Vec::new();
/// render_forest(&forest, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert_eq!(text, "   1: (1, 2) 1.5\nTotal Weight = 1.50\n");
/// # Ok(())
/// # }
/// ```
pub fn render_forest(forest: &SpanningForest, mut writer: impl Write) -> io::Result<()> {
    for edge in forest.edges() {
        writeln!(
            writer,
            "{:>4}: ({}, {}) {:.1}",
            edge.label(),
            edge.source(),
            edge.target(),
            edge.weight()
        )?;
    }
    writeln!(writer, "Total Weight = {:.2}", forest.total_weight())
}
