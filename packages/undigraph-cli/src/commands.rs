//! Sequences construction, loading, one query and report rendering.

use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info_span};
use undigraph::{
    EdgeListReader, GraphError, ReportDisplay, UndirectedGraph, Vertex, bfs,
    connected_components, degree_statistics, dfs, dijkstra, shortest_path, write_report_file,
};

use crate::cli::{Cli, Commands};

/// A failure tagged with the step that produced it.
#[derive(Error, Debug)]
#[error("{step} failed: {source}")]
pub struct CommandError {
    pub step: &'static str,
    #[source]
    pub source: GraphError,
}

impl CommandError {
    /// 2 for configuration problems, 3 for bad input data, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match &self.source {
            GraphError::Configuration { .. } | GraphError::Capacity { .. } => 2,
            e if e.is_data_error() => 3,
            _ => 1,
        }
    }
}

trait StepContext<T> {
    fn step(self, step: &'static str) -> Result<T, CommandError>;
}

impl<T> StepContext<T> for Result<T, GraphError> {
    fn step(self, step: &'static str) -> Result<T, CommandError> {
        self.map_err(|source| CommandError { step, source })
    }
}

pub fn run(cli: &Cli) -> Result<(), CommandError> {
    let list = EdgeListReader::new()
        .weighted(cli.weighted)
        .read_file(&cli.input)
        .step("load")?;

    let order = cli.vertices.unwrap_or(list.order);
    let mut graph =
        UndirectedGraph::with_representation(order, cli.representation.into(), cli.weighted)
            .step("construct")?;
    graph.load(list).step("load")?;

    let query = cli.command.name();
    let _span = info_span!("query", name = query).entered();
    let output = cli.output.as_deref();

    let result = match cli.command {
        Commands::Info => emit(&degree_statistics(&graph), output),
        Commands::Bfs { root } => bfs(&graph, Vertex(root)).and_then(|t| emit(&t, output)),
        Commands::Dfs { root } => dfs(&graph, Vertex(root)).and_then(|t| emit(&t, output)),
        Commands::Components => emit(&connected_components(&graph), output),
        Commands::Paths {
            origin,
            destination: Some(destination),
        } => shortest_path(&graph, Vertex(origin), Vertex(destination))
            .and_then(|p| emit(&p, output)),
        Commands::Paths {
            origin,
            destination: None,
        } => dijkstra(&graph, Vertex(origin)).and_then(|p| emit(&p, output)),
    };
    result.step(query)?;

    debug!(query, "done");
    Ok(())
}

fn emit<R: ReportDisplay>(report: &R, output: Option<&Path>) -> Result<(), GraphError> {
    match output {
        Some(path) => write_report_file(report, path),
        None => {
            let mut stdout = io::stdout().lock();
            report.write_report(&mut stdout)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
