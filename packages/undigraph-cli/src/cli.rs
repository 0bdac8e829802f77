//! CLI argument parsing for undigraph

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use undigraph::Representation;

/// Analyse an undirected graph given as an edge list
#[derive(Parser, Debug)]
#[command(name = "undigraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Edge-list file: vertex count on the first line, then `u v [weight]` per line
    #[arg(long, short)]
    pub input: PathBuf,

    /// Expected number of vertices (defaults to the count declared by the input)
    #[arg(long, short = 'n', global = true)]
    pub vertices: Option<usize>,

    /// Storage backend
    #[arg(long, short, global = true, value_enum, default_value = "sparse")]
    pub representation: RepresentationArg,

    /// Read the third column of the edge list as edge weights
    #[arg(long, short, global = true)]
    pub weighted: bool,

    /// Write the report here instead of stdout
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. `debug`, `undigraph=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Vertex and edge counts, mean degree and degree distribution
    Info,

    /// Breadth-first tree (parent and level of every vertex)
    Bfs {
        /// Root vertex (1-based)
        #[arg(long)]
        root: usize,
    },

    /// Depth-first tree (parent and level of every vertex)
    Dfs {
        /// Root vertex (1-based)
        #[arg(long)]
        root: usize,
    },

    /// Connected components, largest first
    Components,

    /// Shortest paths from an origin to every vertex, or to one destination
    Paths {
        /// Origin vertex (1-based)
        #[arg(long)]
        origin: usize,

        /// Only report the path to this vertex (1-based)
        #[arg(long)]
        destination: Option<usize>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Info => "info",
            Commands::Bfs { .. } => "bfs",
            Commands::Dfs { .. } => "dfs",
            Commands::Components => "components",
            Commands::Paths { .. } => "paths",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RepresentationArg {
    /// Adjacency matrix
    Dense,
    /// Adjacency lists
    Sparse,
}

impl From<RepresentationArg> for Representation {
    fn from(arg: RepresentationArg) -> Self {
        match arg {
            RepresentationArg::Dense => Representation::Dense,
            RepresentationArg::Sparse => Representation::Sparse,
        }
    }
}
