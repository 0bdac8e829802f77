//! Error types for graph construction, loading and reporting.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::Representation;

/// Errors that can occur while building or querying a graph
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("a graph needs at least one vertex (got {order})")]
    Configuration { order: usize },

    #[error("{representation} storage for {order} vertices does not fit in memory")]
    Capacity {
        order: usize,
        representation: Representation,
    },

    #[error("edge list declares {declared} vertices but the graph has {expected}")]
    LoadMismatch { declared: usize, expected: usize },

    #[error("vertex {vertex} is outside 1..={order}")]
    VertexOutOfRange { vertex: usize, order: usize },

    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop { vertex: usize },

    #[error("edge weight {weight} must be finite and non-negative")]
    InvalidWeight { weight: f64 },

    #[error("edge list is missing the vertex count header")]
    MissingHeader,

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("cannot open {path:?} for reading: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open {path:?} for writing: {source}")]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// True for failures caused by bad input data rather than the environment.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            GraphError::LoadMismatch { .. }
                | GraphError::VertexOutOfRange { .. }
                | GraphError::SelfLoop { .. }
                | GraphError::InvalidWeight { .. }
                | GraphError::MissingHeader
                | GraphError::Parse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
