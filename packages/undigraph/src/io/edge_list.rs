//! # EdgeList
//!
//! The first token of the input is the declared number of vertices `n`. Every
//! following line `u v [w]` describes the undirected edge `{u - 1, v - 1}`,
//! optionally weighted.
//!
//! Lines with fewer than two integer fields are skipped, as are edges with an
//! endpoint outside `1..=n` and self-loops. A weight that is present but not a
//! finite non-negative number is an error when reading a weighted list.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::core::Vertex;
use crate::error::{GraphError, Result};

/// One edge as read from the input, still using 1-based ids.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeSpec {
    pub u: Vertex,
    pub v: Vertex,
    pub weight: Option<f64>,
}

/// Parsed input: declared vertex count plus the accepted edges in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeList {
    pub order: usize,
    pub edges: Vec<EdgeSpec>,
}

/// A reader for the edge-list format
#[derive(Debug, Clone, Default)]
pub struct EdgeListReader {
    weighted: bool,
}

impl EdgeListReader {
    /// Creates a new (unweighted) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the optional third column is interpreted as a weight
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<EdgeList> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GraphError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        self.read(BufReader::new(file))
    }

    pub fn read<R: BufRead>(&self, reader: R) -> Result<EdgeList> {
        let mut lines = reader.lines().enumerate();

        let order = loop {
            let Some((i, line)) = lines.next() else {
                return Err(GraphError::MissingHeader);
            };
            let line = line?;
            if let Some(token) = line.split_whitespace().next() {
                break token.parse::<usize>().map_err(|_| GraphError::Parse {
                    line: i + 1,
                    message: format!("invalid vertex count {token:?}"),
                })?;
            }
        };

        let mut edges = Vec::new();
        for (i, line) in lines {
            let line = line?;
            if let Some(edge) = self.parse_edge(&line, i + 1, order)? {
                edges.push(edge);
            }
        }

        debug!(order, edges = edges.len(), "edge list read");
        Ok(EdgeList { order, edges })
    }

    fn parse_edge(&self, line: &str, line_no: usize, order: usize) -> Result<Option<EdgeSpec>> {
        let mut fields = line.split_whitespace();
        let (Some(Ok(u)), Some(Ok(v))) = (
            fields.next().map(str::parse::<i64>),
            fields.next().map(str::parse::<i64>),
        ) else {
            if !line.trim().is_empty() {
                debug!(line = line_no, "skipping line without an edge");
            }
            return Ok(None);
        };

        let in_range = |x: i64| x >= 1 && x as u64 <= order as u64;
        if !in_range(u) || !in_range(v) {
            warn!(line = line_no, u, v, order, "skipping edge with out-of-range endpoint");
            return Ok(None);
        }
        if u == v {
            warn!(line = line_no, vertex = u, "skipping self-loop");
            return Ok(None);
        }

        let weight = match fields.next() {
            Some(token) if self.weighted => {
                let w = token.parse::<f64>().map_err(|_| GraphError::Parse {
                    line: line_no,
                    message: format!("invalid weight {token:?}"),
                })?;
                if !w.is_finite() || w < 0.0 {
                    return Err(GraphError::Parse {
                        line: line_no,
                        message: format!("weight {w} must be finite and non-negative"),
                    });
                }
                Some(w)
            }
            _ => None,
        };

        Ok(Some(EdgeSpec {
            u: Vertex(u as usize),
            v: Vertex(v as usize),
            weight,
        }))
    }
}
