//! Plain-text reports for algorithm results.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::algorithms::{Components, DegreeStatistics, ShortestPath, ShortestPaths, TraversalTree};
use crate::error::{GraphError, Result};

pub trait ReportDisplay {
    fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()>;

    fn to_report(&self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write_report(&mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Creates (or truncates) `path` and writes `report` into it.
pub fn write_report_file<R, P>(report: &R, path: P) -> Result<()>
where
    R: ReportDisplay + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| GraphError::SinkUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    report.write_report(&mut out)?;
    out.flush()?;
    Ok(())
}

impl ReportDisplay for DegreeStatistics {
    fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Number of vertices: {}", self.order)?;
        writeln!(out, "Number of edges:    {}", self.size)?;
        writeln!(out, "Mean degree:        {:.2}", self.mean_degree)?;
        writeln!(out, "Degree distribution (degree:frequency):")?;
        for (degree, frequency) in &self.distribution {
            writeln!(out, "  {degree}:{frequency}")?;
        }
        Ok(())
    }
}

impl ReportDisplay for TraversalTree {
    fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "vertex:parent:level")?;
        for (v, parent, level) in self.entries() {
            let parent = parent.map_or(0, |p| p.0);
            let level = level.map_or(-1, |l| l as i64);
            writeln!(out, "{v}:{parent}:{level}")?;
        }
        Ok(())
    }
}

impl ReportDisplay for Components {
    fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Number of components: {}", self.len())?;
        writeln!(out, "Components (size and members):")?;
        for (i, c) in self.iter().enumerate() {
            write!(out, "  component {} (size {}):", i + 1, c.size())?;
            for v in &c.members {
                write!(out, " {}", v.to_vertex())?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl ReportDisplay for ShortestPath {
    fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let path = self
            .path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("-");
        writeln!(out, "{}:{:.2}:{}", self.destination, self.distance, path)
    }
}

impl ReportDisplay for ShortestPaths {
    fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for entry in self.entries() {
            entry.write_report(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{bfs, connected_components, degree_statistics, dijkstra, shortest_path};
    use crate::core::{Representation, Vertex};
    use crate::graph::UndirectedGraph;

    #[test]
    fn statistics_report() {
        let g = UndirectedGraph::from_edges(
            4,
            Representation::Dense,
            false,
            [(1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0), (4, 1, 1.0)],
        )
        .unwrap();
        assert_eq!(
            degree_statistics(&g).to_report().unwrap(),
            "Number of vertices: 4\n\
             Number of edges:    4\n\
             Mean degree:        2.00\n\
             Degree distribution (degree:frequency):\n  2:4\n"
        );
    }

    #[test]
    fn traversal_report() {
        let g = UndirectedGraph::from_edges(
            4,
            Representation::Sparse,
            false,
            [(1, 2, 1.0), (2, 3, 1.0)],
        )
        .unwrap();
        assert_eq!(
            bfs(&g, Vertex(1)).unwrap().to_report().unwrap(),
            "vertex:parent:level\n1:0:0\n2:1:1\n3:2:2\n4:0:-1\n"
        );
    }

    #[test]
    fn components_report() {
        let g = UndirectedGraph::from_edges(
            5,
            Representation::Sparse,
            false,
            [(1, 2, 1.0), (4, 5, 1.0)],
        )
        .unwrap();
        assert_eq!(
            connected_components(&g).to_report().unwrap(),
            "Number of components: 3\n\
             Components (size and members):\n\
             \x20 component 1 (size 2): 1 2\n\
             \x20 component 2 (size 2): 4 5\n\
             \x20 component 3 (size 1): 3\n"
        );
    }

    #[test]
    fn shortest_paths_report() {
        let g = UndirectedGraph::from_edges(
            4,
            Representation::Dense,
            true,
            [(1, 2, 5.0), (2, 3, 1.0), (1, 3, 10.0)],
        )
        .unwrap();
        assert_eq!(
            dijkstra(&g, Vertex(1)).unwrap().to_report().unwrap(),
            "1:0.00:1\n2:5.00:1-2\n3:6.00:1-2-3\n4:inf:\n"
        );
        assert_eq!(
            shortest_path(&g, Vertex(1), Vertex(3)).unwrap().to_report().unwrap(),
            "3:6.00:1-2-3\n"
        );
    }

    #[test]
    fn unwritable_sink() {
        let g = UndirectedGraph::with_representation(2, Representation::Sparse, false).unwrap();
        let err =
            write_report_file(&degree_statistics(&g), "/nonexistent/dir/report.txt").unwrap_err();
        assert!(matches!(err, GraphError::SinkUnavailable { .. }));
    }
}
