//! Adapters between text and the in-memory contracts: edge-list input and
//! plain-text reports.

pub mod edge_list;
pub mod report;

pub use edge_list::{EdgeList, EdgeListReader, EdgeSpec};
pub use report::{ReportDisplay, write_report_file};
