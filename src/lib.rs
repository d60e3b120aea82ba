//! Dial SSSP - single-source shortest paths on non-negative integer weights
//!
//! Three interchangeable strategies run against the same graph model and
//! produce the same labels:
//!
//! - [`Dial`]: bucket-based label-correcting search over a circular array of
//!   `max_edge_weight + 1` buckets.
//! - [`Dijkstra`]: label-setting search driven by a binary heap with lazy
//!   deletion of stale entries.
//! - [`ArrayScan`]: the O(V²) label-setting baseline with linear minimum
//!   extraction.
//!
//! Nodes are numbered `1..=N`. Results are returned as a [`LabelStore`].

pub mod algorithm;
pub mod data_structures;
pub mod driver;
pub mod graph;
pub mod io;

use std::path::PathBuf;

pub use algorithm::{
    array_scan::ArrayScan, dial::Dial, dijkstra::Dijkstra, LabelStore, ShortestPathAlgorithm,
    Strategy,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Source node {node} is not in the graph (nodes are 1..={node_count})")]
    InvalidSource { node: usize, node_count: usize },

    #[error("Invalid node ID: {0}")]
    InvalidVertex(usize),

    #[error("Edge {from} -> {to} is listed in the adjacency but has no weight")]
    EdgeNotFound { from: usize, to: usize },

    #[error("Distance overflow relaxing edge {from} -> {to}")]
    DistanceOverflow { from: usize, to: usize },

    #[error("Cannot allocate buckets for maximum edge weight {max_weight}")]
    BucketAllocation { max_weight: String },

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(i64),

    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Missing input file: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
