//! Dense SSSP - single-source shortest paths over a dense adjacency matrix
//!
//! The library stores a weighted directed graph as a `V x V` matrix and offers
//! two shortest-path strategies over it:
//!
//! - [`Dijkstra`]: priority-queue driven, O((V + E) log V), requires that no
//!   negative edge is reachable from the source. This is not checked.
//! - [`BellmanFord`]: V - 1 full relaxation passes plus a verification pass,
//!   O(V * E), tolerates negative weights and reports reachable negative cycles.
//!
//! Graphs persist to a line-oriented text format (see [`graph::text`]).

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;

pub use algorithm::{
    bellman_ford::{BellmanFord, BellmanFordOutcome},
    dijkstra::Dijkstra,
    shortest_paths_general, shortest_paths_non_negative, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::dense::DenseGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Invalid edge weight: {0}")]
    InvalidWeight(f64),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Negative cycle reachable from source (edge {0} -> {1} still relaxes)")]
    NegativeCycle(usize, usize),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
