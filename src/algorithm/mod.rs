pub mod traits;
pub mod dijkstra;
pub mod bellman_ford;

use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::Result;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use bellman_ford::{BellmanFord, BellmanFordOutcome};
pub use dijkstra::Dijkstra;

/// Shortest distances from `source` when no reachable edge is negative
///
/// Negative weights are not detected; the result is unspecified if any are
/// reachable from `source`.
pub fn shortest_paths_non_negative<W, G>(graph: &G, source: usize) -> Result<ShortestPathResult<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    Dijkstra::new().compute_shortest_paths(graph, source)
}

/// Shortest distances from `source` for arbitrary weights, or the negative cycle that prevents them
pub fn shortest_paths_general<W, G>(graph: &G, source: usize) -> Result<BellmanFordOutcome<W>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    BellmanFord::new().run(graph, source)
}
