use std::fmt::Debug;
use log::{debug, trace, warn};
use num_traits::{Float, Zero};
use serde::Serialize;

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::{Error, Result};

/// Outcome of a Bellman-Ford run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BellmanFordOutcome<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Final distances, with no negative cycle reachable from the source
    ShortestPaths(ShortestPathResult<W>),

    /// A negative cycle is reachable from the source; the edge `from -> to`
    /// still relaxed after V - 1 passes. No distances are meaningful.
    NegativeCycle { from: usize, to: usize },
}

impl<W> BellmanFordOutcome<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the distances, or `None` if a negative cycle was found
    pub fn shortest_paths(self) -> Option<ShortestPathResult<W>> {
        match self {
            BellmanFordOutcome::ShortestPaths(result) => Some(result),
            BellmanFordOutcome::NegativeCycle { .. } => None,
        }
    }

    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, BellmanFordOutcome::NegativeCycle { .. })
    }
}

/// Bellman-Ford shortest paths with negative cycle detection
///
/// Runs exactly V - 1 relaxation passes over every edge, then one more pass to
/// verify that nothing relaxes further. There is no early exit: the full
/// O(V * E) bound is always paid.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }

    /// Computes shortest paths from `source`, or reports a reachable negative cycle
    pub fn run<W, G>(&self, graph: &G, source: usize) -> Result<BellmanFordOutcome<W>>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        debug!("Bellman-Ford from source {} over {} vertices", source, n);

        let mut result = ShortestPathResult::unreached(n, source);

        for pass in 1..n {
            let mut relaxed = 0usize;
            for u in 0..n {
                for (v, weight) in graph.outgoing_edges(u) {
                    if result.relax(u, v, weight) {
                        relaxed += 1;
                    }
                }
            }
            trace!("Pass {}/{} relaxed {} edges", pass, n - 1, relaxed);
        }

        // Verification pass: any further improvement means a negative cycle
        for u in 0..n {
            let Some(dist_u) = result.distances[u] else {
                continue;
            };
            for (v, weight) in graph.outgoing_edges(u) {
                let still_relaxes = match result.distances[v] {
                    None => true,
                    Some(dist_v) => dist_u + weight < dist_v,
                };
                if still_relaxes {
                    warn!(
                        "Negative cycle reachable from {}: edge {} -> {} still relaxes",
                        source, u, v
                    );
                    return Ok(BellmanFordOutcome::NegativeCycle { from: u, to: v });
                }
            }
        }

        debug!(
            "Bellman-Ford finished, {} of {} vertices reachable",
            result.reachable_count(),
            n
        );

        Ok(BellmanFordOutcome::ShortestPaths(result))
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    /// A reachable negative cycle surfaces as [`Error::NegativeCycle`] here;
    /// use [`BellmanFord::run`] to handle it as an ordinary outcome.
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        match self.run(graph, source)? {
            BellmanFordOutcome::ShortestPaths(result) => Ok(result),
            BellmanFordOutcome::NegativeCycle { from, to } => Err(Error::NegativeCycle(from, to)),
        }
    }
}
