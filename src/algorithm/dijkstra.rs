use std::fmt::Debug;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::DistanceQueue;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion
///
/// Every edge reachable from the source must have a non-negative weight. This
/// is not checked: with a negative edge the distances it returns may not be
/// the shortest ones. Each vertex is expanded at most V times, so the search
/// terminates even when a negative cycle is reachable. Use
/// [`BellmanFord`](crate::BellmanFord) for graphs with negative weights.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        debug!("Dijkstra from source {} over {} vertices", source, n);

        let mut result = ShortestPathResult::unreached(n, source);
        let mut queue = DistanceQueue::seeded(source, W::zero());
        let mut expansions = vec![0usize; n];
        let mut settled = 0usize;

        while let Some((u, dist_u)) = queue.pop() {
            // A shorter path to u was pushed after this entry
            if matches!(result.distances[u], Some(best) if dist_u > best) {
                continue;
            }
            // Only reachable with negative weights; bounds the work on negative cycles
            if expansions[u] >= n {
                trace!("Vertex {} already expanded {} times, skipping", u, n);
                continue;
            }
            expansions[u] += 1;
            settled += 1;

            for (v, weight) in graph.outgoing_edges(u) {
                if result.relax(u, v, weight) {
                    if let Some(dist_v) = result.distances[v] {
                        trace!("Relaxed {} -> {}: {:?}", u, v, dist_v);
                        queue.push(v, dist_v);
                    }
                }
            }
        }

        debug!(
            "Dijkstra settled {} entries, {} of {} vertices reachable",
            settled,
            result.reachable_count(),
            n
        );

        Ok(result)
    }
}
