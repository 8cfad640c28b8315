use std::collections::HashSet;
use std::fmt::Debug;
use log::warn;
use num_traits::{Float, Zero};
use serde::Serialize;
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Starts a result where only the source is reached, at distance zero
    pub(crate) fn unreached(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![None; vertex_count];
        distances[source] = Some(W::zero());
        ShortestPathResult {
            distances,
            predecessors: vec![None; vertex_count],
            source,
        }
    }

    /// Distance to `vertex`, +infinity if it is unreachable
    pub fn distance(&self, vertex: usize) -> W {
        self.distances
            .get(vertex)
            .copied()
            .flatten()
            .unwrap_or_else(W::infinity)
    }

    /// The whole distance sequence with +infinity for unreachable vertices
    pub fn distances_or_infinity(&self) -> Vec<W> {
        self.distances
            .iter()
            .map(|d| d.unwrap_or_else(W::infinity))
            .collect()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Shortest path from the source to `target` as a sequence of vertices,
    /// `None` if `target` is unreachable or out of range
    pub fn path(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.predecessors.len() || self.distances[target].is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Walk the predecessor chain back to the source
        while current != self.source {
            if !visited.insert(current) {
                warn!("Cycle detected in path reconstruction at vertex {}", current);
                return None;
            }

            path.push(current);
            match self.predecessors[current] {
                Some(pred) => current = pred,
                None => {
                    warn!("Vertex {} is reachable but has no predecessor", current);
                    return None;
                }
            }
        }

        path.push(self.source);
        path.reverse();

        Some(path)
    }

    /// Relaxes the edge `from -> to`, returning true if the distance to `to` improved
    pub(crate) fn relax(&mut self, from: usize, to: usize, weight: W) -> bool {
        let Some(dist_from) = self.distances[from] else {
            return false;
        };
        let candidate = dist_from + weight;

        let improves = match self.distances[to] {
            None => true,
            Some(current) => candidate < current,
        };
        if improves {
            self.distances[to] = Some(candidate);
            self.predecessors[to] = Some(from);
        }
        improves
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
