use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph stored as a dense `V x V` adjacency matrix
///
/// Every cell holds either `Some(weight)` or `None` for "no edge". The
/// diagonal is always `Some(0)` and is not reported as an edge.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Row-major weights: cell (u, v) lives at `u * vertex_count + v`
    weights: Vec<Option<W>>,
}

impl<W> DenseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        let mut weights = vec![None; vertex_count * vertex_count];
        for v in 0..vertex_count {
            weights[v * vertex_count + v] = Some(W::zero());
        }

        DenseGraph {
            vertex_count,
            weights,
        }
    }

    /// Builds a graph from an edge list, stopping at the first invalid edge
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = DenseGraph::new(vertex_count);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Returns true if any edge carries a negative weight
    pub fn has_negative_weights(&self) -> bool {
        self.weights
            .iter()
            .any(|cell| matches!(cell, Some(w) if *w < W::zero()))
    }

    /// Returns a row of the matrix, diagonal included, or `None` for an unknown vertex
    pub fn row(&self, vertex: usize) -> Option<&[Option<W>]> {
        if !self.has_vertex(vertex) {
            return None;
        }
        let start = vertex * self.vertex_count;
        Some(&self.weights[start..start + self.vertex_count])
    }

    /// Iterates over the rows of the matrix
    pub fn rows(&self) -> impl Iterator<Item = &[Option<W>]> + '_ {
        // chunks(0) panics, and an empty graph has no rows anyway
        self.weights.chunks(self.vertex_count.max(1))
    }

    /// Assembles a graph from rows that have already been validated
    pub(crate) fn from_rows(vertex_count: usize, weights: Vec<Option<W>>) -> Self {
        debug_assert_eq!(weights.len(), vertex_count * vertex_count);
        DenseGraph {
            vertex_count,
            weights,
        }
    }

    /// Overwrites an off-diagonal cell whose endpoints and weight are known to be valid
    pub(crate) fn set_weight(&mut self, from: usize, to: usize, weight: W) {
        debug_assert!(from != to && from < self.vertex_count && to < self.vertex_count);
        debug_assert!(weight.is_finite());
        let idx = self.index(from, to);
        self.weights[idx] = Some(weight);
    }

    fn index(&self, from: usize, to: usize) -> usize {
        from * self.vertex_count + to
    }
}

impl<W> Graph<W> for DenseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.weights.iter().filter(|cell| cell.is_some()).count() - self.vertex_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        let Some(row) = self.row(vertex) else {
            return Box::new(std::iter::empty());
        };

        Box::new(
            row.iter()
                .enumerate()
                .filter(move |(target, _)| *target != vertex)
                .filter_map(|(target, cell)| cell.map(|weight| (target, weight))),
        )
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }

        Box::new(
            (0..self.vertex_count)
                .filter(move |source| *source != vertex)
                .filter_map(move |source| {
                    self.weights[self.index(source, vertex)].map(|weight| (source, weight))
                }),
        )
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if from == to || !self.has_vertex(from) || !self.has_vertex(to) {
            return None;
        }
        self.weights[self.index(from, to)]
    }
}

impl<W> MutableGraph<W> for DenseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) {
            return Err(Error::InvalidVertex(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }
        if from == to {
            return Err(Error::InvalidEdge(from, to));
        }
        if !weight.is_finite() {
            return Err(Error::InvalidWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }

        self.set_weight(from, to, weight);
        Ok(())
    }
}
