use ordered_float::OrderedFloat;
use rand::Rng;

use crate::graph::dense::DenseGraph;

/// The classic 5-vertex instance with negative edges but no negative cycle
///
/// Edges: (0,1,6) (0,2,7) (1,2,8) (1,3,5) (1,4,-4) (2,3,-3) (2,4,9) (3,1,5)
/// (4,0,2) (4,3,7). Shortest distances from 0 are `[0, 6, 7, 4, 2]`.
pub fn textbook_example() -> DenseGraph<OrderedFloat<f64>> {
    let edges = [
        (0, 1, 6.0),
        (0, 2, 7.0),
        (1, 2, 8.0),
        (1, 3, 5.0),
        (1, 4, -4.0),
        (2, 3, -3.0),
        (2, 4, 9.0),
        (3, 1, 5.0),
        (4, 0, 2.0),
        (4, 3, 7.0),
    ];

    let mut graph = DenseGraph::new(5);
    for (from, to, weight) in edges {
        graph.set_weight(from, to, OrderedFloat(weight));
    }
    graph
}

/// Generates a random graph with non-negative weights
/// n: number of vertices
/// density: probability that any given ordered pair gets an edge
/// max_weight: weights are drawn from [0, max_weight)
pub fn generate_non_negative<R: Rng + ?Sized>(
    n: usize,
    density: f64,
    max_weight: f64,
    rng: &mut R,
) -> DenseGraph<OrderedFloat<f64>> {
    let density = density.clamp(0.0, 1.0);
    let mut graph = DenseGraph::new(n);

    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(density) {
                let weight = if max_weight > 0.0 {
                    rng.gen_range(0.0..max_weight)
                } else {
                    0.0
                };
                graph.set_weight(u, v, OrderedFloat(weight));
            }
        }
    }

    graph
}

/// Generates a random graph with some negative weights but no negative cycle
///
/// Each vertex gets a potential `p(v)` and each edge the weight
/// `base + p(u) - p(v)` with `base >= 0`. Potentials cancel around any cycle,
/// so every cycle weighs the sum of its non-negative bases.
pub fn generate_without_negative_cycles<R: Rng + ?Sized>(
    n: usize,
    density: f64,
    max_weight: f64,
    rng: &mut R,
) -> DenseGraph<OrderedFloat<f64>> {
    let density = density.clamp(0.0, 1.0);
    let max_weight = max_weight.max(1.0);
    let potentials: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..max_weight)).collect();
    let mut graph = DenseGraph::new(n);

    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(density) {
                let base = rng.gen_range(0.0..max_weight);
                let weight = base + potentials[u] - potentials[v];
                graph.set_weight(u, v, OrderedFloat(weight));
            }
        }
    }

    graph
}

/// Generates a random non-negative graph plus a negative cycle through every vertex
///
/// The ring `0 -> 1 -> ... -> n-1 -> 0` has total weight `-1`, so the cycle is
/// reachable from any source. Requires `n >= 2`; smaller graphs cannot hold a
/// cycle and are returned without one.
pub fn generate_with_negative_cycle<R: Rng + ?Sized>(
    n: usize,
    density: f64,
    max_weight: f64,
    rng: &mut R,
) -> DenseGraph<OrderedFloat<f64>> {
    let mut graph = generate_non_negative(n, density, max_weight, rng);
    if n < 2 {
        return graph;
    }

    for u in 0..n - 1 {
        graph.set_weight(u, u + 1, OrderedFloat(1.0));
    }
    graph.set_weight(n - 1, 0, OrderedFloat(-(n as f64)));

    graph
}
