use dense_sssp::algorithm::{BellmanFord, Dijkstra, ShortestPathAlgorithm};
use dense_sssp::graph::generators::generate_non_negative;
use dense_sssp::graph::{DenseGraph, Graph};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

type Weight = OrderedFloat<f64>;

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(
    name: &str,
    algorithm: &A,
    graph: &DenseGraph<Weight>,
    source: usize,
) -> Result<Duration, dense_sssp::Error>
where
    A: ShortestPathAlgorithm<Weight, DenseGraph<Weight>>,
{
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    println!(
        "  - Found {} reachable vertices in {:?}",
        result.reachable_count(),
        duration
    );

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Bellman-Ford is cubic on a dense matrix, so sizes stay modest
    let graph_sizes = vec![50, 100, 200, 400, 800];
    let density = 0.1;

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Bellman-Ford (dense matrix)");
    println!("Edge density: {:.0}% of ordered pairs", density * 100.0);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let bellman_ford = BellmanFord::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_non_negative(size, density, 100.0, &mut rng);
        let source = 0;

        println!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let dijkstra_time = benchmark_algorithm("Dijkstra", &dijkstra, &graph, source)?;
        let bellman_ford_time =
            benchmark_algorithm("Bellman-Ford", &bellman_ford, &graph, source)?;

        let ratio =
            bellman_ford_time.as_secs_f64() / dijkstra_time.as_secs_f64().max(f64::EPSILON);
        println!("Bellman-Ford / Dijkstra: {:.2}x", ratio);

        results.push((size, graph.edge_count(), dijkstra_time, bellman_ford_time, ratio));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<15} | {:<15} | {:<10}",
        "Vertices", "Edges", "Dijkstra (ms)", "B-Ford (ms)", "Ratio"
    );
    println!("-----------------------------------------------------");

    for (size, edges, dijkstra_time, bellman_ford_time, ratio) in &results {
        println!(
            "{:<10} | {:<10} | {:<15.3} | {:<15.3} | {:<10.2}",
            size,
            edges,
            dijkstra_time.as_secs_f64() * 1000.0,
            bellman_ford_time.as_secs_f64() * 1000.0,
            ratio
        );
    }

    Ok(())
}
