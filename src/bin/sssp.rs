use dense_sssp::algorithm::{
    BellmanFord, BellmanFordOutcome, Dijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
use dense_sssp::graph::generators::textbook_example;
use dense_sssp::graph::{DenseGraph, Graph};
use ordered_float::OrderedFloat;
use std::env;
use std::error::Error;
use std::path::PathBuf;

type Weight = OrderedFloat<f64>;

const USAGE: &str = "usage: sssp <graph-file> [source] [--algorithm dijkstra|bellman-ford] [--json]
       sssp demo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlgorithmChoice {
    Dijkstra,
    BellmanFord,
}

/// Command line configuration
#[derive(Debug, Clone)]
struct CliConfig {
    graph_file: Option<PathBuf>,
    source: usize,
    algorithm: AlgorithmChoice,
    json: bool,
    demo: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            graph_file: None,
            source: 0,
            algorithm: AlgorithmChoice::Dijkstra,
            json: false,
            demo: false,
        }
    }
}

impl CliConfig {
    fn from_args<I: Iterator<Item = String>>(mut args: I) -> Result<Self, String> {
        let mut config = CliConfig::default();
        let mut positional = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => config.json = true,
                "--algorithm" | "-a" => {
                    let value = args.next().ok_or("--algorithm needs a value")?;
                    config.algorithm = match value.as_str() {
                        "dijkstra" => AlgorithmChoice::Dijkstra,
                        "bellman-ford" => AlgorithmChoice::BellmanFord,
                        other => return Err(format!("unknown algorithm: {}", other)),
                    };
                }
                "--help" | "-h" => return Err(USAGE.to_string()),
                _ => positional.push(arg),
            }
        }

        match positional.as_slice() {
            [cmd] if cmd == "demo" => config.demo = true,
            [file] => config.graph_file = Some(PathBuf::from(file)),
            [file, source] => {
                config.graph_file = Some(PathBuf::from(file));
                config.source = source
                    .parse()
                    .map_err(|e| format!("invalid source vertex {:?}: {}", source, e))?;
            }
            _ => return Err(USAGE.to_string()),
        }

        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match CliConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    if config.demo {
        return run_demo();
    }

    let path = config.graph_file.as_ref().ok_or(USAGE)?;
    let graph: DenseGraph<Weight> = DenseGraph::load(path)?;

    match config.algorithm {
        AlgorithmChoice::Dijkstra => {
            if graph.has_negative_weights() {
                log::warn!(
                    "Graph has negative weights; Dijkstra distances may not be shortest, \
                     use --algorithm bellman-ford"
                );
            }
            let result: ShortestPathResult<Weight> =
                Dijkstra::new().compute_shortest_paths(&graph, config.source)?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_distances("Dijkstra", &result);
            }
        }
        AlgorithmChoice::BellmanFord => {
            let outcome: BellmanFordOutcome<Weight> =
                BellmanFord::new().run(&graph, config.source)?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print_outcome(&outcome);
            }
        }
    }

    Ok(())
}

/// Builds the textbook graph, runs both algorithms and round-trips it through a file
fn run_demo() -> Result<(), Box<dyn Error>> {
    let graph = textbook_example();
    println!(
        "Adjacency matrix ({} vertices, {} edges):",
        graph.vertex_count(),
        graph.edge_count()
    );
    print!("{}", graph);

    let dijkstra: ShortestPathResult<Weight> =
        Dijkstra::new().compute_shortest_paths(&graph, 0)?;
    println!();
    print_distances("Dijkstra", &dijkstra);

    let outcome: BellmanFordOutcome<Weight> = BellmanFord::new().run(&graph, 0)?;
    println!();
    print_outcome(&outcome);

    let path = env::temp_dir().join(format!("dense_sssp_demo_{}.txt", std::process::id()));
    graph.save(&path)?;
    let reloaded: DenseGraph<Weight> = DenseGraph::load(&path)?;
    std::fs::remove_file(&path)?;

    println!("\nReloaded from {}:", path.display());
    print!("{}", reloaded);
    println!("Identical after reload: {}", reloaded == graph);

    Ok(())
}

fn print_outcome(outcome: &BellmanFordOutcome<Weight>) {
    match outcome {
        BellmanFordOutcome::ShortestPaths(result) => print_distances("Bellman-Ford", result),
        BellmanFordOutcome::NegativeCycle { from, to } => {
            println!(
                "Bellman-Ford: negative cycle detected (edge {} -> {} still relaxes)",
                from, to
            );
        }
    }
}

fn print_distances(name: &str, result: &ShortestPathResult<Weight>) {
    println!("{} distances from vertex {}:", name, result.source);
    for (vertex, distance) in result.distances.iter().enumerate() {
        match distance {
            Some(d) => {
                let path = result.path(vertex).unwrap_or_default();
                println!("  {:>4}: {:>10}  path {:?}", vertex, d.into_inner(), path);
            }
            None => println!("  {:>4}: {:>10}", vertex, dense_sssp::graph::INFINITY_TOKEN),
        }
    }
}
