use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dense_sssp::algorithm::{
    BellmanFord, BellmanFordOutcome, Dijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
use dense_sssp::graph::generators::{generate_non_negative, generate_without_negative_cycles};
use dense_sssp::DenseGraph;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

type Weight = OrderedFloat<f64>;

fn run_dijkstra(
    graph: &DenseGraph<Weight>,
    source: usize,
) -> dense_sssp::Result<ShortestPathResult<Weight>> {
    Dijkstra::new().compute_shortest_paths(graph, source)
}

fn run_bellman_ford(
    graph: &DenseGraph<Weight>,
    source: usize,
) -> dense_sssp::Result<BellmanFordOutcome<Weight>> {
    BellmanFord::new().run(graph, source)
}

fn bench_non_negative(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_negative");
    let mut rng = StdRng::seed_from_u64(7);

    for &n in &[32usize, 64, 128] {
        let graph = generate_non_negative(n, 0.2, 100.0, &mut rng);

        group.bench_with_input(BenchmarkId::new("dijkstra", n), &graph, |b, g| {
            b.iter(|| run_dijkstra(g, black_box(0)))
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford", n), &graph, |b, g| {
            b.iter(|| run_bellman_ford(g, black_box(0)))
        });
    }

    group.finish();
}

fn bench_mixed_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_sign");
    let mut rng = StdRng::seed_from_u64(11);

    for &n in &[32usize, 64, 128] {
        let graph = generate_without_negative_cycles(n, 0.2, 100.0, &mut rng);
        group.bench_with_input(BenchmarkId::new("bellman_ford", n), &graph, |b, g| {
            b.iter(|| run_bellman_ford(g, black_box(0)))
        });
    }

    group.finish();
}

fn bench_text_round_trip(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = generate_non_negative(128, 0.2, 100.0, &mut rng);
    let text = graph.to_string();

    c.bench_function("text/serialize_128", |b| {
        b.iter(|| black_box(&graph).to_string())
    });
    c.bench_function("text/parse_128", |b| {
        b.iter(|| black_box(text.as_str()).parse::<DenseGraph<Weight>>())
    });
}

criterion_group!(benches, bench_non_negative, bench_mixed_sign, bench_text_round_trip);
criterion_main!(benches);
