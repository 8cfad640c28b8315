use dense_sssp::graph::generators::{generate_without_negative_cycles, textbook_example};
use dense_sssp::graph::{DenseGraph, Graph, MutableGraph, INFINITY_TOKEN};
use dense_sssp::Error;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

type Weight = OrderedFloat<f64>;

fn parse(text: &str) -> Result<DenseGraph<Weight>, Error> {
    text.parse()
}

fn parse_error_line(text: &str) -> usize {
    match parse(text) {
        Err(Error::Parse { line, .. }) => line,
        other => panic!("expected parse error, got {:?}", other),
    }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dense_sssp_{}_{}.txt", name, std::process::id()))
}

#[test]
fn test_serialize_format() {
    let mut graph = DenseGraph::new(3);
    graph.add_edge(0, 1, OrderedFloat(2.5)).unwrap();
    graph.add_edge(1, 2, OrderedFloat(-1.0)).unwrap();

    let text = graph.to_string();
    assert_eq!(text, "3\n0 2.5 ∞\n∞ 0 -1\n∞ ∞ 0\n");
}

#[test]
fn test_round_trip_textbook_graph() {
    let graph = textbook_example();
    let reloaded = parse(&graph.to_string()).unwrap();

    assert_eq!(reloaded, graph);
    assert_eq!(reloaded.edge_count(), 10);
}

#[test]
fn test_round_trip_preserves_awkward_floats() {
    let mut graph = DenseGraph::new(3);
    graph.add_edge(0, 1, OrderedFloat(0.1 + 0.2)).unwrap();
    graph.add_edge(1, 0, OrderedFloat(1e-300)).unwrap();
    graph.add_edge(2, 0, OrderedFloat(-123456789.125)).unwrap();

    let reloaded = parse(&graph.to_string()).unwrap();
    assert_eq!(reloaded, graph);
    assert_eq!(reloaded.get_edge_weight(0, 1), Some(OrderedFloat(0.1 + 0.2)));
}

#[test]
fn test_round_trip_random_graphs() {
    let mut rng = StdRng::seed_from_u64(2024);
    for n in [0, 1, 2, 7, 25] {
        let graph = generate_without_negative_cycles(n, 0.4, 50.0, &mut rng);
        let reloaded = parse(&graph.to_string()).unwrap();
        assert_eq!(reloaded, graph, "round trip failed for {} vertices", n);
    }
}

#[test]
fn test_empty_graph_round_trip() {
    let graph: DenseGraph<Weight> = DenseGraph::new(0);
    assert_eq!(graph.to_string(), "0\n");
    assert_eq!(parse("0\n").unwrap(), graph);
}

#[test]
fn test_infinity_token_loads_as_no_edge() {
    let text = format!("2\n0 {}\n4 0\n", INFINITY_TOKEN);
    let graph = parse(&text).unwrap();

    assert_eq!(graph.get_edge_weight(0, 1), None);
    assert_eq!(graph.get_edge_weight(1, 0), Some(OrderedFloat(4.0)));
}

#[test]
fn test_tolerates_extra_whitespace_and_trailing_blank_lines() {
    let graph = parse("\n  2 \n0\t 1\n  ∞   0  \n\n\n").unwrap();
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.get_edge_weight(0, 1), Some(OrderedFloat(1.0)));
}

#[test]
fn test_wrong_token_count_is_parse_error() {
    assert_eq!(parse_error_line("3\n0 1 ∞\n∞ 0\n∞ ∞ 0\n"), 3);
    assert_eq!(parse_error_line("2\n0 1 2\n∞ 0\n"), 2);
}

#[test]
fn test_unparsable_number_is_parse_error() {
    assert_eq!(parse_error_line("2\n0 abc\n∞ 0\n"), 2);
    assert_eq!(parse_error_line("2\n0 1\ninf 0\n"), 3);
}

#[test]
fn test_bad_vertex_count_is_parse_error() {
    assert_eq!(parse_error_line(""), 1);
    assert_eq!(parse_error_line("-2\n"), 1);
    assert_eq!(parse_error_line("two\n"), 1);
}

#[test]
fn test_missing_rows_is_parse_error() {
    assert_eq!(parse_error_line("3\n0 1 ∞\n∞ 0 1\n"), 4);
}

#[test]
fn test_non_zero_diagonal_is_parse_error() {
    assert_eq!(parse_error_line("2\n0 1\n∞ 5\n"), 3);
    assert_eq!(parse_error_line("2\n∞ 1\n∞ 0\n"), 2);
}

#[test]
fn test_trailing_content_is_parse_error() {
    assert_eq!(parse_error_line("1\n0\n0\n"), 3);
}

#[test]
fn test_save_and_load_file() {
    let graph = textbook_example();
    let path = temp_path("save_and_load");

    graph.save(&path).unwrap();
    let reloaded: DenseGraph<Weight> = DenseGraph::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(reloaded, graph);
}

#[test]
fn test_load_malformed_file_returns_error() {
    let path = temp_path("malformed");
    std::fs::write(&path, "3\n0 1 ∞\n∞ 0\n∞ ∞ 0\n").unwrap();

    let result: Result<DenseGraph<Weight>, Error> = DenseGraph::load(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(Error::Parse { line: 3, .. })));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let path = temp_path("does_not_exist");
    let result: Result<DenseGraph<Weight>, Error> = DenseGraph::load(&path);
    assert!(matches!(result, Err(Error::Io(_))));
}
