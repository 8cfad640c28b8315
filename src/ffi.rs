use crate::algorithm::bellman_ford::{BellmanFord, BellmanFordOutcome};
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::dense::DenseGraph;
use crate::graph::traits::MutableGraph;
use ordered_float::OrderedFloat;

#[repr(C)]
pub struct FfiGraph {
    graph: DenseGraph<OrderedFloat<f64>>,
}

#[no_mangle]
pub extern "C" fn dsssp_graph_new(vertex_count: usize) -> *mut FfiGraph {
    Box::into_raw(Box::new(FfiGraph {
        graph: DenseGraph::new(vertex_count),
    }))
}

/// Returns false if an endpoint is out of range, the edge is a self-loop or
/// the weight is not finite. The graph is unchanged in that case.
#[no_mangle]
pub extern "C" fn dsssp_graph_add_edge(
    g: *mut FfiGraph,
    from: usize,
    to: usize,
    weight: f64,
) -> bool {
    if g.is_null() {
        return false;
    }
    unsafe { &mut *g }
        .graph
        .add_edge(from, to, OrderedFloat(weight))
        .is_ok()
}

#[no_mangle]
pub extern "C" fn dsssp_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

/// Distances use `INFINITY` for unreachable vertices. When `negative_cycle`
/// is set, `distances` is null and `len` is 0.
#[repr(C)]
pub struct FfiResult {
    pub distances: *mut f64,
    pub len: usize,
    pub negative_cycle: bool,
}

#[no_mangle]
pub extern "C" fn dsssp_result_free(res: *mut FfiResult) {
    if !res.is_null() {
        unsafe {
            if !(*res).distances.is_null() {
                drop(Vec::from_raw_parts(
                    (*res).distances,
                    (*res).len,
                    (*res).len,
                ));
            }
            drop(Box::from_raw(res));
        }
    }
}

/// Returns null if the graph is null or the source is out of range
#[no_mangle]
pub extern "C" fn dsssp_dijkstra(g: *const FfiGraph, source: usize) -> *mut FfiResult {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let graph = unsafe { &(*g).graph };
    match Dijkstra::new().compute_shortest_paths(graph, source) {
        Ok(result) => into_ffi(result),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Returns null if the graph is null or the source is out of range
#[no_mangle]
pub extern "C" fn dsssp_bellman_ford(g: *const FfiGraph, source: usize) -> *mut FfiResult {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let graph = unsafe { &(*g).graph };
    match BellmanFord::new().run(graph, source) {
        Ok(BellmanFordOutcome::ShortestPaths(result)) => into_ffi(result),
        Ok(BellmanFordOutcome::NegativeCycle { .. }) => Box::into_raw(Box::new(FfiResult {
            distances: std::ptr::null_mut(),
            len: 0,
            negative_cycle: true,
        })),
        Err(_) => std::ptr::null_mut(),
    }
}

fn into_ffi(result: ShortestPathResult<OrderedFloat<f64>>) -> *mut FfiResult {
    // into_boxed_slice drops spare capacity so len == capacity on free
    let distances: Box<[f64]> = result
        .distances_or_infinity()
        .into_iter()
        .map(OrderedFloat::into_inner)
        .collect();
    let len = distances.len();
    let ptr = Box::into_raw(distances) as *mut f64;
    Box::into_raw(Box::new(FfiResult {
        distances: ptr,
        len,
        negative_cycle: false,
    }))
}
