use dense_sssp::data_structures::DistanceQueue;
use ordered_float::OrderedFloat;

#[test]
fn test_pops_smallest_distance_first() {
    let mut queue = DistanceQueue::new();
    queue.push(1, OrderedFloat(5.0));
    queue.push(2, OrderedFloat(-1.0));
    queue.push(3, OrderedFloat(2.5));

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek(), Some((2, OrderedFloat(-1.0))));
    assert_eq!(queue.pop(), Some((2, OrderedFloat(-1.0))));
    assert_eq!(queue.pop(), Some((3, OrderedFloat(2.5))));
    assert_eq!(queue.pop(), Some((1, OrderedFloat(5.0))));
    assert!(queue.is_empty());
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_duplicate_vertices_are_kept() {
    // Improving a vertex pushes it again; the older entry stays until popped
    let mut queue = DistanceQueue::seeded(4, OrderedFloat(10.0));
    queue.push(4, OrderedFloat(3.0));

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.pop(), Some((4, OrderedFloat(3.0))));
    assert_eq!(queue.pop(), Some((4, OrderedFloat(10.0))));
}
