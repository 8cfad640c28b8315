use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(vertex, distance)` entries for shortest path searches
///
/// There is no decrease-key: a vertex whose distance improves is simply pushed
/// again, and the caller discards stale entries as they are popped.
#[derive(Debug)]
pub struct DistanceQueue<P>
where
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap, reversed so the smallest distance pops first
    heap: BinaryHeap<Reverse<(P, usize)>>,
}

impl<P> DistanceQueue<P>
where
    P: Copy + Debug + Ord,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        DistanceQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a queue holding a single entry
    pub fn seeded(vertex: usize, distance: P) -> Self {
        let mut queue = DistanceQueue::new();
        queue.push(vertex, distance);
        queue
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with its tentative distance
    pub fn push(&mut self, vertex: usize, distance: P) {
        self.heap.push(Reverse((distance, vertex)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, P)> {
        self.heap.pop().map(|Reverse((distance, vertex))| (vertex, distance))
    }

    /// Returns the entry with the smallest distance without removing it
    pub fn peek(&self) -> Option<(usize, P)> {
        self.heap.peek().map(|Reverse((distance, vertex))| (*vertex, *distance))
    }
}

impl<P> Default for DistanceQueue<P>
where
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
