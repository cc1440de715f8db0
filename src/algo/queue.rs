use std::{cmp::Reverse, collections::BinaryHeap};

use crate::core::id::VertexId;

/// Distance used as a priority where the absence of a value is infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Priority<W> {
    Finite(W),
    Infinite,
}

impl<W> From<Option<W>> for Priority<W> {
    fn from(distance: Option<W>) -> Self {
        match distance {
            Some(distance) => Priority::Finite(distance),
            None => Priority::Infinite,
        }
    }
}

impl<W> From<Priority<W>> for Option<W> {
    fn from(priority: Priority<W>) -> Self {
        match priority {
            Priority::Finite(distance) => Some(distance),
            Priority::Infinite => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry<W> {
    priority: Priority<W>,
    // Equal priorities are popped in the order of pushing.
    seq: u64,
    vertex: VertexId,
}

/// Min-priority queue of vertices with decrease-key emulated by pushing a new
/// entry and ignoring the stale ones when popping.
#[derive(Debug)]
pub(crate) struct MinQueue<W> {
    heap: BinaryHeap<Reverse<Entry<W>>>,
    // Sequence number of the live entry of each vertex, `None` if the vertex is
    // not in the queue.
    queued: Vec<Option<u64>>,
    next_seq: u64,
}

impl<W: Ord> MinQueue<W> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(vertex_count),
            queued: vec![None; vertex_count],
            next_seq: 0,
        }
    }

    /// Inserts the vertex or changes its priority if it is already queued.
    pub fn push(&mut self, vertex: VertexId, distance: Option<W>) {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.queued[vertex.as_usize()] = Some(seq);
        self.heap.push(Reverse(Entry {
            priority: distance.into(),
            seq,
            vertex,
        }));
    }

    pub fn pop(&mut self) -> Option<(VertexId, Option<W>)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            let slot = &mut self.queued[entry.vertex.as_usize()];

            if *slot == Some(entry.seq) {
                *slot = None;
                return Some((entry.vertex, entry.priority.into()));
            }
        }

        None
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.queued[vertex.as_usize()].is_some()
    }
}
