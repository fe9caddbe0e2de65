use crate::errors::EmptyQueueError;

use std::cmp::Ordering;
use std::hash::Hash;
use rustc_hash::FxHashMap;


/// Binary min-heap with positional indexing.
/// https://en.wikipedia.org/wiki/Binary_heap
///
/// Ordering comes from a caller-supplied comparator over priorities. An
/// auxiliary key -> heap-position map lets arbitrary elements be removed or
/// re-prioritised in O(log n) without a linear scan, which is what makes
/// decrease-key search algorithms (A*, Greedy Best-First) efficient.
///
/// Keys must be unique while enqueued. Membership lookup is O(1); all heap
/// mutations are O(log n).
pub struct IndexedPriorityQueue<K, P> {
    heap: Vec<(K, P)>,
    positions: FxHashMap<K, usize>, // key -> current index in heap
    cmp: Box<dyn Fn(&P, &P) -> Ordering>,
}

impl<K, P> IndexedPriorityQueue<K, P>
where
    K: Copy + Eq + Hash,
{
    /// Create an empty queue ordered by the given comparator
    /// The comparator's Ordering::Less ends up at the root
    pub fn new<C>(cmp: C) -> Self
    where
        C: Fn(&P, &P) -> Ordering + 'static,
    {
        Self {
            heap: Vec::new(),
            positions: FxHashMap::default(),
            cmp: Box::new(cmp),
        }
    }

    /// Number of enqueued elements
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// O(1) membership test
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Least element without removing it
    pub fn peek(&self) -> Option<(&K, &P)> {
        self.heap.first().map(|(k, p)| (k, p))
    }

    /// Append the element and sift it up to its position
    pub fn enqueue(&mut self, key: K, priority: P) {
        let idx = self.heap.len();
        self.heap.push((key, priority));
        self.positions.insert(key, idx);
        self.sift_up(idx);
    }

    /// Remove and return the least element
    /// The last element moves to the root and sifts down
    pub fn dequeue(&mut self) -> Result<(K, P), EmptyQueueError> {
        if self.heap.is_empty() {
            return Err(EmptyQueueError);
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let Some((key, priority)) = self.heap.pop() else {
            return Err(EmptyQueueError);
        };
        self.positions.remove(&key);
        if !self.heap.is_empty() {
            let root = self.heap[0].0;
            self.positions.insert(root, 0);
            self.sift_down(0);
        }
        Ok((key, priority))
    }

    /// Remove an arbitrary element
    /// Returns false if the key is not enqueued
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(idx) = self.positions.remove(key) else {
            return false;
        };
        let last = self.heap.len() - 1;
        self.heap.swap(idx, last);
        self.heap.pop();
        if idx < self.heap.len() {
            // The swapped-in element can be out of order in either
            // direction relative to its new parent
            self.positions.insert(self.heap[idx].0, idx);
            self.resift(idx);
        }
        true
    }

    /// Change an enqueued element's priority and restore heap order.
    /// Returns false without touching the heap if the key is not enqueued -
    /// this covers stale handles to elements that were already dequeued
    /// (dequeue drops the position entry), so callers may re-prioritise
    /// blindly after a pop.
    pub fn update_priority(&mut self, key: &K, priority: P) -> bool {
        let Some(&idx) = self.positions.get(key) else {
            return false;
        };
        self.heap[idx].1 = priority;
        self.resift(idx);
        true
    }

    /// Sift up or down depending on how the element compares to its parent
    fn resift(&mut self, idx: usize) {
        if idx > 0 {
            let parent = (idx - 1) / 2;
            if (self.cmp)(&self.heap[idx].1, &self.heap[parent].1) == Ordering::Less {
                self.sift_up(idx);
                return;
            }
        }
        self.sift_down(idx);
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if (self.cmp)(&self.heap[idx].1, &self.heap[parent].1) == Ordering::Less {
                self.swap_entries(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut least = idx;
            if left < self.heap.len()
                && (self.cmp)(&self.heap[left].1, &self.heap[least].1) == Ordering::Less
            {
                least = left;
            }
            if right < self.heap.len()
                && (self.cmp)(&self.heap[right].1, &self.heap[least].1) == Ordering::Less
            {
                least = right;
            }
            if least == idx {
                break;
            }
            self.swap_entries(idx, least);
            idx = least;
        }
    }

    /// Swap two heap slots and keep the position map in sync
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].0, a);
        self.positions.insert(self.heap[b].0, b);
    }
}

impl<K, P> std::fmt::Debug for IndexedPriorityQueue<K, P>
where
    K: std::fmt::Debug,
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedPriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}
