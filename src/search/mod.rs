//! Incrementally-steppable pathfinding over an abstract graph.
//!
//! A [`PathFinder`] is a small state machine: `initialise` seeds the search,
//! each `step` expands exactly one node, and the caller keeps stepping until
//! the status turns terminal. The graph, heuristic and traversal costs are
//! supplied as closures, so the engine is agnostic to what a node value is
//! beyond equality and hashing.

pub mod record;

mod a_star;
mod backtracking;
mod bfs;
mod dijkstra;
mod greedy;

use crate::collections::{FxIndexMap, FxIndexSet};
use crate::errors::SearchError;
use crate::queue::IndexedPriorityQueue;
use record::SearchRecord;

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::hash::Hash;
use log::{debug, trace};


/// Lifecycle of one search.
///
/// `Success` and `Failure` are terminal until `reset` returns the finder to
/// `NotInitialised`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NotInitialised,
    Running,
    Success,
    Failure,
}

/// The closed set of interchangeable search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    AStar,
    Dijkstra,
    GreedyBestFirst,
    Backtracking,
    Bfs,
}

impl Algorithm {
    /// Whether records created by this strategy carry a real heuristic
    /// estimate. The rest always store h = 0.
    fn uses_heuristic(self) -> bool {
        matches!(self, Self::AStar | Self::GreedyBestFirst)
    }

    /// Fresh open container for this strategy
    fn open_list(self) -> OpenList {
        match self {
            // A* orders by (f, h), Greedy by (h, g); both are plain
            // lexicographic comparisons over the enqueued pair
            Self::AStar | Self::GreedyBestFirst => {
                OpenList::Heap(IndexedPriorityQueue::new(lexicographic))
            }
            Self::Dijkstra => OpenList::Scan(Vec::new()),
            Self::Backtracking => OpenList::Stack(Vec::new()),
            Self::Bfs => OpenList::Queue(VecDeque::new()),
        }
    }
}

fn lexicographic(a: &(f64, f64), b: &(f64, f64)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1))
}

/// Per-strategy open collection, holding arena indices.
pub(super) enum OpenList {
    /// Cost-ordered indexed heap (A*, Greedy Best-First)
    Heap(IndexedPriorityQueue<usize, (f64, f64)>),
    /// Plain list with a linear least-cost scan (Dijkstra). Deliberately
    /// O(n) per extraction; kept as the simpler reference implementation.
    Scan(Vec<usize>),
    /// LIFO stack (Backtracking)
    Stack(Vec<usize>),
    /// FIFO queue (BFS)
    Queue(VecDeque<usize>),
}

impl OpenList {
    fn len(&self) -> usize {
        match self {
            Self::Heap(queue) => queue.len(),
            Self::Scan(list) | Self::Stack(list) => list.len(),
            Self::Queue(queue) => queue.len(),
        }
    }
}

/// Observation points fired synchronously during a search.
///
/// Events carry owned snapshots of the record they describe; they exist
/// purely for external observation (visualisers, statistics) and nothing in
/// the search logic depends on anyone listening.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent<T> {
    Started,
    Running,
    Success,
    Failure,
    CurrentChanged { value: T, g_cost: f64, h_cost: f64, f_cost: f64 },
    AddedToOpen { value: T, g_cost: f64, h_cost: f64, f_cost: f64 },
    AddedToClosed { value: T },
    DestinationFound { value: T },
}

/// Steppable pathfinder over an abstract graph of `T` values.
pub struct PathFinder<'a, T> {
    pub(super) algorithm: Algorithm,
    pub(super) neighbours: Box<dyn Fn(&T) -> Vec<T> + 'a>,
    pub(super) heuristic: Box<dyn Fn(&T, &T) -> f64 + 'a>,
    pub(super) traversal_cost: Box<dyn Fn(&T, &T) -> f64 + 'a>,
    observers: Vec<Box<dyn FnMut(&SearchEvent<T>) + 'a>>,

    status: Status,
    start: Option<T>,
    pub(super) goal: Option<T>,

    /// Arena of all records discovered this search; parent links are
    /// indices into it
    pub(super) records: Vec<SearchRecord<T>>,
    current: Option<usize>,

    pub(super) open: OpenList,
    /// value -> arena index for everything currently in the open list
    pub(super) open_index: FxIndexMap<T, usize>,
    pub(super) closed: FxIndexSet<T>,
}

impl<'a, T> PathFinder<'a, T>
where
    T: Clone + Eq + Hash,
{
    /// Create a finder with its graph and cost functions.
    ///
    /// `neighbours` is queried once per expansion and may produce its
    /// sequence lazily; `heuristic` and `traversal_cost` must be
    /// non-negative for A* to stay admissible.
    pub fn new<N, H, C>(
        algorithm: Algorithm,
        neighbours: N,
        heuristic: H,
        traversal_cost: C,
    ) -> Self
    where
        N: Fn(&T) -> Vec<T> + 'a,
        H: Fn(&T, &T) -> f64 + 'a,
        C: Fn(&T, &T) -> f64 + 'a,
    {
        Self {
            algorithm,
            neighbours: Box::new(neighbours),
            heuristic: Box::new(heuristic),
            traversal_cost: Box::new(traversal_cost),
            observers: Vec::new(),
            status: Status::NotInitialised,
            start: None,
            goal: None,
            records: Vec::new(),
            current: None,
            open: algorithm.open_list(),
            open_index: FxIndexMap::default(),
            closed: FxIndexSet::default(),
        }
    }

    /// Register an observer. Observers fire synchronously, in registration
    /// order, for every [`SearchEvent`].
    pub fn add_observer<F>(&mut self, observer: F)
    where
        F: FnMut(&SearchEvent<T>) + 'a,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn start(&self) -> Option<&T> {
        self.start.as_ref()
    }

    pub fn goal(&self) -> Option<&T> {
        self.goal.as_ref()
    }

    /// The record most recently made current; the head of the best-known
    /// path
    pub fn current(&self) -> Option<&SearchRecord<T>> {
        self.current.map(|idx| &self.records[idx])
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }

    /// Reconstruct the path from the start to the current record by walking
    /// parent links through the arena. After `Success` this is the found
    /// path; mid-search it is the best-known path to the node about to be
    /// expanded.
    pub fn path(&self) -> Option<Vec<T>> {
        let mut idx = self.current?;
        let mut path = Vec::new();
        loop {
            let record = self.records.get(idx)?;
            path.push(record.value().clone());
            match record.parent() {
                Some(parent) => idx = parent,
                None => break,
            }
        }
        path.reverse();
        Some(path)
    }

    /// Begin a new search. Returns false without touching anything if a
    /// search is currently running.
    ///
    /// If `start == goal` the search resolves to `Success` immediately,
    /// with a zero-cost record and no expansion.
    pub fn initialise(&mut self, start: T, goal: T) -> bool {
        if self.status == Status::Running {
            return false;
        }
        self.clear();
        self.start = Some(start.clone());
        self.goal = Some(goal.clone());

        if start == goal {
            debug!("search initialised with start == goal; immediate success");
            let record = SearchRecord::new(start, None, 0.0, 0.0);
            let destination = record.value().clone();
            self.emit(SearchEvent::CurrentChanged {
                value: record.value().clone(),
                g_cost: record.g_cost(),
                h_cost: record.h_cost(),
                f_cost: record.f_cost(),
            });
            self.records.push(record);
            self.current = Some(0);
            self.emit(SearchEvent::Started);
            self.emit(SearchEvent::DestinationFound { value: destination });
            self.emit(SearchEvent::Success);
            self.status = Status::Success;
            return true;
        }

        let h = if self.algorithm.uses_heuristic() {
            (self.heuristic)(&start, &goal)
        } else {
            0.0
        };
        let root = SearchRecord::new(start, None, 0.0, h);
        self.records.push(root);
        self.current = Some(0);
        self.open_push(0);
        self.emit(SearchEvent::Started);
        self.emit_current(0);
        self.status = Status::Running;
        debug!("search initialised");
        true
    }

    /// Expand one node.
    ///
    /// Moves the current record to the closed set, pops the least-cost open
    /// record as the new current, resolves `Success` if it is the goal,
    /// otherwise feeds its neighbours to the strategy's expansion rule.
    /// Exhausting the open list is the `Failure` terminal state, not an
    /// error; calling `step` outside `Running` is.
    pub fn step(&mut self) -> Result<Status, SearchError> {
        if self.status != Status::Running {
            return Err(SearchError::NotRunning);
        }

        if let Some(idx) = self.current {
            let value = self.records[idx].value().clone();
            // The closed set is keyed by value, so re-closing the root
            // (current and in the open list after initialise) is a no-op
            if self.closed.insert(value.clone()) {
                self.emit(SearchEvent::AddedToClosed { value });
            }
        }

        let Some(idx) = self.pop_least() else {
            debug!(
                "open list exhausted after {} closed nodes; search failed",
                self.closed.len()
            );
            self.status = Status::Failure;
            self.emit(SearchEvent::Failure);
            return Ok(self.status);
        };

        self.current = Some(idx);
        self.emit_current(idx);

        let goal = match &self.goal {
            Some(goal) => goal.clone(),
            None => return Err(SearchError::NotRunning),
        };

        if *self.records[idx].value() == goal {
            debug!(
                "destination reached: g = {}, {} nodes closed",
                self.records[idx].g_cost(),
                self.closed.len()
            );
            self.status = Status::Success;
            self.emit(SearchEvent::DestinationFound { value: goal });
            self.emit(SearchEvent::Success);
            return Ok(self.status);
        }

        let cells = (self.neighbours)(self.records[idx].value());
        trace!("expanding {} neighbours", cells.len());
        for cell in cells {
            match self.algorithm {
                Algorithm::AStar => a_star::expand(self, idx, cell),
                Algorithm::Dijkstra => dijkstra::expand(self, idx, cell),
                Algorithm::GreedyBestFirst => greedy::expand(self, idx, cell),
                Algorithm::Backtracking => backtracking::expand(self, idx, cell),
                Algorithm::Bfs => bfs::expand(self, idx, cell),
            }
        }

        self.status = Status::Running;
        self.emit(SearchEvent::Running);
        Ok(self.status)
    }

    /// Return a terminal (or never-initialised) finder to `NotInitialised`.
    /// Returns false while a search is running - an in-flight search is
    /// never silently discarded.
    pub fn reset(&mut self) -> bool {
        if self.status == Status::Running {
            return false;
        }
        self.clear();
        self.status = Status::NotInitialised;
        true
    }

    /// Swap the strategy. Tears the search state down to `NotInitialised`
    /// with a fresh open container; rejected while a search is running.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> bool {
        if self.status == Status::Running {
            return false;
        }
        self.algorithm = algorithm;
        self.clear();
        self.status = Status::NotInitialised;
        true
    }

    fn clear(&mut self) {
        self.records.clear();
        self.current = None;
        self.open = self.algorithm.open_list();
        self.open_index.clear();
        self.closed.clear();
        self.start = None;
        self.goal = None;
    }

    /// Insert an arena record into the open container and index it
    pub(super) fn open_push(&mut self, idx: usize) {
        let (value, g, h, f) = {
            let record = &self.records[idx];
            (
                record.value().clone(),
                record.g_cost(),
                record.h_cost(),
                record.f_cost(),
            )
        };
        match &mut self.open {
            OpenList::Heap(queue) => {
                let priority = match self.algorithm {
                    Algorithm::GreedyBestFirst => (h, g),
                    _ => (f, h),
                };
                queue.enqueue(idx, priority);
            }
            OpenList::Scan(list) | OpenList::Stack(list) => list.push(idx),
            OpenList::Queue(queue) => queue.push_back(idx),
        }
        self.open_index.insert(value, idx);
    }

    /// Pop the next record to expand, per the strategy's ordering
    fn pop_least(&mut self) -> Option<usize> {
        let idx = match &mut self.open {
            OpenList::Heap(queue) => queue.dequeue().ok()?.0,
            OpenList::Scan(list) => dijkstra::take_least(list, &self.records)?,
            OpenList::Stack(list) => list.pop()?,
            OpenList::Queue(queue) => queue.pop_front()?,
        };
        let value = self.records[idx].value().clone();
        self.open_index.swap_remove(&value);
        Some(idx)
    }

    pub(super) fn push_record(&mut self, record: SearchRecord<T>) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    pub(super) fn emit(&mut self, event: SearchEvent<T>) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    fn emit_current(&mut self, idx: usize) {
        let record = &self.records[idx];
        let event = SearchEvent::CurrentChanged {
            value: record.value().clone(),
            g_cost: record.g_cost(),
            h_cost: record.h_cost(),
            f_cost: record.f_cost(),
        };
        self.emit(event);
    }

    /// Fired on every fresh open insert and on every improving relaxation
    pub(super) fn emit_open(&mut self, idx: usize) {
        let record = &self.records[idx];
        let event = SearchEvent::AddedToOpen {
            value: record.value().clone(),
            g_cost: record.g_cost(),
            h_cost: record.h_cost(),
            f_cost: record.f_cost(),
        };
        self.emit(event);
    }
}
