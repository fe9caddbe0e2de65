//! Incrementally-steppable graph pathfinding.
//!
//! Five interchangeable search strategies (A*, Dijkstra, Greedy Best-First,
//! Backtracking/DFS, BFS) over an abstract graph of caller-defined values,
//! driven one node expansion at a time by an external caller. The engine is
//! pure, synchronous and single-threaded: the caller owns the cadence.
//!
//! ```
//! use stepfind::{Algorithm, PathFinder, Status};
//!
//! // A trivial line graph: 0 - 1 - 2
//! let neighbours = |n: &u32| match n {
//!     0 => vec![1],
//!     1 => vec![0, 2],
//!     2 => vec![1],
//!     _ => vec![],
//! };
//! let mut finder = PathFinder::new(
//!     Algorithm::AStar,
//!     neighbours,
//!     |a: &u32, b: &u32| (*a as f64 - *b as f64).abs(),
//!     |_: &u32, _: &u32| 1.0,
//! );
//! assert!(finder.initialise(0, 2));
//! while finder.status() == Status::Running {
//!     finder.step().unwrap();
//! }
//! assert_eq!(finder.status(), Status::Success);
//! assert_eq!(finder.path(), Some(vec![0, 1, 2]));
//! ```

mod collections;
pub mod errors;
pub mod geometry;
pub mod queue;
pub mod search;

pub use errors::{EmptyQueueError, SearchError};
pub use queue::IndexedPriorityQueue;
pub use search::{Algorithm, PathFinder, SearchEvent, Status};
pub use search::record::SearchRecord;
