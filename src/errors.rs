use std::fmt;


/// Dequeue was called on an empty priority queue.
///
/// The search engine always checks the open collection before extracting,
/// so hitting this from the engine signals a broken invariant in the caller
/// rather than a normal search outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueueError;

impl fmt::Display for EmptyQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dequeue called on an empty priority queue")
    }
}

impl std::error::Error for EmptyQueueError {}


/// Errors surfaced by the path finder state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    NotRunning, // Step called while the finder is not RUNNING
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRunning => {
                write!(f, "step called while no search is running")
            }
        }
    }
}

impl std::error::Error for SearchError {}
