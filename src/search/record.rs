/// Per-search bookkeeping for one discovered graph value.
///
/// Records live in the path finder's arena for the duration of a single
/// search; `parent` is an index into that arena (None for the root), which
/// is what path reconstruction walks. `f_cost` is always `g_cost + h_cost`
/// and is recomputed whenever either side changes, never set directly.
#[derive(Debug, Clone)]
pub struct SearchRecord<T> {
    value: T,
    parent: Option<usize>,
    g_cost: f64,
    h_cost: f64,
    f_cost: f64,
}

impl<T> SearchRecord<T> {
    pub(crate) fn new(value: T, parent: Option<usize>, g_cost: f64, h_cost: f64) -> Self {
        Self {
            value,
            parent,
            g_cost,
            h_cost,
            f_cost: g_cost + h_cost,
        }
    }

    /// The graph value this record wraps
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Arena index of the record this one was reached from
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Accumulated traversal cost from the start
    pub fn g_cost(&self) -> f64 {
        self.g_cost
    }

    /// Heuristic estimate of remaining cost to the goal
    pub fn h_cost(&self) -> f64 {
        self.h_cost
    }

    /// Priority key: g_cost + h_cost
    pub fn f_cost(&self) -> f64 {
        self.f_cost
    }

    /// Relaxation: a cheaper route to this value was found
    pub(crate) fn set_g(&mut self, g_cost: f64) {
        self.g_cost = g_cost;
        self.f_cost = self.g_cost + self.h_cost;
    }

    pub(crate) fn set_parent(&mut self, parent: Option<usize>) {
        self.parent = parent;
    }
}
