//! Backtracking (depth-first) expansion rule.
//! https://en.wikipedia.org/wiki/Depth-first_search
//!
//! Open list: a stack; the most recently discovered neighbour is expanded
//! first. A value is pushed only if it sits in neither the closed set nor
//! the open index (a stack has no efficient membership test of its own).
//! Costs are recorded for reporting only - h is fixed at 0 and nothing
//! orders by g - so paths can be long and are asserted for reachability,
//! never optimality.

use super::PathFinder;
use super::record::SearchRecord;

use std::hash::Hash;


pub(super) fn expand<T>(pf: &mut PathFinder<'_, T>, current: usize, cell: T)
where
    T: Clone + Eq + Hash,
{
    if pf.closed.contains(&cell) || pf.open_index.contains_key(&cell) {
        return;
    }

    let g = pf.records[current].g_cost()
        + (pf.traversal_cost)(pf.records[current].value(), &cell);
    let idx = pf.push_record(SearchRecord::new(cell, Some(current), g, 0.0));
    pf.open_push(idx);
    pf.emit_open(idx);
}
