//! Breadth-first expansion rule.
//! https://en.wikipedia.org/wiki/Breadth-first_search
//!
//! Open list: a FIFO queue; otherwise structurally the same as
//! backtracking (membership guards on both open and closed, h fixed at 0,
//! g recorded for reporting only). Finds the fewest-hops path, which is the
//! cheapest path only when every step costs the same - with weighted edges
//! it can be beaten on cumulative cost by Dijkstra.

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
