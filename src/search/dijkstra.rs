//! Dijkstra (uniform-cost) expansion rule.
//! https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! A* with h fixed at 0 for every record, and a plain list scanned linearly
//! for the least-cost node instead of a heap. The O(n) extraction is kept
//! on purpose as the simpler reference implementation.

use super::PathFinder;
use super::record::SearchRecord;

use std::hash::Hash;


/// Consider one neighbour of the current record. Same G-relaxation rule as
/// A*, but no heap to re-prioritise: the scan sees the updated cost.
pub(super) fn expand<T>(pf: &mut PathFinder<'_, T>, current: usize, cell: T)
where
    T: Clone + Eq + Hash,
{
    if pf.closed.contains(&cell) {
        return;
    }

    let tentative_g = pf.records[current].g_cost()
        + (pf.traversal_cost)(pf.records[current].value(), &cell);

    match pf.open_index.get(&cell).copied() {
        None => {
            let idx = pf.push_record(SearchRecord::new(cell, Some(current), tentative_g, 0.0));
            pf.open_push(idx);
            pf.emit_open(idx);
        }
        Some(idx) => {
            if tentative_g < pf.records[idx].g_cost() {
                let record = &mut pf.records[idx];
                record.set_parent(Some(current));
                record.set_g(tentative_g);
                pf.emit_open(idx);
            }
        }
    }
}

/// Linear scan for the least-f record in the open list, removed in place.
/// With h pinned to 0 this is a least-g extraction.
pub(super) fn take_least<T>(open: &mut Vec<usize>, records: &[SearchRecord<T>]) -> Option<usize> {
    if open.is_empty() {
        return None;
    }
    let mut least = 0;
    for i in 1..open.len() {
        if records[open[i]].f_cost() < records[open[least]].f_cost() {
            least = i;
        }
    }
    Some(open.swap_remove(least))
}
