//! A* expansion rule.
//! https://en.wikipedia.org/wiki/A*_search_algorithm
//!
//! Open list: indexed min-heap ordered by (f_cost, h_cost) - ties between
//! equal f go to the node estimated closer to the goal. Requires an
//! admissible heuristic for the found path to be optimal.

use super::{OpenList, PathFinder};
use super::record::SearchRecord;

use std::hash::Hash;


/// Consider one neighbour of the current record.
///
/// Skips closed values outright. A value not yet in the open list gets a
/// fresh record; one already open is relaxed (parent and g updated, heap
/// re-prioritised) only when the new route is strictly cheaper.
pub(super) fn expand<T>(pf: &mut PathFinder<'_, T>, current: usize, cell: T)
where
    T: Clone + Eq + Hash,
{
    if pf.closed.contains(&cell) {
        return;
    }
    let Some(goal) = pf.goal.clone() else {
        return;
    };

    let tentative_g = pf.records[current].g_cost()
        + (pf.traversal_cost)(pf.records[current].value(), &cell);

    match pf.open_index.get(&cell).copied() {
        None => {
            let h = (pf.heuristic)(&cell, &goal);
            let idx = pf.push_record(SearchRecord::new(cell, Some(current), tentative_g, h));
            pf.open_push(idx);
            pf.emit_open(idx);
        }
        Some(idx) => {
            if tentative_g < pf.records[idx].g_cost() {
                let record = &mut pf.records[idx];
                record.set_parent(Some(current));
                record.set_g(tentative_g);
                let priority = (record.f_cost(), record.h_cost());
                if let OpenList::Heap(queue) = &mut pf.open {
                    queue.update_priority(&idx, priority);
                }
                pf.emit_open(idx);
            }
        }
    }
}
