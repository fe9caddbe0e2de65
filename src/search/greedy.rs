//! Greedy Best-First expansion rule.
//! https://en.wikipedia.org/wiki/Best-first_search
//!
//! Open list: indexed min-heap ordered by (h_cost, g_cost) - priority is
//! purely the estimated distance to the goal; g is tracked for path
//! reconstruction and tie-breaking only. Not optimal: a relaxation can
//! improve the reconstructed path without changing expansion order.

use super::{OpenList, PathFinder};
use super::record::SearchRecord;

use std::hash::Hash;


/// Consider one neighbour of the current record.
///
/// A neighbour equal to the goal is assigned h = 0 directly, bypassing the
/// heuristic, so it is preferred immediately on the next pop.
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
            let h = if cell == goal {
                0.0
            } else {
                (pf.heuristic)(&cell, &goal)
            };
            let idx = pf.push_record(SearchRecord::new(cell, Some(current), tentative_g, h));
            pf.open_push(idx);
            pf.emit_open(idx);
        }
        Some(idx) => {
            if tentative_g < pf.records[idx].g_cost() {
                let record = &mut pf.records[idx];
                record.set_parent(Some(current));
                record.set_g(tentative_g);
                let priority = (record.h_cost(), record.g_cost());
                if let OpenList::Heap(queue) = &mut pf.open {
                    queue.update_priority(&idx, priority);
                }
                pf.emit_open(idx);
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::search::{Algorithm, PathFinder, SearchEvent, Status};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    fn create_neighbour_fn(
        graph: HashMap<String, Vec<(String, f64)>>,
    ) -> impl Fn(&String) -> Vec<String> {
        move |node: &String| {
            graph
                .get(node)
                .map(|edges| edges.iter().map(|(n, _)| n.clone()).collect())
                .unwrap_or_default()
        }
    }

    fn create_cost_fn(
        graph: HashMap<String, Vec<(String, f64)>>,
    ) -> impl Fn(&String, &String) -> f64 {
        move |from: &String, to: &String| {
            graph
                .get(from)
                .and_then(|edges| edges.iter().find(|(n, _)| n == to))
                .map(|(_, c)| *c)
                .unwrap_or(f64::INFINITY)
        }
    }

    fn run(finder: &mut PathFinder<'_, String>) -> Status {
        let mut steps = 0;
        while finder.status() == Status::Running {
            finder.step().unwrap();
            steps += 1;
            assert!(steps < 1_000);
        }
        finder.status()
    }

    #[test]
    fn test_follows_heuristic_not_cost() {
        // The heuristic prefers B even though the route through C is
        // cheaper. Only reachability and the pinned (non-optimal) route are
        // asserted - never shortest-path optimality.
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 5.0), ("C".to_string(), 1.0)]);
        graph.insert("B".to_string(), vec![("G".to_string(), 5.0)]);
        graph.insert("C".to_string(), vec![("G".to_string(), 1.0)]);
        graph.insert("G".to_string(), vec![]);

        let estimates: HashMap<String, f64> = HashMap::from([
            ("A".to_string(), 3.0),
            ("B".to_string(), 1.0), // looks closer
            ("C".to_string(), 2.0),
            ("G".to_string(), 0.0),
        ]);

        let mut finder = PathFinder::new(
            Algorithm::GreedyBestFirst,
            create_neighbour_fn(graph.clone()),
            move |node: &String, _: &String| estimates[node],
            create_cost_fn(graph),
        );

        assert!(finder.initialise("A".to_string(), "G".to_string()));
        assert_eq!(run(&mut finder), Status::Success);
        assert_eq!(
            finder.path().unwrap(),
            vec!["A".to_string(), "B".to_string(), "G".to_string()]
        );
        // The cheaper A-C-G route (2.0) exists; greedy paid 10.0
        assert_eq!(finder.current().unwrap().g_cost(), 10.0);
    }

    #[test]
    fn test_goal_neighbour_jumps_the_queue() {
        // Every non-goal node reports a huge estimate; the goal must still
        // win the very next pop because its h is pinned to 0, not computed
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1.0), ("G".to_string(), 1.0)]);
        graph.insert("B".to_string(), vec![("G".to_string(), 1.0)]);
        graph.insert("G".to_string(), vec![]);

        let mut finder = PathFinder::new(
            Algorithm::GreedyBestFirst,
            create_neighbour_fn(graph.clone()),
            |_: &String, _: &String| 1_000.0,
            create_cost_fn(graph),
        );

        let currents = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&currents);
        finder.add_observer(move |event| {
            if let SearchEvent::CurrentChanged { value, .. } = event {
                sink.borrow_mut().push(value.clone());
            }
        });

        assert!(finder.initialise("A".to_string(), "G".to_string()));
        assert_eq!(run(&mut finder), Status::Success);

        // Initialise announces A, the first step re-pops A, the second pop
        // must already be the goal
        assert_eq!(
            *currents.borrow(),
            vec!["A".to_string(), "A".to_string(), "G".to_string()]
        );
        assert_eq!(finder.path().unwrap(), vec!["A".to_string(), "G".to_string()]);
    }

    #[test]
    fn test_relaxation_refires_open_without_reordering() {
        // B is discovered from A at g=5, then relaxed via C to g=2; the
        // improving relaxation fires the open event again
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 5.0), ("C".to_string(), 1.0)]);
        graph.insert("B".to_string(), vec![("G".to_string(), 1.0)]);
        graph.insert("C".to_string(), vec![("B".to_string(), 1.0)]);
        graph.insert("G".to_string(), vec![]);

        let estimates: HashMap<String, f64> = HashMap::from([
            ("A".to_string(), 3.0),
            ("B".to_string(), 2.0),
            ("C".to_string(), 1.0), // expanded before B
            ("G".to_string(), 0.0),
        ]);

        let mut finder = PathFinder::new(
            Algorithm::GreedyBestFirst,
            create_neighbour_fn(graph.clone()),
            move |node: &String, _: &String| estimates[node],
            create_cost_fn(graph),
        );

        let opens = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&opens);
        finder.add_observer(move |event| {
            if let SearchEvent::AddedToOpen { value, g_cost, .. } = event {
                sink.borrow_mut().push((value.clone(), *g_cost));
            }
        });

        assert!(finder.initialise("A".to_string(), "G".to_string()));
        assert_eq!(run(&mut finder), Status::Success);

        let b_events: Vec<f64> = opens
            .borrow()
            .iter()
            .filter(|(v, _)| v == "B")
            .map(|&(_, g)| g)
            .collect();
        assert_eq!(b_events, vec![5.0, 2.0]);

        assert_eq!(
            finder.path().unwrap(),
            vec!["A".to_string(), "C".to_string(), "B".to_string(), "G".to_string()]
        );
        assert_eq!(finder.current().unwrap().g_cost(), 3.0);
    }

    #[test]
    fn test_unreachable_goal() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1.0)]);
        graph.insert("B".to_string(), vec![]);
        graph.insert("G".to_string(), vec![]);

        let mut finder = PathFinder::new(
            Algorithm::GreedyBestFirst,
            create_neighbour_fn(graph.clone()),
            |_: &String, _: &String| 1.0,
            create_cost_fn(graph),
        );

        assert!(finder.initialise("A".to_string(), "G".to_string()));
        assert_eq!(run(&mut finder), Status::Failure);
    }
}
