//! Path reconstruction from a predecessor map.

use std::collections::HashMap;

use pathviz_core::{Cell, GridGraph, NodeState};

use crate::traits::StepNotifier;

/// Maps each discovered cell to the cell it was discovered from. The start
/// cell maps to `None`.
pub type Predecessors = HashMap<Cell, Option<Cell>>;

/// Walk `predecessors` from `end` back to `start`, marking every cell on
/// the way `Path` (the end cell keeps its status) and notifying `on_step`
/// after each one.
///
/// Returns the route in start-to-end order, excluding `start` and
/// including `end`. The result is empty when `start == end`.
pub fn reconstruct(
    graph: &mut GridGraph,
    predecessors: &Predecessors,
    start: Cell,
    end: Cell,
    on_step: &mut dyn StepNotifier,
) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut current = end;
    while current != start {
        if graph.status(current) != NodeState::End {
            graph.set_status(current, NodeState::Path);
        }
        path.push(current);
        on_step.step(graph);
        match predecessors.get(&current).copied().flatten() {
            Some(prev) => current = prev,
            None => {
                log::error!("predecessor chain broken at {current}");
                break;
            }
        }
    }
    path.reverse();
    path
}
