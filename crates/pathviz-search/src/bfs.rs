use std::collections::VecDeque;

use pathviz_core::{Cell, GridGraph};

use crate::search::{Frontier, SearchState};
use crate::traits::{CancellationPoll, StepNotifier, Traversal};

impl Frontier for VecDeque<Cell> {
    fn reset(&mut self) {
        self.clear();
    }

    fn seed(&mut self, start: Cell) {
        self.push_back(start);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.pop_front()
    }

    fn discover(&mut self, _current: Cell, neighbor: Cell, _end: Cell) {
        self.push_back(neighbor);
    }
}

/// Breadth-first search.
///
/// Cells leave a FIFO queue in discovery order, so the first time the end
/// cell is dequeued its predecessor chain is a minimum-hop route. A cell
/// is enqueued at most once.
#[derive(Debug, Default)]
pub struct Bfs {
    state: SearchState,
    queue: VecDeque<Cell>,
}

impl Bfs {
    /// Create a new breadth-first traversal.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Traversal for Bfs {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn run(
        &mut self,
        graph: &mut GridGraph,
        start: Cell,
        end: Cell,
        on_step: &mut dyn StepNotifier,
        is_cancelled: &mut dyn CancellationPoll,
    ) -> bool {
        self.state.drive(
            "bfs",
            &mut self.queue,
            graph,
            start,
            end,
            on_step,
            is_cancelled,
        )
    }

    fn path(&self) -> &[Cell] {
        &self.state.path
    }

    fn expanded(&self) -> usize {
        self.state.expanded
    }
}
