use pathviz_core::{Cell, GridGraph};

use crate::search::{Frontier, SearchState};
use crate::traits::{CancellationPoll, StepNotifier, Traversal};

impl Frontier for Vec<Cell> {
    fn reset(&mut self) {
        self.clear();
    }

    fn seed(&mut self, start: Cell) {
        self.push(start);
    }

    fn pop(&mut self) -> Option<Cell> {
        Vec::pop(self)
    }

    fn discover(&mut self, _current: Cell, neighbor: Cell, _end: Cell) {
        self.push(neighbor);
    }
}

/// Depth-first search.
///
/// Same discovery rule as [`Bfs`](crate::Bfs) but cells leave a LIFO stack,
/// so one branch is followed until exhausted before backtracking. The
/// route returned is *a* route, not necessarily a shortest one.
#[derive(Debug, Default)]
pub struct Dfs {
    state: SearchState,
    stack: Vec<Cell>,
}

impl Dfs {
    /// Create a new depth-first traversal.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Traversal for Dfs {
    fn name(&self) -> &'static str {
        "dfs"
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
            "dfs",
            &mut self.stack,
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
