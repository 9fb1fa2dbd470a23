//! An interactive editing session around a [`GridGraph`].
//!
//! The board applies the editing rules of the visualizer: the first
//! painted cell becomes the start, the second the end, and every further
//! one a wall. Erasing returns a cell to unvisited. Once a run has started
//! the layout has to be cleared (or restarted) before the next one.

use pathviz_core::{Cell, GridConfig, GridError, GridGraph, NodeState};
use rand::Rng;

use crate::algorithm::Algorithm;
use crate::traits::{CancellationPoll, StepNotifier};

/// Errors returned by [`Board::run`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("no start cell placed")]
    MissingStart,
    #[error("no end cell placed")]
    MissingEnd,
    #[error("a run already started; clear or restart the board first")]
    AlreadyStarted,
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Outcome of one [`Board::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub found: bool,
    /// Whether the run stopped because the cancellation poll fired.
    pub cancelled: bool,
    pub expanded: usize,
    /// Route from the first step after start through end.
    pub path: Vec<Cell>,
}

/// Editable grid plus the currently selected strategy.
#[derive(Debug, Clone)]
pub struct Board {
    grid: GridGraph,
    algorithm: Algorithm,
    started: bool,
    last_run: Option<RunSummary>,
}

impl Board {
    /// Create a board with a fresh grid built from `config`.
    pub fn new(config: GridConfig) -> Result<Self, BoardError> {
        Ok(Self::from_grid(config.build()?))
    }

    /// Wrap an existing grid, e.g. one loaded from a text map.
    pub fn from_grid(grid: GridGraph) -> Self {
        Self {
            grid,
            algorithm: Algorithm::default(),
            started: false,
            last_run: None,
        }
    }

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &GridGraph {
        &self.grid
    }

    /// The selected strategy.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Whether a run has started since the last clear/restart.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Summary of the most recent run.
    pub fn last_run(&self) -> Option<&RunSummary> {
        self.last_run.as_ref()
    }

    /// Primary-button edit of `cell`: place the start, then the end, then
    /// walls. Start and end cells are never overwritten. Returns the status
    /// written, if any.
    pub fn paint(&mut self, cell: Cell) -> Option<NodeState> {
        if !self.grid.contains(cell) {
            return None;
        }
        let is_start = self.grid.start() == Some(cell);
        let is_end = self.grid.end() == Some(cell);
        let status = if self.grid.start().is_none() && !is_end {
            NodeState::Start
        } else if self.grid.end().is_none() && !is_start {
            NodeState::End
        } else if !is_start && !is_end {
            NodeState::Blocked
        } else {
            return None;
        };
        self.grid.set_status(cell, status);
        Some(status)
    }

    /// Secondary-button edit of `cell`: back to unvisited, forgetting the
    /// start or end if it was one.
    pub fn erase(&mut self, cell: Cell) {
        self.grid.reset_cell(cell);
    }

    /// Select a strategy. Ignored while a run has started.
    pub fn select(&mut self, algorithm: Algorithm) -> bool {
        if self.started {
            return false;
        }
        self.algorithm = algorithm;
        true
    }

    /// Rebuild the whole grid with the same dimensions.
    pub fn clear(&mut self) {
        self.grid.reset();
        self.started = false;
        self.last_run = None;
        log::info!("board cleared");
    }

    /// Remove the marks of the last run, keeping walls, start and end.
    pub fn restart(&mut self) {
        let cleared = self.grid.clear_search();
        self.started = false;
        log::info!("board restarted, {cleared} marks cleared");
    }

    /// Block each unvisited cell with probability `density` (clamped to
    /// `0.0..=1.0`). Returns the number of cells blocked.
    pub fn scatter_walls<R: Rng>(&mut self, rng: &mut R, density: f64) -> usize {
        let density = density.clamp(0.0, 1.0);
        let targets: Vec<Cell> = self
            .grid
            .cells()
            .filter(|&(_, s)| s == NodeState::Unvisited)
            .map(|(c, _)| c)
            .collect();
        let mut placed = 0;
        for cell in targets {
            if rng.random_bool(density) {
                self.grid.set_status(cell, NodeState::Blocked);
                placed += 1;
            }
        }
        log::debug!("scattered {placed} walls at density {density:.2}");
        placed
    }

    /// Rebuild the adjacency and run the selected strategy between the
    /// placed start and end.
    pub fn run(
        &mut self,
        on_step: &mut dyn StepNotifier,
        is_cancelled: &mut dyn CancellationPoll,
    ) -> Result<&RunSummary, BoardError> {
        if self.started {
            return Err(BoardError::AlreadyStarted);
        }
        let start = self.grid.start().ok_or(BoardError::MissingStart)?;
        let end = self.grid.end().ok_or(BoardError::MissingEnd)?;

        self.started = true;
        self.grid.rebuild_adjacency();

        let mut cancelled = false;
        let mut poll = || {
            cancelled = is_cancelled.is_cancelled();
            cancelled
        };
        let mut traversal = self.algorithm.traversal();
        let found = traversal.run(&mut self.grid, start, end, on_step, &mut poll);

        log::info!(
            "{} from {start} to {end}: {}, {} expanded, path length {}",
            self.algorithm.label(),
            if found {
                "found"
            } else if cancelled {
                "cancelled"
            } else {
                "no path"
            },
            traversal.expanded(),
            traversal.path().len()
        );
        Ok(self.last_run.insert(RunSummary {
            algorithm: self.algorithm,
            found,
            cancelled,
            expanded: traversal.expanded(),
            path: traversal.path().to_vec(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Never, Silent};
    use rand::SeedableRng;

    fn board(rows: i32) -> Board {
        Board::new(GridConfig::new(rows, rows * 10)).unwrap()
    }

    #[test]
    fn paint_places_start_end_then_walls() {
        let mut b = board(4);
        assert_eq!(b.paint(Cell::new(0, 0)), Some(NodeState::Start));
        assert_eq!(b.paint(Cell::new(0, 0)), None);
        assert_eq!(b.paint(Cell::new(3, 3)), Some(NodeState::End));
        assert_eq!(b.paint(Cell::new(1, 1)), Some(NodeState::Blocked));
        assert_eq!(b.paint(Cell::new(3, 3)), None);
        assert_eq!(b.paint(Cell::new(9, 9)), None);
        assert_eq!(b.grid().start(), Some(Cell::new(0, 0)));
        assert_eq!(b.grid().end(), Some(Cell::new(3, 3)));
    }

    #[test]
    fn erase_frees_start_for_next_paint() {
        let mut b = board(4);
        b.paint(Cell::new(0, 0));
        b.paint(Cell::new(3, 3));
        b.erase(Cell::new(0, 0));
        assert_eq!(b.grid().start(), None);
        assert_eq!(b.paint(Cell::new(2, 2)), Some(NodeState::Start));
    }

    #[test]
    fn painting_end_cell_first_when_start_missing() {
        let mut b = board(3);
        b.paint(Cell::new(0, 0));
        b.paint(Cell::new(2, 2));
        b.erase(Cell::new(0, 0));
        // The end cell cannot become the start.
        assert_eq!(b.paint(Cell::new(2, 2)), None);
        assert_eq!(b.grid().end(), Some(Cell::new(2, 2)));
    }

    #[test]
    fn run_requires_start_and_end() {
        let mut b = board(3);
        assert_eq!(
            b.run(&mut Silent, &mut Never).unwrap_err(),
            BoardError::MissingStart
        );
        b.paint(Cell::new(0, 0));
        assert_eq!(
            b.run(&mut Silent, &mut Never).unwrap_err(),
            BoardError::MissingEnd
        );
        assert!(!b.is_started());
    }

    #[test]
    fn run_builds_adjacency_and_locks_selection() {
        let mut b = board(5);
        b.paint(Cell::new(0, 0));
        b.paint(Cell::new(4, 4));
        assert!(b.select(Algorithm::Bfs));
        let summary = b.run(&mut Silent, &mut Never).unwrap().clone();
        assert!(summary.found);
        assert!(!summary.cancelled);
        assert_eq!(summary.algorithm, Algorithm::Bfs);
        assert_eq!(summary.path.len(), 8);
        assert!(b.is_started());
        assert!(!b.select(Algorithm::Dfs));
        assert_eq!(
            b.run(&mut Silent, &mut Never).unwrap_err(),
            BoardError::AlreadyStarted
        );
    }

    #[test]
    fn walls_painted_before_run_are_respected() {
        let mut b = board(3);
        b.paint(Cell::new(0, 0));
        b.paint(Cell::new(2, 2));
        for col in 0..3 {
            b.paint(Cell::new(1, col));
        }
        let summary = b.run(&mut Silent, &mut Never).unwrap();
        assert!(!summary.found);
        assert!(!summary.cancelled);
    }

    #[test]
    fn cancelled_run_is_reported() {
        let mut b = board(6);
        b.paint(Cell::new(0, 0));
        b.paint(Cell::new(5, 5));
        let summary = b.run(&mut Silent, &mut || true).unwrap();
        assert!(!summary.found);
        assert!(summary.cancelled);
        assert_eq!(summary.expanded, 0);
    }

    #[test]
    fn restart_allows_another_algorithm() {
        let mut b = board(5);
        b.paint(Cell::new(0, 0));
        b.paint(Cell::new(4, 4));
        b.run(&mut Silent, &mut Never).unwrap();
        b.restart();
        assert_eq!(b.grid().count(NodeState::Path), 0);
        assert_eq!(b.grid().count(NodeState::Visited), 0);
        assert!(b.select(Algorithm::Dfs));
        let summary = b.run(&mut Silent, &mut Never).unwrap();
        assert!(summary.found);
        assert_eq!(summary.algorithm, Algorithm::Dfs);
    }

    #[test]
    fn clear_resets_everything() {
        let mut b = board(4);
        b.paint(Cell::new(0, 0));
        b.paint(Cell::new(3, 3));
        b.paint(Cell::new(1, 1));
        b.run(&mut Silent, &mut Never).unwrap();
        b.clear();
        assert!(!b.is_started());
        assert!(b.last_run().is_none());
        assert_eq!(b.grid().count(NodeState::Unvisited), 16);
        assert_eq!(b.paint(Cell::new(2, 2)), Some(NodeState::Start));
    }

    #[test]
    fn scatter_walls_skips_layout_cells() {
        let mut b = board(8);
        b.paint(Cell::new(0, 0));
        b.paint(Cell::new(7, 7));
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        assert_eq!(b.scatter_walls(&mut rng, 1.0), 62);
        assert_eq!(b.grid().start(), Some(Cell::new(0, 0)));
        assert_eq!(b.grid().end(), Some(Cell::new(7, 7)));
        assert_eq!(b.scatter_walls(&mut rng, 0.5), 0);
    }
}
