//! The outer loop shared by every traversal strategy.
//!
//! Strategies differ only in the order in which discovered cells leave the
//! frontier; everything else (cancellation, discovery bookkeeping, status
//! marking, reconstruction) happens here.

use pathviz_core::{Cell, GridGraph, NodeState};

use crate::path::{self, Predecessors};
use crate::traits::{CancellationPoll, StepNotifier};

/// Pending cells of one run.
pub(crate) trait Frontier {
    /// Drop every pending cell and any per-run bookkeeping.
    fn reset(&mut self);

    /// Insert the start cell.
    fn seed(&mut self, start: Cell);

    /// Remove the next cell to expand.
    fn pop(&mut self) -> Option<Cell>;

    /// Insert `neighbor`, discovered for the first time from `current`.
    fn discover(&mut self, current: Cell, neighbor: Cell, end: Cell);
}

/// Per-run scratch space, reused across runs.
#[derive(Debug, Default)]
pub(crate) struct SearchState {
    pub(crate) predecessors: Predecessors,
    pub(crate) path: Vec<Cell>,
    pub(crate) expanded: usize,
    // shared scratch buffer for neighbour queries
    nbuf: Vec<Cell>,
}

impl SearchState {
    /// Run the search loop to completion or cancellation.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn drive<F: Frontier>(
        &mut self,
        name: &str,
        frontier: &mut F,
        graph: &mut GridGraph,
        start: Cell,
        end: Cell,
        on_step: &mut dyn StepNotifier,
        is_cancelled: &mut dyn CancellationPoll,
    ) -> bool {
        debug_assert!(graph.contains(start), "start {start} outside grid");
        debug_assert!(graph.contains(end), "end {end} outside grid");
        debug_assert!(
            !graph.adjacency_is_stale(),
            "adjacency must be rebuilt before searching"
        );

        // Reset.
        self.predecessors.clear();
        self.path.clear();
        self.expanded = 0;
        frontier.reset();

        frontier.seed(start);
        self.predecessors.insert(start, None);
        log::debug!("{name}: searching {start} -> {end}");

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            if is_cancelled.is_cancelled() {
                log::debug!("{name}: cancelled after {} expansions", self.expanded);
                break 'search false;
            }
            let Some(current) = frontier.pop() else {
                break 'search false;
            };

            if current == end {
                self.path = path::reconstruct(graph, &self.predecessors, start, end, on_step);
                break 'search true;
            }

            nbuf.clear();
            graph.neighbors_into(current, &mut nbuf);

            for &n in nbuf.iter() {
                if self.predecessors.contains_key(&n) {
                    continue;
                }
                frontier.discover(current, n, end);
                if n != end && graph.status(n) != NodeState::End {
                    graph.set_status(n, NodeState::Frontier);
                }
                self.predecessors.insert(n, Some(current));
            }
            self.expanded += 1;
            log::trace!("{name}: expanded {current}");

            on_step.step(graph);

            if current != start {
                graph.set_status(current, NodeState::Visited);
            }
        };

        self.nbuf = nbuf;
        log::debug!(
            "{name}: {} after {} expansions, path length {}",
            if found { "reached end" } else { "stopped" },
            self.expanded,
            self.path.len()
        );
        found
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use pathviz_core::{Cell, GridGraph, NodeState, parse_map};

    use crate::traits::{Never, Silent, Traversal};

    /// Open `n × n` grid with start and end placed and adjacency built.
    pub(crate) fn open_grid(n: i32, start: Cell, end: Cell) -> GridGraph {
        let mut g = GridGraph::create(n, n * 10).unwrap();
        g.set_status(start, NodeState::Start);
        g.set_status(end, NodeState::End);
        g.rebuild_adjacency();
        g
    }

    /// Parse a text map and build its adjacency.
    pub(crate) fn map(text: &str) -> GridGraph {
        let mut g = parse_map(text, 10).unwrap();
        g.rebuild_adjacency();
        g
    }

    /// Run `t` between the grid's start and end without callbacks.
    pub(crate) fn run_quiet(t: &mut dyn Traversal, g: &mut GridGraph) -> bool {
        let start = g.start().unwrap();
        let end = g.end().unwrap();
        t.run(g, start, end, &mut Silent, &mut Never)
    }

    /// Assert `path` is a chain of adjacent, unblocked cells leading from
    /// `start` to `end`.
    pub(crate) fn assert_connected(g: &GridGraph, start: Cell, end: Cell, path: &[Cell]) {
        let mut prev = start;
        for &c in path {
            assert!(prev.is_adjacent(c), "{prev} -> {c} is not a single step");
            assert_ne!(g.status(c), NodeState::Blocked, "{c} is blocked");
            prev = c;
        }
        assert_eq!(prev, end);
    }
}
