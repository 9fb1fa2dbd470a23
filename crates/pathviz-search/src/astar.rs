use std::collections::{BinaryHeap, HashMap};

use pathviz_core::{Cell, GridGraph};

use crate::distance::manhattan;
use crate::search::{Frontier, SearchState};
use crate::traits::{CancellationPoll, StepNotifier, Traversal};

/// Entry of the open set, ordered by `f` for use in `BinaryHeap`.
///
/// Among equal `f` the entry inserted first pops first. `BinaryHeap` itself
/// gives no guarantee for equal keys, so the insertion sequence number is
/// part of the ordering.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct OpenEntry {
    f: i32,
    seq: u64,
    cell: Cell,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
    // Same key set as the run's predecessor map: both are written together
    // when a cell is first discovered.
    g_score: HashMap<Cell, i32>,
    seq: u64,
}

impl OpenSet {
    fn push(&mut self, f: i32, cell: Cell) {
        self.heap.push(OpenEntry {
            f,
            seq: self.seq,
            cell,
        });
        self.seq += 1;
    }
}

impl Frontier for OpenSet {
    fn reset(&mut self) {
        self.heap.clear();
        self.g_score.clear();
        self.seq = 0;
    }

    fn seed(&mut self, start: Cell) {
        self.g_score.insert(start, 0);
        self.push(0, start);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.heap.pop().map(|e| e.cell)
    }

    fn discover(&mut self, current: Cell, neighbor: Cell, end: Cell) {
        let g = self.g_score.get(&current).copied().unwrap_or(0) + 1;
        self.g_score.insert(neighbor, g);
        self.push(g + manhattan(neighbor, end), neighbor);
    }
}

/// A* search guided by the [`manhattan`] heuristic.
///
/// A cell's `g` score and predecessor are fixed when it is first
/// discovered and never relaxed afterwards, even if a cheaper route to it
/// turns up later. On an unobstructed grid the route is a shortest one;
/// around obstacles it is not guaranteed to be.
#[derive(Debug, Default)]
pub struct AStar {
    state: SearchState,
    open: OpenSet,
}

impl AStar {
    /// Create a new A* traversal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Distance from start recorded for `cell` when it was discovered by
    /// the last run.
    pub fn g_score(&self, cell: Cell) -> Option<i32> {
        self.open.g_score.get(&cell).copied()
    }
}

impl Traversal for AStar {
    fn name(&self) -> &'static str {
        "astar"
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
            "astar",
            &mut self.open,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::Bfs;
    use crate::search::testutil::{assert_connected, map, open_grid, run_quiet};
    use crate::traits::{Never, Silent};
    use pathviz_core::NodeState;

    #[test]
    fn open_grid_path_is_manhattan() {
        let (start, end) = (Cell::new(0, 0), Cell::new(4, 4));
        let mut g = open_grid(5, start, end);
        let mut astar = AStar::new();
        assert!(run_quiet(&mut astar, &mut g));
        assert_eq!(astar.path().len(), 8);
        assert_connected(&g, start, end, astar.path());
        assert_eq!(astar.g_score(end), Some(8));
        assert_eq!(g.status(start), NodeState::Start);
        assert_eq!(g.status(end), NodeState::End);
    }

    #[test]
    fn equal_f_pops_in_insertion_order() {
        let (start, end) = (Cell::new(0, 0), Cell::new(2, 2));
        let mut g = open_grid(3, start, end);
        let mut astar = AStar::new();
        assert!(run_quiet(&mut astar, &mut g));
        // Every cell has f = 4, so the open set degrades to FIFO order and
        // the first-discovered chain goes down before right.
        assert_eq!(
            astar.path(),
            &[
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(2, 2)
            ]
        );
        assert_eq!(astar.expanded(), 8);
    }

    #[test]
    fn heuristic_focuses_expansion() {
        let (start, end) = (Cell::new(0, 0), Cell::new(0, 9));
        let mut g = open_grid(10, start, end);
        let mut astar = AStar::new();
        assert!(run_quiet(&mut astar, &mut g));
        assert_eq!(astar.expanded(), 9);
        // Discovered off the straight line but never expanded.
        assert_eq!(astar.g_score(Cell::new(1, 0)), Some(1));
        assert_eq!(g.status(Cell::new(1, 0)), NodeState::Frontier);

        let mut g = open_grid(10, start, end);
        let mut bfs = Bfs::new();
        assert!(run_quiet(&mut bfs, &mut g));
        assert!(bfs.expanded() > astar.expanded());
    }

    #[test]
    fn scores_are_fixed_at_discovery() {
        let mut g = map("
S....
.###.
.#...
.#.#.
...#E
");
        let mut astar = AStar::new();
        assert!(run_quiet(&mut astar, &mut g));
        // Every discovered cell's score is one more than its parent's.
        let start = Cell::new(0, 0);
        for (&cell, &pred) in astar.state.predecessors.iter() {
            match pred {
                None => assert_eq!(cell, start),
                Some(p) => assert_eq!(astar.g_score(cell), astar.g_score(p).map(|g| g + 1)),
            }
        }
        assert_eq!(astar.g_score(Cell::new(4, 4)), Some(astar.path().len() as i32));
        assert_connected(&g, start, Cell::new(4, 4), astar.path());
    }

    #[test]
    fn locked_scores_can_miss_the_shortest_route() {
        let text = "
.E...#.
###.#..
....###
......#
#.#.#..
..S..#.
......#
";
        let (start, end) = (Cell::new(5, 2), Cell::new(0, 1));
        let mut g = map(text);
        let mut astar = AStar::new();
        assert!(run_quiet(&mut astar, &mut g));
        assert_connected(&g, start, end, astar.path());
        // (2, 3) is first reached from the west, two steps longer than the
        // direct climb, and that score is never lowered.
        let detour = Cell::new(2, 3);
        assert!(astar.path().contains(&detour));
        assert_eq!(astar.g_score(detour), Some(6));
        assert_eq!(astar.path().len(), 10);
        assert_eq!(astar.g_score(end), Some(10));

        let mut g = map(text);
        let mut bfs = Bfs::new();
        assert!(run_quiet(&mut bfs, &mut g));
        assert_eq!(bfs.path().len(), 8);

        let mut g = map(text);
        let mut bfs = Bfs::new();
        assert!(bfs.run(&mut g, start, detour, &mut Silent, &mut Never));
        assert_eq!(bfs.path().len(), 4);
    }

    #[test]
    fn blocked_middle_row_fails() {
        let mut g = map("
S..
###
..E
");
        let mut astar = AStar::new();
        assert!(!run_quiet(&mut astar, &mut g));
        assert!(astar.path().is_empty());
        assert_eq!(astar.g_score(Cell::new(2, 2)), None);
        assert_eq!(g.status(Cell::new(2, 2)), NodeState::End);
    }
}
