use pathviz_core::{Cell, GridGraph};

/// Receives a notification after each processed node.
///
/// The grid is passed read-only so that a renderer can redraw it; the
/// notifier cannot change the grid's topology mid-run.
pub trait StepNotifier {
    /// Called once per expanded node and once per reconstructed path step.
    fn step(&mut self, graph: &GridGraph);
}

impl<F: FnMut(&GridGraph)> StepNotifier for F {
    #[inline]
    fn step(&mut self, graph: &GridGraph) {
        self(graph)
    }
}

/// A notifier that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl StepNotifier for Silent {
    #[inline]
    fn step(&mut self, _graph: &GridGraph) {}
}

/// Asked once per iteration, before dequeuing, whether to abort the run.
pub trait CancellationPoll {
    fn is_cancelled(&mut self) -> bool;
}

impl<F: FnMut() -> bool> CancellationPoll for F {
    #[inline]
    fn is_cancelled(&mut self) -> bool {
        self()
    }
}

/// A poll that never cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct Never;

impl CancellationPoll for Never {
    #[inline]
    fn is_cancelled(&mut self) -> bool {
        false
    }
}

/// A single-source, single-target search strategy over a [`GridGraph`].
///
/// A run discovers nodes from `start`, marking each newly discovered node
/// `Frontier` (the end node keeps its status) and each expanded node other
/// than `start` `Visited`. When `end` is dequeued the predecessor chain is
/// walked back, marking the route `Path`, and the run returns `true`.
///
/// `false` means either that the frontier emptied without reaching `end`
/// or that `is_cancelled` returned `true`; in both cases the partial
/// marking is left in place.
///
/// Preconditions (checked only in debug builds): `start` and `end` lie in
/// the grid and its adjacency was rebuilt after the last blocked-set edit.
pub trait Traversal {
    /// Short lowercase name used in logs.
    fn name(&self) -> &'static str;

    /// Search from `start` to `end`.
    fn run(
        &mut self,
        graph: &mut GridGraph,
        start: Cell,
        end: Cell,
        on_step: &mut dyn StepNotifier,
        is_cancelled: &mut dyn CancellationPoll,
    ) -> bool;

    /// Route found by the last successful run, from the first step after
    /// `start` through `end`. Empty after a failed run or when
    /// `start == end`.
    fn path(&self) -> &[Cell];

    /// Number of nodes expanded by the last run.
    fn expanded(&self) -> usize;
}
