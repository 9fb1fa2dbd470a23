//! Graph-search strategies over a [`GridGraph`](pathviz_core::GridGraph).
//!
//! This crate provides three interchangeable single-source, single-target
//! traversals sharing one contract ([`Traversal`]):
//!
//! - **BFS** minimum-hop search ([`Bfs`])
//! - **DFS** depth-first search, any route ([`Dfs`])
//! - **A\*** Manhattan-guided search with first-discovery scores ([`AStar`])
//!
//! Each run marks the grid as it goes and reports progress through a
//! [`StepNotifier`], and polls a [`CancellationPoll`] once per iteration.
//! Traversal objects own their scratch maps and reuse them across runs.
//!
//! [`Board`] wraps a grid with the editing rules of the visualizer and
//! dispatches to the selected [`Algorithm`].

mod algorithm;
mod astar;
mod bfs;
mod board;
mod dfs;
mod distance;
mod path;
mod search;
mod traits;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::AStar;
pub use bfs::Bfs;
pub use board::{Board, BoardError, RunSummary};
pub use dfs::Dfs;
pub use distance::manhattan;
pub use path::{Predecessors, reconstruct};
pub use traits::{CancellationPoll, Never, Silent, StepNotifier, Traversal};
