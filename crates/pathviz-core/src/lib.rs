//! **pathviz-core**: grid graph model for pathfinding visualization.
//!
//! This crate provides the data model shared by the search strategies and
//! the front ends: cell coordinates, per-node status, the square
//! [`GridGraph`] with its explicitly rebuilt neighbour cache, and a plain
//! text map format.

pub mod ascii;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod state;

pub use ascii::{parse_map, render_map};
pub use config::GridConfig;
pub use error::GridError;
pub use geom::Cell;
pub use grid::{GridGraph, Node};
pub use state::NodeState;
