//! Strategy selection.

use std::fmt;
use std::str::FromStr;

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::traits::Traversal;

/// The interchangeable search strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    AStar,
    Bfs,
    Dfs,
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm \u{201c}{0}\u{201d} (expected astar, bfs or dfs)")]
pub struct ParseAlgorithmError(String);

impl Algorithm {
    /// Every strategy, in selection order.
    pub const ALL: [Algorithm; 3] = [Algorithm::AStar, Algorithm::Bfs, Algorithm::Dfs];

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::AStar => "A* Algo",
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }

    /// The next strategy in selection order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::AStar => Self::Bfs,
            Self::Bfs => Self::Dfs,
            Self::Dfs => Self::AStar,
        }
    }

    /// A fresh traversal implementing this strategy.
    pub fn traversal(self) -> Box<dyn Traversal> {
        match self {
            Self::AStar => Box::new(AStar::new()),
            Self::Bfs => Box::new(Bfs::new()),
            Self::Dfs => Box::new(Dfs::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
