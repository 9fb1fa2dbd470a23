//! Per-node search status.

use std::fmt;

/// Status of a single grid node.
///
/// `Start`, `End` and `Blocked` describe the layout edited by the user. The
/// search marks discovered nodes `Frontier`, expanded nodes `Visited`, and
/// finally the reconstructed route `Path`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    #[default]
    Unvisited,
    Start,
    End,
    Blocked,
    /// Discovered, pending expansion.
    Frontier,
    /// Expanded, closed to re-expansion.
    Visited,
    Path,
}

impl NodeState {
    /// Every variant, in declaration order.
    pub const ALL: [NodeState; 7] = [
        NodeState::Unvisited,
        NodeState::Start,
        NodeState::End,
        NodeState::Blocked,
        NodeState::Frontier,
        NodeState::Visited,
        NodeState::Path,
    ];

    /// Whether this status was written by a search run (and is therefore
    /// disposable between runs).
    #[inline]
    pub fn is_search_mark(self) -> bool {
        matches!(self, Self::Frontier | Self::Visited | Self::Path)
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unvisited => "unvisited",
            Self::Start => "start",
            Self::End => "end",
            Self::Blocked => "blocked",
            Self::Frontier => "frontier",
            Self::Visited => "visited",
            Self::Path => "path",
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unvisited() {
        assert_eq!(NodeState::default(), NodeState::Unvisited);
    }

    #[test]
    fn only_search_statuses_are_marks() {
        let marks: Vec<_> = NodeState::ALL
            .into_iter()
            .filter(|s| s.is_search_mark())
            .collect();
        assert_eq!(
            marks,
            vec![NodeState::Frontier, NodeState::Visited, NodeState::Path]
        );
    }
}
