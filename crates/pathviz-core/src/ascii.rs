//! Plain-text grid maps.
//!
//! A map is a square block of characters, one line per row:
//!
//! | Char | Status |
//! |---|---|
//! | `.` | [`Unvisited`](NodeState::Unvisited) |
//! | `#` | [`Blocked`](NodeState::Blocked) |
//! | `S` | [`Start`](NodeState::Start) |
//! | `E` | [`End`](NodeState::End) |
//! | `o` | [`Frontier`](NodeState::Frontier) |
//! | `x` | [`Visited`](NodeState::Visited) |
//! | `*` | [`Path`](NodeState::Path) |
//!
//! Leading and trailing whitespace around the whole map is ignored, as is
//! trailing whitespace on each line.

use crate::error::GridError;
use crate::geom::Cell;
use crate::grid::GridGraph;
use crate::state::NodeState;

/// Character used for `status` in text maps.
pub const fn glyph(status: NodeState) -> char {
    match status {
        NodeState::Unvisited => '.',
        NodeState::Blocked => '#',
        NodeState::Start => 'S',
        NodeState::End => 'E',
        NodeState::Frontier => 'o',
        NodeState::Visited => 'x',
        NodeState::Path => '*',
    }
}

/// Inverse of [`glyph`].
pub const fn from_glyph(ch: char) -> Option<NodeState> {
    match ch {
        '.' => Some(NodeState::Unvisited),
        '#' => Some(NodeState::Blocked),
        'S' => Some(NodeState::Start),
        'E' => Some(NodeState::End),
        'o' => Some(NodeState::Frontier),
        'x' => Some(NodeState::Visited),
        '*' => Some(NodeState::Path),
        _ => None,
    }
}

/// Parse a text map into a grid whose cells are `cell_size` pixels wide.
///
/// The returned grid's adjacency is stale; rebuild it before searching.
pub fn parse_map(text: &str, cell_size: i32) -> Result<GridGraph, GridError> {
    let lines: Vec<&str> = text.trim().lines().map(str::trim_end).collect();
    let rows = lines.len();
    let side = i32::try_from(rows).unwrap_or(i32::MAX);
    let mut grid = GridGraph::create(side, side.saturating_mul(cell_size.max(1)))?;

    for (r, line) in lines.iter().enumerate() {
        let width = line.chars().count();
        if width != rows {
            return Err(GridError::NotSquare {
                line: r,
                width,
                rows,
            });
        }
        for (c, ch) in line.chars().enumerate() {
            let cell = Cell::new(r as i32, c as i32);
            let status = from_glyph(ch).ok_or(GridError::InvalidChar { ch, cell })?;
            let taken = match status {
                NodeState::Start => grid.start().is_some(),
                NodeState::End => grid.end().is_some(),
                _ => false,
            };
            if taken {
                return Err(GridError::DuplicateMarker { marker: ch, cell });
            }
            grid.set_status(cell, status);
        }
    }
    Ok(grid)
}

/// Render a grid as a text map, one line per row, each line terminated by
/// `'\n'`.
pub fn render_map(grid: &GridGraph) -> String {
    let side = grid.rows() as usize;
    let mut out = String::with_capacity(side * (side + 1));
    for (cell, status) in grid.cells() {
        out.push(glyph(status));
        if cell.col == grid.rows() - 1 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "
S.#
.##
..E
";

    #[test]
    fn parse_reads_layout() {
        let g = parse_map(MAZE, 10).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cell_size(), 10);
        assert_eq!(g.start(), Some(Cell::new(0, 0)));
        assert_eq!(g.end(), Some(Cell::new(2, 2)));
        assert_eq!(g.count(NodeState::Blocked), 3);
        assert!(g.adjacency_is_stale());
    }

    #[test]
    fn render_is_inverse_of_parse() {
        let g = parse_map(MAZE, 4).unwrap();
        assert_eq!(render_map(&g), "S.#\n.##\n..E\n");
    }

    #[test]
    fn glyphs_cover_every_status() {
        for s in NodeState::ALL {
            assert_eq!(from_glyph(glyph(s)), Some(s));
        }
        assert_eq!(from_glyph('?'), None);
    }

    #[test]
    fn parse_rejects_bad_maps() {
        assert_eq!(
            parse_map("..\n...", 1).unwrap_err(),
            GridError::NotSquare {
                line: 1,
                width: 3,
                rows: 2
            }
        );
        assert_eq!(
            parse_map("..\n.?", 1).unwrap_err(),
            GridError::InvalidChar {
                ch: '?',
                cell: Cell::new(1, 1)
            }
        );
        assert_eq!(
            parse_map("S.\n.S", 1).unwrap_err(),
            GridError::DuplicateMarker {
                marker: 'S',
                cell: Cell::new(1, 1)
            }
        );
        assert!(matches!(
            parse_map("   ", 1),
            Err(GridError::InvalidDimension { rows: 0, .. })
        ));
    }
}
