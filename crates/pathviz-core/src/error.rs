//! Errors raised while building a grid.

use crate::geom::Cell;

/// Errors that can occur when constructing a [`GridGraph`](crate::GridGraph).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Non-positive row count, or a pixel width too small to give every
    /// row at least one pixel.
    #[error("invalid grid dimension: {rows} rows over {pixel_width} pixels")]
    InvalidDimension { rows: i32, pixel_width: i32 },
    /// More rows than a grid may hold.
    #[error("grid of {rows} rows exceeds the limit of {max}")]
    TooLarge { rows: i32, max: i32 },
    /// A text map whose lines do not form a square.
    #[error("map is not square: line {line} has {width} cells, expected {rows}")]
    NotSquare { line: usize, width: usize, rows: usize },
    /// A text map containing a character with no node status.
    #[error("map contains invalid character \u{201c}{ch}\u{201d} at {cell}")]
    InvalidChar { ch: char, cell: Cell },
    /// A text map with more than one start or end marker.
    #[error("map contains a second {marker} marker at {cell}")]
    DuplicateMarker { marker: char, cell: Cell },
}
