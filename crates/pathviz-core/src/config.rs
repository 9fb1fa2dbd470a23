//! Grid construction parameters.

use crate::error::GridError;
use crate::grid::GridGraph;

/// Default number of rows (and columns).
pub const DEFAULT_ROWS: i32 = 30;
/// Default drawing width in pixels of the square grid area.
pub const DEFAULT_PIXEL_WIDTH: i32 = 660;
/// Largest accepted number of rows (and columns).
pub const MAX_ROWS: i32 = 4096;

/// Dimensions of a square grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Cells per side.
    pub rows: i32,
    /// Side length of the drawing area. Each cell gets
    /// `pixel_width / rows` pixels.
    pub pixel_width: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            pixel_width: DEFAULT_PIXEL_WIDTH,
        }
    }
}

impl GridConfig {
    /// Create a new configuration.
    pub const fn new(rows: i32, pixel_width: i32) -> Self {
        Self { rows, pixel_width }
    }

    /// Check the dimensions without allocating.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.rows <= 0 || self.pixel_width < self.rows {
            return Err(GridError::InvalidDimension {
                rows: self.rows,
                pixel_width: self.pixel_width,
            });
        }
        if self.rows > MAX_ROWS {
            return Err(GridError::TooLarge {
                rows: self.rows,
                max: MAX_ROWS,
            });
        }
        Ok(())
    }

    /// Size of one cell in pixels.
    pub fn cell_size(&self) -> Result<i32, GridError> {
        self.validate()?;
        Ok(self.pixel_width / self.rows)
    }

    /// Build a fresh grid with every node unvisited.
    pub fn build(&self) -> Result<GridGraph, GridError> {
        GridGraph::create(self.rows, self.pixel_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_window_layout() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.rows, 30);
        assert_eq!(cfg.cell_size(), Ok(22));
    }

    #[test]
    fn validate_rejects_bad_dimensions() {
        assert!(GridConfig::new(0, 100).validate().is_err());
        assert!(GridConfig::new(-3, 100).validate().is_err());
        assert!(GridConfig::new(10, 9).validate().is_err());
        assert!(GridConfig::new(10, 10).validate().is_ok());
    }

    #[test]
    fn validate_rejects_oversized_grids() {
        assert!(GridConfig::new(MAX_ROWS, MAX_ROWS).validate().is_ok());
        assert_eq!(
            GridConfig::new(100_000, 100_000).validate(),
            Err(GridError::TooLarge {
                rows: 100_000,
                max: MAX_ROWS
            })
        );
    }

    #[test]
    fn build_uses_dimensions() {
        let g = GridConfig::new(4, 40).build().unwrap();
        assert_eq!(g.rows(), 4);
        assert_eq!(g.cell_size(), 10);
    }
}
