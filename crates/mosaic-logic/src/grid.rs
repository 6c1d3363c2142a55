//! Grid dimensions, occupancy tracking, and coordinate normalization.
//!
//! The occupancy map is a flat row-major boolean matrix owned by exactly one
//! generation pass — it is reset at the start of every pass and never shared
//! across passes. `can_place` is side-effect free; `place` is an unchecked
//! write whose rectangle the caller must have validated first.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::FIXED_EDGE_MARGIN;

/// Validated grid dimensions for one generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    width: u32,
    height: u32,
}

/// Rejected grid dimensions — width or height was not positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridSpecError {
    InvalidWidth(i32),
    InvalidHeight(i32),
}

impl fmt::Display for GridSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridSpecError::InvalidWidth(w) => write!(f, "grid width must be positive, got {}", w),
            GridSpecError::InvalidHeight(h) => write!(f, "grid height must be positive, got {}", h),
        }
    }
}

impl std::error::Error for GridSpecError {}

impl GridSpec {
    /// Validate and build a grid spec. Width and height must both be ≥ 1.
    pub fn new(width: i32, height: i32) -> Result<Self, GridSpecError> {
        if width <= 0 {
            return Err(GridSpecError::InvalidWidth(width));
        }
        if height <= 0 {
            return Err(GridSpecError::InvalidHeight(height));
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Horizontal span available to fixed tiles (width minus the edge margin).
    pub fn usable_width(&self) -> i32 {
        self.width as i32 - FIXED_EDGE_MARGIN
    }

    /// Vertical span available to fixed tiles (height minus the edge margin).
    pub fn usable_height(&self) -> i32 {
        self.height as i32 - FIXED_EDGE_MARGIN
    }
}

/// Map a possibly-negative authored coordinate to an absolute index.
///
/// Non-negative coordinates pass through unchanged; negative coordinates
/// count back from `usable_span` (so `-1` is the last valid position within
/// the span). Purely arithmetic — out-of-range results are caught later by
/// the bounds check, not here.
pub fn normalize_coord(c: i32, usable_span: i32) -> i32 {
    if c >= 0 {
        c
    } else {
        usable_span + c
    }
}

/// Grid cell count for a viewport dimension at a given cell size.
///
/// The extra cell lets the mosaic overshoot the viewport edge instead of
/// leaving a partial-cell gutter.
pub fn cells_for_viewport(dimension_px: u32, cell_px: u32) -> i32 {
    (dimension_px / cell_px) as i32 + 1
}

/// Row-major boolean occupancy matrix for one generation pass.
#[derive(Debug, Clone)]
pub struct GridOccupancy {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl GridOccupancy {
    /// Fresh all-unoccupied matrix for the given spec.
    pub fn new(spec: GridSpec) -> Self {
        let width = spec.width() as usize;
        let height = spec.height() as usize;
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Clear every cell back to unoccupied.
    pub fn reset(&mut self) {
        self.cells.fill(false);
    }

    /// True iff the rectangle lies entirely within grid bounds and every
    /// cell in it is currently unoccupied. Side-effect free.
    pub fn can_place(&self, row: i32, col: i32, width: u32, height: u32) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        let (width, height) = (width as usize, height as usize);
        if row + height > self.height || col + width > self.width {
            return false;
        }
        for r in row..row + height {
            for c in col..col + width {
                if self.cells[r * self.width + c] {
                    return false;
                }
            }
        }
        true
    }

    /// Mark every cell in the rectangle occupied.
    ///
    /// Unchecked write — the caller must have verified `can_place` first.
    /// Calling this on an invalid rectangle is a logic error.
    pub fn place(&mut self, row: u32, col: u32, width: u32, height: u32) {
        debug_assert!(self.can_place(row as i32, col as i32, width, height));
        let (row, col) = (row as usize, col as usize);
        for r in row..row + height as usize {
            for c in col..col + width as usize {
                self.cells[r * self.width + c] = true;
            }
        }
    }

    /// Unchecked accessor — `row`/`col` must lie inside the grid.
    pub fn is_occupied(&self, row: u32, col: u32) -> bool {
        debug_assert!((row as usize) < self.height && (col as usize) < self.width);
        self.cells[row as usize * self.width + col as usize]
    }

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_rejects_non_positive() {
        assert_eq!(GridSpec::new(0, 10), Err(GridSpecError::InvalidWidth(0)));
        assert_eq!(GridSpec::new(10, -3), Err(GridSpecError::InvalidHeight(-3)));
        assert!(GridSpec::new(1, 1).is_ok());
    }

    #[test]
    fn test_usable_span_reserves_margin() {
        let spec = GridSpec::new(20, 15).unwrap();
        assert_eq!(spec.usable_width(), 19);
        assert_eq!(spec.usable_height(), 14);
    }

    #[test]
    fn test_normalize_positive_passthrough() {
        assert_eq!(normalize_coord(0, 14), 0);
        assert_eq!(normalize_coord(7, 14), 7);
    }

    #[test]
    fn test_normalize_negative_from_far_edge() {
        // Height 15 → usable span 14; row -1 anchors at 13.
        assert_eq!(normalize_coord(-1, 14), 13);
        assert_eq!(normalize_coord(-3, 14), 11);
    }

    #[test]
    fn test_cells_for_viewport() {
        assert_eq!(cells_for_viewport(1920, 60), 33);
        assert_eq!(cells_for_viewport(59, 60), 1);
    }

    #[test]
    fn test_can_place_bounds() {
        let occ = GridOccupancy::new(GridSpec::new(5, 4).unwrap());
        assert!(occ.can_place(0, 0, 5, 4));
        assert!(!occ.can_place(0, 0, 6, 1));
        assert!(!occ.can_place(3, 0, 1, 2));
        assert!(!occ.can_place(-1, 0, 1, 1));
        assert!(!occ.can_place(0, -2, 1, 1));
    }

    #[test]
    fn test_place_marks_and_blocks() {
        let mut occ = GridOccupancy::new(GridSpec::new(5, 4).unwrap());
        occ.place(1, 1, 2, 2);
        assert!(occ.is_occupied(1, 1));
        assert!(occ.is_occupied(2, 2));
        assert!(!occ.is_occupied(0, 0));
        assert!(!occ.can_place(0, 0, 2, 2)); // overlaps (1,1)
        assert!(occ.can_place(3, 0, 5, 1));
    }

    #[test]
    #[should_panic]
    fn test_is_occupied_out_of_bounds_panics() {
        let occ = GridOccupancy::new(GridSpec::new(3, 3).unwrap());
        occ.is_occupied(3, 0);
    }

    #[test]
    fn test_reset_clears() {
        let mut occ = GridOccupancy::new(GridSpec::new(3, 3).unwrap());
        occ.place(0, 0, 3, 3);
        occ.reset();
        assert!(occ.can_place(0, 0, 3, 3));
    }
}
