// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

#[cfg(not(feature = "std"))]
use crate::floatfuncs::FloatFuncs;

use hueplane_color::Hsl;
use hueplane_grid::{CellAddress, GridSheet};
use hueplane_view::Viewport;

use crate::metrics::CellMetrics;

/// Extra cells realized past each visible edge to avoid pop-in while panning.
pub const OVERSCAN_CELLS: i64 = 2;

/// Inclusive column/row window of cells to realize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRange {
    /// First column, inclusive.
    pub min_col: i64,
    /// Last column, inclusive.
    pub max_col: i64,
    /// First row, inclusive.
    pub min_row: i64,
    /// Last row, inclusive.
    pub max_row: i64,
}

impl CellRange {
    /// Returns `true` if the window contains no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min_col > self.max_col || self.min_row > self.max_row
    }

    /// Number of cells in the window.
    #[must_use]
    pub fn count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "spans are non-negative and bounded by the visible area"
        )]
        {
            ((self.max_col - self.min_col + 1) * (self.max_row - self.min_row + 1)) as usize
        }
    }

    /// Returns `true` if `address` falls inside the window.
    #[must_use]
    pub fn contains(&self, address: CellAddress) -> bool {
        (self.min_col..=self.max_col).contains(&address.col)
            && (self.min_row..=self.max_row).contains(&address.row)
    }
}

/// Computes the inclusive cell window intersecting the viewport, padded by
/// [`OVERSCAN_CELLS`] on every edge.
#[must_use]
pub fn visible_range(viewport: &Viewport, metrics: &CellMetrics) -> CellRange {
    let world = viewport.visible_world_rect();
    if world.width() <= 0.0 || world.height() <= 0.0 {
        return CellRange {
            min_col: 0,
            max_col: -1,
            min_row: 0,
            max_row: -1,
        };
    }
    CellRange {
        min_col: floor_index(world.x0 / metrics.cell_width) - OVERSCAN_CELLS,
        max_col: floor_index(world.x1 / metrics.cell_width) + OVERSCAN_CELLS,
        min_row: floor_index(world.y0 / metrics.cell_height) - OVERSCAN_CELLS,
        max_row: floor_index(world.y1 / metrics.cell_height) + OVERSCAN_CELLS,
    }
}

fn floor_index(v: f64) -> i64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "cell indices at interaction scales fit i64 comfortably"
    )]
    {
        v.floor() as i64
    }
}

/// Everything a host needs to draw one visible cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellSlot {
    /// The cell's grid address.
    pub address: CellAddress,
    /// The cell's world-space rectangle.
    pub world_rect: Rect,
    /// The cell's resolved color under the ambient hue.
    pub color: Hsl,
}

/// Lazily enumerates the visible cells of a sheet in row-major order.
///
/// Descriptors are computed on demand; collecting the iterator costs one
/// color resolution per realized cell.
#[must_use]
pub fn visible_cells<'a>(
    viewport: &Viewport,
    metrics: &CellMetrics,
    sheet: &'a GridSheet,
    hue: f64,
) -> VisibleCells<'a> {
    let range = visible_range(viewport, metrics);
    VisibleCells {
        metrics: *metrics,
        sheet,
        hue,
        col: range.min_col,
        row: if range.is_empty() {
            range.max_row + 1
        } else {
            range.min_row
        },
        range,
    }
}

/// Iterator produced by [`visible_cells`].
#[derive(Clone, Debug)]
pub struct VisibleCells<'a> {
    range: CellRange,
    metrics: CellMetrics,
    sheet: &'a GridSheet,
    hue: f64,
    col: i64,
    row: i64,
}

impl Iterator for VisibleCells<'_> {
    type Item = CellSlot;

    fn next(&mut self) -> Option<CellSlot> {
        if self.row > self.range.max_row {
            return None;
        }
        let address = CellAddress::new(self.col, self.row);
        if self.col == self.range.max_col {
            self.col = self.range.min_col;
            self.row += 1;
        } else {
            self.col += 1;
        }
        Some(CellSlot {
            address,
            world_rect: self.metrics.world_rect_of(address),
            color: self.sheet.hsl_at(address, self.hue),
        })
    }
}
