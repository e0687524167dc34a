// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

#[cfg(not(feature = "std"))]
use crate::floatfuncs::FloatFuncs;

use hueplane_grid::CellAddress;

/// Default cell extent in world units (logical pixels at scale 1).
pub const DEFAULT_CELL_SIZE: f64 = 64.0;

/// Cell extent in world units.
///
/// A cell's world position is its *center*: cell `(col, row)` sits at
/// `(col * cell_width, row * cell_height)`, so the grid is symmetric about
/// the world origin and nearest-cell queries are a plain rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMetrics {
    /// Horizontal cell extent.
    pub cell_width: f64,
    /// Vertical cell extent.
    pub cell_height: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_SIZE,
            cell_height: DEFAULT_CELL_SIZE,
        }
    }
}

impl CellMetrics {
    /// Creates metrics with the given extents.
    #[must_use]
    pub const fn new(cell_width: f64, cell_height: f64) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// World-space center of a cell.
    #[must_use]
    pub fn world_center_of(&self, address: CellAddress) -> Point {
        Point::new(
            address.col as f64 * self.cell_width,
            address.row as f64 * self.cell_height,
        )
    }

    /// World-space rectangle of a cell, centered on its world position.
    #[must_use]
    pub fn world_rect_of(&self, address: CellAddress) -> Rect {
        let center = self.world_center_of(address);
        Rect::new(
            center.x - self.cell_width / 2.0,
            center.y - self.cell_height / 2.0,
            center.x + self.cell_width / 2.0,
            center.y + self.cell_height / 2.0,
        )
    }

    /// Address of the cell whose center is nearest to a world point.
    #[must_use]
    pub fn nearest_address(&self, world: Point) -> CellAddress {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "rounded cell indices at interaction scales fit i64 comfortably"
        )]
        CellAddress::new(
            (world.x / self.cell_width).round() as i64,
            (world.y / self.cell_height).round() as i64,
        )
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::CellMetrics;
    use hueplane_grid::CellAddress;

    #[test]
    fn centers_and_rects_are_symmetric_about_origin() {
        let metrics = CellMetrics::new(64.0, 48.0);
        assert_eq!(
            metrics.world_center_of(CellAddress::ORIGIN),
            Point::new(0.0, 0.0)
        );
        assert_eq!(
            metrics.world_center_of(CellAddress::new(-2, 3)),
            Point::new(-128.0, 144.0)
        );

        let rect = metrics.world_rect_of(CellAddress::ORIGIN);
        assert_eq!((rect.x0, rect.x1), (-32.0, 32.0));
        assert_eq!((rect.y0, rect.y1), (-24.0, 24.0));
    }

    #[test]
    fn nearest_address_rounds_to_cell_centers() {
        let metrics = CellMetrics::new(64.0, 64.0);
        assert_eq!(
            metrics.nearest_address(Point::new(0.0, 0.0)),
            CellAddress::ORIGIN
        );
        assert_eq!(
            metrics.nearest_address(Point::new(31.0, -31.0)),
            CellAddress::ORIGIN
        );
        assert_eq!(
            metrics.nearest_address(Point::new(33.0, -33.0)),
            CellAddress::new(1, -1)
        );
    }
}
