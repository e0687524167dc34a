// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hueplane_virtual_grid --heading-base-level=0

//! Hueplane Virtual Grid: which cells of the infinite plane to realize.
//!
//! The plane has unboundedly many cells; only the ones intersecting the
//! viewport (plus a small overscan margin against pop-in while panning) are
//! ever materialized. This crate computes that finite set:
//!
//! - [`CellMetrics`]: cell extent in world units, plus address ↔ world
//!   position helpers.
//! - [`visible_range`]: the inclusive column/row window for a viewport.
//! - [`visible_cells`]: a lazy iterator of [`CellSlot`] descriptors (address,
//!   world rectangle, resolved color) over that window.
//!
//! The set is recomputed from scratch on every query; there is no
//! incremental diffing. Cost is proportional to the visible area, which the
//! viewport's narrow scale band keeps bounded by screen size.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use hueplane_grid::GridSheet;
//! use hueplane_view::Viewport;
//! use hueplane_virtual_grid::{CellMetrics, visible_cells, visible_range};
//!
//! let viewport = Viewport::new(Rect::new(0.0, 0.0, 640.0, 480.0));
//! let metrics = CellMetrics::default();
//! let sheet = GridSheet::default();
//!
//! let range = visible_range(&viewport, &metrics);
//! let cells: Vec<_> = visible_cells(&viewport, &metrics, &sheet, 210.0).collect();
//! assert_eq!(cells.len(), range.count());
//!
//! // Hosts draw each slot's world rect through the viewport transform.
//! let first = &cells[0];
//! assert_eq!(first.color.h, 210.0);
//! ```
//!
//! This crate is `no_std`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("hueplane_virtual_grid requires either the `std` or `libm` feature");

mod metrics;
mod visible;

#[cfg(not(feature = "std"))]
mod floatfuncs;

pub use metrics::{CellMetrics, DEFAULT_CELL_SIZE};
pub use visible::{CellRange, CellSlot, OVERSCAN_CELLS, VisibleCells, visible_cells, visible_range};
