// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hueplane_grid --heading-base-level=0

//! Hueplane Grid: the sheet model behind the infinite swatch grid.
//!
//! A [`GridSheet`] anchors integer cell addresses to concrete colors: cell
//! `(col, row)` resolves to lightness/saturation
//! `bounce(origin + address * density, 100)` along each axis, so an
//! unbounded address space produces a bounded, seamlessly mirrored color
//! field. The sheet also owns the two rebasing rules that keep that mapping
//! stable under the user's feet:
//!
//! - **Density rebasing** ([`GridSheet::set_density`]): when the cell
//!   spacing changes, the origin shifts so the *selected* cell keeps showing
//!   the color the user was looking at.
//! - **External jump** ([`GridSheet::jump_to`]): when a collaborator
//!   requests a color the live origin cannot reach, the origin is set to
//!   exactly that color and selection resets to `(0, 0)`.
//!
//! ```rust
//! use hueplane_grid::{CellAddress, GridSheet};
//!
//! let mut sheet = GridSheet::default();
//! sheet.set_selected(CellAddress::new(2, 1));
//!
//! let before = sheet.color_at(sheet.selected());
//! sheet.set_density(9);
//! let after = sheet.color_at(sheet.selected());
//! assert!((before.0 - after.0).abs() < 1e-9);
//! assert!((before.1 - after.1).abs() < 1e-9);
//! ```
//!
//! Alongside the sheet live two small bookkeeping containers consumed by the
//! gesture layer: [`LabelSet`] (which color values currently show their
//! numeric overlay — keyed by quantized value, shared by every cell with
//! that exact color) and [`SavedPalette`] (colors captured by double-tap,
//! removed only explicitly).
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

mod cell;
mod labels;
mod palette;
mod sheet;

pub use cell::CellAddress;
pub use labels::{LabelKey, LabelSet};
pub use palette::{SavedColor, SavedPalette};
pub use sheet::{GridSheet, JUMP_EPSILON, JumpOutcome, MAX_DENSITY, MIN_DENSITY};
