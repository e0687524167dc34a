// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hueplane_color::{Hsl, bounce};

use crate::cell::CellAddress;

/// Finest cell spacing in color units.
pub const MIN_DENSITY: u8 = 1;

/// Coarsest cell spacing in color units.
pub const MAX_DENSITY: u8 = 25;

/// Channel tolerance below which an external jump is a no-op.
pub const JUMP_EPSILON: f64 = 0.01;

const COLOR_MAX: f64 = 100.0;

/// Result of an external color request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpOutcome {
    /// The request differed from the selected cell's color; the origin was
    /// replaced and selection reset to `(0, 0)`.
    Rebased,
    /// The selected cell already shows the requested color (within
    /// [`JUMP_EPSILON`]); nothing changed.
    Unchanged,
}

/// Anchors cell addresses to concrete lightness/saturation values.
///
/// The origin is the real-valued `(L, S)` pair of cell `(0, 0)`; `density`
/// is the integer color-unit spacing between adjacent cells. Rebasing may
/// push origin components outside `[0, 100]` — that is fine, the `bounce`
/// fold normalizes at resolution time, and clamping here would break the
/// density-rebase invariant.
#[derive(Clone, Debug)]
pub struct GridSheet {
    origin_l: f64,
    origin_s: f64,
    density: u8,
    selected: CellAddress,
}

impl Default for GridSheet {
    /// Mid-gray origin at density 5, selection at the origin cell.
    fn default() -> Self {
        Self::new(50.0, 50.0, 5)
    }
}

impl GridSheet {
    /// Creates a sheet with the given origin color and density.
    ///
    /// Density clamps into [`MIN_DENSITY`]`..=`[`MAX_DENSITY`].
    #[must_use]
    pub fn new(origin_l: f64, origin_s: f64, density: u8) -> Self {
        Self {
            origin_l,
            origin_s,
            density: density.clamp(MIN_DENSITY, MAX_DENSITY),
            selected: CellAddress::ORIGIN,
        }
    }

    /// Returns the `(L, S)` pair anchoring cell `(0, 0)`.
    #[must_use]
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_l, self.origin_s)
    }

    /// Returns the current cell spacing in color units.
    #[must_use]
    pub fn density(&self) -> u8 {
        self.density
    }

    /// Returns the currently selected cell.
    #[must_use]
    pub fn selected(&self) -> CellAddress {
        self.selected
    }

    /// Selects a cell. The selected cell anchors zoom and rebasing.
    pub fn set_selected(&mut self, address: CellAddress) {
        self.selected = address;
    }

    /// Resolves a cell to its `(lightness, saturation)` pair.
    #[must_use]
    pub fn color_at(&self, address: CellAddress) -> (f64, f64) {
        let step = f64::from(self.density);
        (
            bounce(self.origin_l + address.col as f64 * step, COLOR_MAX),
            bounce(self.origin_s + address.row as f64 * step, COLOR_MAX),
        )
    }

    /// Resolves a cell to a full color under the given hue.
    #[must_use]
    pub fn hsl_at(&self, address: CellAddress, hue: f64) -> Hsl {
        let (l, s) = self.color_at(address);
        Hsl::new(hue, s, l)
    }

    /// Changes density, rebasing the origin so the selected cell's resolved
    /// color is unchanged.
    ///
    /// The request clamps into the density bounds. Returns `true` if the
    /// density actually changed.
    pub fn set_density(&mut self, density: u8) -> bool {
        let new = density.clamp(MIN_DENSITY, MAX_DENSITY);
        let old = self.density;
        if new == old {
            return false;
        }
        // origin += selected * (old - new) keeps origin + selected * density
        // constant on each axis, which is exactly the selected cell's color
        // argument before the bounce fold.
        let shift = f64::from(old) - f64::from(new);
        self.origin_l += self.selected.col as f64 * shift;
        self.origin_s += self.selected.row as f64 * shift;
        self.density = new;
        true
    }

    /// Handles an externally requested `(lightness, saturation)`.
    ///
    /// If the selected cell already resolves to the request within
    /// [`JUMP_EPSILON`] on both channels, nothing happens. Otherwise the
    /// origin becomes exactly the requested pair and selection resets to
    /// `(0, 0)`, making the request the color of the origin cell.
    pub fn jump_to(&mut self, lightness: f64, saturation: f64) -> JumpOutcome {
        let within = |a: f64, b: f64| {
            let d = a - b;
            (-JUMP_EPSILON..=JUMP_EPSILON).contains(&d)
        };
        let (l, s) = self.color_at(self.selected);
        if within(l, lightness) && within(s, saturation) {
            return JumpOutcome::Unchanged;
        }
        self.origin_l = lightness;
        self.origin_s = saturation;
        self.selected = CellAddress::ORIGIN;
        JumpOutcome::Rebased
    }
}

#[cfg(test)]
mod tests {
    use super::{GridSheet, JumpOutcome, MAX_DENSITY, MIN_DENSITY};
    use crate::cell::CellAddress;

    #[test]
    fn cells_resolve_through_the_bounce_fold() {
        let sheet = GridSheet::new(50.0, 50.0, 5);
        assert_eq!(sheet.color_at(CellAddress::ORIGIN), (50.0, 50.0));
        assert_eq!(sheet.color_at(CellAddress::new(1, 0)), (55.0, 50.0));
        assert_eq!(sheet.color_at(CellAddress::new(0, -2)), (50.0, 40.0));
        // 50 + 12*5 = 110 folds back down to 90.
        assert_eq!(sheet.color_at(CellAddress::new(12, 0)), (90.0, 50.0));
    }

    #[test]
    fn hsl_resolution_carries_the_ambient_hue() {
        let sheet = GridSheet::new(50.0, 50.0, 5);
        let hsl = sheet.hsl_at(CellAddress::ORIGIN, 210.0);
        assert_eq!((hsl.h, hsl.s, hsl.l), (210.0, 50.0, 50.0));
    }

    #[test]
    fn density_change_preserves_selected_color() {
        for (col, row) in [(0, 0), (3, -2), (-7, 11), (40, 40)] {
            let mut sheet = GridSheet::new(37.5, 62.5, 12);
            sheet.set_selected(CellAddress::new(col, row));
            let before = sheet.color_at(sheet.selected());

            assert!(sheet.set_density(3));
            let after = sheet.color_at(sheet.selected());
            assert!((before.0 - after.0).abs() < 1e-9, "L drifted at ({col}, {row})");
            assert!((before.1 - after.1).abs() < 1e-9, "S drifted at ({col}, {row})");
        }
    }

    #[test]
    fn density_requests_clamp_and_report_change() {
        let mut sheet = GridSheet::default();
        assert!(!sheet.set_density(5), "same density is a no-op");
        assert!(sheet.set_density(0));
        assert_eq!(sheet.density(), MIN_DENSITY);
        assert!(sheet.set_density(200));
        assert_eq!(sheet.density(), MAX_DENSITY);
    }

    #[test]
    fn repeated_rebasing_does_not_drift() {
        let mut sheet = GridSheet::default();
        sheet.set_selected(CellAddress::new(5, -3));
        let reference = sheet.color_at(sheet.selected());
        for density in [1, 25, 13, 2, 24, 7, 5] {
            sheet.set_density(density);
            let now = sheet.color_at(sheet.selected());
            assert!((reference.0 - now.0).abs() < 1e-9);
            assert!((reference.1 - now.1).abs() < 1e-9);
        }
    }

    #[test]
    fn jump_rebases_when_outside_epsilon() {
        // Selected (2, 1) under origin (50, 50), density 5 resolves to
        // (60, 55); a request for L=30, S=80 differs well past epsilon.
        let mut sheet = GridSheet::new(50.0, 50.0, 5);
        sheet.set_selected(CellAddress::new(2, 1));
        assert_eq!(sheet.color_at(sheet.selected()), (60.0, 55.0));

        assert_eq!(sheet.jump_to(30.0, 80.0), JumpOutcome::Rebased);
        assert_eq!(sheet.origin(), (30.0, 80.0));
        assert_eq!(sheet.selected(), CellAddress::ORIGIN);
        assert_eq!(sheet.color_at(CellAddress::ORIGIN), (30.0, 80.0));
    }

    #[test]
    fn jump_within_epsilon_is_a_no_op() {
        let mut sheet = GridSheet::new(50.0, 50.0, 5);
        sheet.set_selected(CellAddress::new(2, 1));
        assert_eq!(sheet.jump_to(60.005, 54.995), JumpOutcome::Unchanged);
        assert_eq!(sheet.selected(), CellAddress::new(2, 1));
        assert_eq!(sheet.origin(), (50.0, 50.0));
    }

    #[test]
    fn jump_reaches_colors_hidden_by_the_fold() {
        let mut sheet = GridSheet::new(50.0, 50.0, 25);
        sheet.set_density(1);
        // After rebasing the origin may sit far outside [0, 100]; a jump
        // still lands exactly.
        sheet.set_selected(CellAddress::new(100, 100));
        sheet.set_density(25);
        assert_eq!(sheet.jump_to(12.34, 56.78), JumpOutcome::Rebased);
        assert_eq!(sheet.color_at(CellAddress::ORIGIN), (12.34, 56.78));
    }
}
