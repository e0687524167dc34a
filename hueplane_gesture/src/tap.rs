// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap and double-tap recognition over cell addresses.

use hueplane_grid::CellAddress;

/// Maximum interval between two taps forming a double-tap.
pub const DOUBLE_TAP_MS: u64 = 300;

/// How a registered tap classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TapKind {
    Single,
    Double,
}

/// Remembers the previous tap to pair double-taps.
///
/// After a successful double-tap the memory clears, so a third tap inside
/// the window starts a fresh pair rather than chaining a second double.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct TapTracker {
    last: Option<(CellAddress, u64)>,
}

impl TapTracker {
    pub(crate) fn register(&mut self, address: CellAddress, now_ms: u64) -> TapKind {
        match self.last.take() {
            Some((prev, at))
                if prev == address && now_ms.saturating_sub(at) <= DOUBLE_TAP_MS =>
            {
                TapKind::Double
            }
            _ => {
                self.last = Some((address, now_ms));
                TapKind::Single
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DOUBLE_TAP_MS, TapKind, TapTracker};
    use hueplane_grid::CellAddress;

    #[test]
    fn pairs_taps_on_the_same_cell_within_the_window() {
        let mut tracker = TapTracker::default();
        let cell = CellAddress::new(3, -2);

        assert_eq!(tracker.register(cell, 1_000), TapKind::Single);
        assert_eq!(tracker.register(cell, 1_000 + DOUBLE_TAP_MS), TapKind::Double);
    }

    #[test]
    fn a_third_tap_starts_a_fresh_pair() {
        let mut tracker = TapTracker::default();
        let cell = CellAddress::new(3, -2);

        tracker.register(cell, 0);
        assert_eq!(tracker.register(cell, 100), TapKind::Double);
        // Within the window of the second tap, but the pair was consumed.
        assert_eq!(tracker.register(cell, 200), TapKind::Single);
        assert_eq!(tracker.register(cell, 300), TapKind::Double);
    }

    #[test]
    fn different_cells_or_late_taps_do_not_pair() {
        let mut tracker = TapTracker::default();

        tracker.register(CellAddress::new(0, 0), 0);
        assert_eq!(
            tracker.register(CellAddress::new(1, 0), 100),
            TapKind::Single
        );

        tracker.register(CellAddress::new(1, 0), 1_000);
        assert_eq!(
            tracker.register(CellAddress::new(1, 0), 1_000 + DOUBLE_TAP_MS + 1),
            TapKind::Single
        );
    }
}
