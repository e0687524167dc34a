// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer bookkeeping: ids, buttons, gesture mode, and the live session.

use hashbrown::HashMap;
use kurbo::Point;
use smallvec::SmallVec;

/// Opaque pointer identifier assigned by the host event source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// Which button (or touch contact) a pointer-down carries.
///
/// Only [`PointerButton::Primary`] starts gestures; the others are ignored
/// by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button or a touch contact.
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button or anything else.
    Auxiliary,
}

/// The gesture the engine is currently arbitrating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureMode {
    /// No active pointers.
    #[default]
    Idle,
    /// Exactly one active pointer dragging the plane.
    Panning,
    /// Two (or more) active pointers driving pinch-zoom.
    Pinching,
}

/// Live mapping of pointer id to last known view-space position.
///
/// Insertion order is preserved so the pinch pair is stable: the first two
/// pointers down define the pinch regardless of later contacts. The session
/// is ephemeral and empties when the last pointer lifts.
#[derive(Clone, Debug, Default)]
pub struct PointerSession {
    positions: HashMap<PointerId, Point>,
    order: SmallVec<[PointerId; 2]>,
}

impl PointerSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer-down (or refreshes a known pointer's position).
    pub fn insert(&mut self, id: PointerId, pos: Point) {
        if self.positions.insert(id, pos).is_none() {
            self.order.push(id);
        }
    }

    /// Updates a known pointer's position, returning the previous one.
    ///
    /// Unknown ids (moves without a matching down) return `None` and are
    /// not tracked.
    pub fn update(&mut self, id: PointerId, pos: Point) -> Option<Point> {
        self.positions.get_mut(&id).map(|slot| {
            let prev = *slot;
            *slot = pos;
            prev
        })
    }

    /// Removes a pointer. Returns `true` if it was tracked.
    pub fn remove(&mut self, id: PointerId) -> bool {
        if self.positions.remove(&id).is_some() {
            self.order.retain(|p| *p != id);
            true
        } else {
            false
        }
    }

    /// Number of active pointers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no pointers are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Last known position of a pointer.
    #[must_use]
    pub fn position(&self, id: PointerId) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    /// Positions of the two earliest active pointers (the pinch pair).
    #[must_use]
    pub fn first_two(&self) -> Option<(Point, Point)> {
        if self.order.len() < 2 {
            return None;
        }
        let a = self.positions.get(&self.order[0])?;
        let b = self.positions.get(&self.order[1])?;
        Some((*a, *b))
    }

    /// Drops all pointers.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{PointerId, PointerSession};

    #[test]
    fn insert_update_remove_roundtrip() {
        let mut session = PointerSession::new();
        let id = PointerId(7);

        session.insert(id, Point::new(1.0, 2.0));
        assert_eq!(session.len(), 1);
        assert_eq!(session.position(id), Some(Point::new(1.0, 2.0)));

        let prev = session.update(id, Point::new(3.0, 4.0));
        assert_eq!(prev, Some(Point::new(1.0, 2.0)));
        assert_eq!(session.position(id), Some(Point::new(3.0, 4.0)));

        assert!(session.remove(id));
        assert!(session.is_empty());
        assert!(!session.remove(id));
    }

    #[test]
    fn unknown_moves_are_ignored() {
        let mut session = PointerSession::new();
        assert_eq!(session.update(PointerId(1), Point::ORIGIN), None);
        assert!(session.is_empty());
    }

    #[test]
    fn duplicate_down_does_not_double_count() {
        let mut session = PointerSession::new();
        session.insert(PointerId(1), Point::ORIGIN);
        session.insert(PointerId(1), Point::new(5.0, 5.0));
        assert_eq!(session.len(), 1);
        assert_eq!(session.position(PointerId(1)), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn pinch_pair_is_the_first_two_by_arrival() {
        let mut session = PointerSession::new();
        session.insert(PointerId(1), Point::new(0.0, 0.0));
        session.insert(PointerId(2), Point::new(10.0, 0.0));
        session.insert(PointerId(3), Point::new(99.0, 99.0));

        let (a, b) = session.first_two().unwrap();
        assert_eq!(a, Point::new(0.0, 0.0));
        assert_eq!(b, Point::new(10.0, 0.0));

        // The pair re-forms from arrival order when an early pointer lifts.
        session.remove(PointerId(1));
        let (a, b) = session.first_two().unwrap();
        assert_eq!(a, Point::new(10.0, 0.0));
        assert_eq!(b, Point::new(99.0, 99.0));
    }
}
