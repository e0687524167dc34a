// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use hueplane_color::Hsl;

/// A color captured by the user, with a stable id and capture time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SavedColor {
    /// Stable identifier, unique within one [`SavedPalette`].
    pub id: u64,
    /// Hue in degrees.
    pub hue: f64,
    /// Saturation percentage.
    pub saturation: f64,
    /// Lightness percentage.
    pub lightness: f64,
    /// Caller-supplied capture timestamp in milliseconds.
    pub saved_at_ms: u64,
}

impl SavedColor {
    /// The saved color as an [`Hsl`] value.
    #[must_use]
    pub fn hsl(&self) -> Hsl {
        Hsl::new(self.hue, self.saturation, self.lightness)
    }
}

/// Insertion-ordered list of saved colors.
///
/// Entirely independent of viewport or grid state: entries are created by
/// the double-tap gesture and removed only by explicit request.
#[derive(Clone, Debug, Default)]
pub struct SavedPalette {
    items: Vec<SavedColor>,
    next_id: u64,
    revision: u64,
}

impl SavedPalette {
    /// Creates an empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a color, returning its new id.
    pub fn save(&mut self, color: Hsl, now_ms: u64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.revision += 1;
        self.items.push(SavedColor {
            id,
            hue: color.h,
            saturation: color.s,
            lightness: color.l,
            saved_at_ms: now_ms,
        });
        id
    }

    /// Removes the entry with `id`. Returns `true` if it existed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|c| c.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.revision += 1;
        }
        removed
    }

    /// The saved colors in insertion order.
    #[must_use]
    pub fn items(&self) -> &[SavedColor] {
        &self.items
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&SavedColor> {
        self.items.iter().find(|c| c.id == id)
    }

    /// Number of saved colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing has been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bumped on every mutation; cheap host-side change detection.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::SavedPalette;
    use hueplane_color::Hsl;

    #[test]
    fn save_assigns_increasing_ids_and_keeps_order() {
        let mut palette = SavedPalette::new();
        let a = palette.save(Hsl::new(10.0, 20.0, 30.0), 1_000);
        let b = palette.save(Hsl::new(40.0, 50.0, 60.0), 2_000);

        assert!(b > a);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.items()[0].id, a);
        assert_eq!(palette.items()[1].saved_at_ms, 2_000);
        assert_eq!(palette.get(b).map(|c| c.hsl()), Some(Hsl::new(40.0, 50.0, 60.0)));
    }

    #[test]
    fn remove_is_explicit_and_idempotent() {
        let mut palette = SavedPalette::new();
        let id = palette.save(Hsl::new(0.0, 0.0, 0.0), 0);

        assert!(palette.remove(id));
        assert!(palette.is_empty());
        assert!(!palette.remove(id));
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut palette = SavedPalette::new();
        let a = palette.save(Hsl::new(0.0, 0.0, 0.0), 0);
        palette.remove(a);
        let b = palette.save(Hsl::new(0.0, 0.0, 0.0), 1);
        assert_ne!(a, b);
    }

    #[test]
    fn duplicate_colors_are_distinct_entries() {
        let mut palette = SavedPalette::new();
        let c = Hsl::new(210.0, 50.0, 50.0);
        palette.save(c, 10);
        palette.save(c, 20);
        assert_eq!(palette.len(), 2);
    }
}
