// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Lower edge of the smooth-scale band.
pub const MIN_SCALE: f64 = 0.8;

/// Upper edge of the smooth-scale band.
pub const MAX_SCALE: f64 = 1.2;

/// Viewport over the unbounded world plane.
///
/// `Viewport` maps world coordinates into a view rectangle through
/// `view = offset + world * scale`, where `offset` is the view-space
/// position of world `(0, 0)`. Scale is clamped into
/// [`MIN_SCALE`]`..=`[`MAX_SCALE`]; there are no world bounds to clamp
/// panning against because the plane tiles forever in every direction.
#[derive(Clone, Debug)]
pub struct Viewport {
    view_rect: Rect,
    offset: Vec2,
    scale: f64,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Viewport {
    /// Creates a viewport covering `view_rect` with the world origin at the
    /// view center and scale `1.0`.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        let mut vp = Self {
            view_rect,
            offset: view_rect.center().to_vec2(),
            scale: 1.0,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the current view rectangle in device coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the view rectangle in device coordinates (host resize).
    ///
    /// Offset and scale are untouched, so the world region under the view
    /// grows or shrinks at the far edges.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
    }

    /// Returns the view-space position of world `(0, 0)`.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Sets the view-space position of world `(0, 0)` directly.
    pub fn set_offset(&mut self, offset: Vec2) {
        if self.offset == offset {
            return;
        }
        self.offset = offset;
        self.rebuild_transforms();
    }

    /// Pans by a delta in view/device space.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.offset += delta;
        self.rebuild_transforms();
    }

    /// Returns the current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale factor, clamping it into the band.
    ///
    /// Out-of-band requests are absorbed silently; saturation detection for
    /// density coupling is the caller's concern.
    pub fn set_scale(&mut self, scale: f64) {
        let clamped = scale.clamp(MIN_SCALE, MAX_SCALE);
        let delta = self.scale - clamped;
        if (-f64::EPSILON..=f64::EPSILON).contains(&delta) {
            return;
        }
        self.scale = clamped;
        self.rebuild_transforms();
    }

    /// Converts a world-space point into view/device coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a view/device-space point into world coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// Converts a world-space rectangle into view/device coordinates.
    #[must_use]
    pub fn world_to_view_rect(&self, rect: Rect) -> Rect {
        // The transform is axis-aligned with positive uniform scale, so
        // mapping the two extreme corners is exact.
        let p0 = self.world_to_view * Point::new(rect.x0, rect.y0);
        let p1 = self.world_to_view * Point::new(rect.x1, rect.y1);
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// Returns the world-space rectangle currently visible through the view.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let p0 = self.view_to_world * Point::new(self.view_rect.x0, self.view_rect.y0);
        let p1 = self.view_to_world * Point::new(self.view_rect.x1, self.view_rect.y1);
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// Adjusts the offset so `world_pt` lands exactly at the view center.
    pub fn center_world_point(&mut self, world_pt: Point) {
        let center = self.view_rect.center().to_vec2();
        self.set_offset(center - world_pt.to_vec2() * self.scale);
    }

    /// The offset that would place `world_pt` at view position `view_pt`
    /// under `scale`, without applying it.
    ///
    /// This is the anchor-preservation equation used by zoom: solve
    /// `view = offset + world * scale` for `offset`.
    #[must_use]
    pub fn offset_anchoring(world_pt: Point, view_pt: Point, scale: f64) -> Vec2 {
        view_pt.to_vec2() - world_pt.to_vec2() * scale
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            view_rect: self.view_rect,
            visible_world_rect: self.visible_world_rect(),
            offset: self.offset,
            scale: self.scale,
        }
    }

    fn rebuild_transforms(&mut self) {
        // World → view: scale about the world origin, then translate it to
        // its view position.
        self.world_to_view = Affine::translate(self.offset) * Affine::scale(self.scale);
        self.view_to_world = self.world_to_view.inverse();
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Current view rectangle in device coordinates.
    pub view_rect: Rect,
    /// World-space rectangle currently visible through the view.
    pub visible_world_rect: Rect,
    /// View-space position of world `(0, 0)`.
    pub offset: Vec2,
    /// Current uniform scale factor.
    pub scale: f64,
}
