// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hueplane_view --heading-base-level=0

//! Hueplane View: the viewport model over the unbounded color plane.
//!
//! [`Viewport`] tracks a rectangular region in view/device space, the
//! view-space position of the world origin (`offset`), and a uniform scale
//! confined to a deliberately narrow band. It converts points and rectangles
//! between world and view coordinates and recenters on request.
//!
//! The narrow scale band is a design feature, not a limitation: the plane's
//! grid density carries the real zoom depth, while `scale` provides only the
//! smooth portion of zoom between density steps. The gesture layer saturates
//! the band and converts further zoom pressure into density transitions.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use hueplane_view::Viewport;
//!
//! // Device/view rect: 800x600 window; world origin starts centered.
//! let mut view = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! assert_eq!(view.world_to_view_point(Point::ORIGIN), Point::new(400.0, 300.0));
//!
//! // Drag by 30px: the world moves with the pointer.
//! view.pan_by((30.0, 0.0).into());
//! assert_eq!(view.world_to_view_point(Point::ORIGIN), Point::new(430.0, 300.0));
//!
//! // Scale requests clamp silently into the band.
//! view.set_scale(5.0);
//! assert_eq!(view.scale(), hueplane_view::MAX_SCALE);
//! ```
//!
//! Input interpretation (which pointer motions become pans, how zoom anchors
//! are chosen) lives in `hueplane_gesture`; this crate is the pure transform
//! underneath it. This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{MAX_SCALE, MIN_SCALE, Viewport, ViewportDebugInfo};
