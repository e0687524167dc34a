// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hueplane_gesture --heading-base-level=0

//! Hueplane Gesture: the interaction engine over the color plane.
//!
//! [`Engine`] arbitrates raw pointer and keyboard input into the pan, zoom,
//! and selection semantics of the infinite swatch grid:
//!
//! - **Pan**: one pointer drags the plane; arrow keys nudge it.
//! - **Pinch-zoom**: two pointers scale the view around the selected cell.
//!   The scale band is deliberately narrow — once it saturates, continued
//!   pinch travel modulates the grid *density* instead, live and
//!   proportionally. Wheel notches step density by one at the band edges;
//!   keyboard zoom stays inside the band and never touches density.
//! - **Tap vs. drag vs. double-tap**: a release within [`TAP_SLOP_PX`] of
//!   its press is a tap; taps select the cell and toggle its value label; a
//!   second tap on the same cell within [`DOUBLE_TAP_MS`] saves the color
//!   instead.
//! - **Idle snap**: [`SNAP_IDLE_MS`] after the last pan the view glides the
//!   nearest cell center onto the view center over [`SNAP_ANIM_MS`]
//!   (ease-out cubic). Any new interaction cancels the pending timer or
//!   in-flight animation before changing state.
//!
//! ## Host contract
//!
//! The engine is headless and owns no clocks, timers, or frame loops. Every
//! entry point takes the current time in caller-chosen milliseconds, runs
//! synchronously to completion, and returns [`EngineEvent`]s describing
//! what the host should do next: re-render, mirror a timer deadline
//! ([`EngineEvent::SnapScheduled`] → [`Engine::on_timer`]), or keep a frame
//! loop alive ([`EngineEvent::FrameRequested`] → [`Engine::on_frame`]).
//! Events arrive in the returned buffer instead of stored callbacks, so
//! hosts stay free to route them however they like.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use hueplane_gesture::{Engine, EngineEvent, PointerButton, PointerId};
//!
//! let mut engine = Engine::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! engine.set_hue(210.0);
//!
//! // Tap the cell under the view center: select it and toggle its label.
//! let center = Point::new(400.0, 300.0);
//! engine.on_pointer_down(PointerId(1), PointerButton::Primary, center, 1_000);
//! let events = engine.on_pointer_up(PointerId(1), center, 1_050);
//!
//! assert!(matches!(events[0], EngineEvent::CellSelected(_)));
//! assert!(matches!(events[1], EngineEvent::LabelToggled { visible: true, .. }));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod engine;
mod events;
mod keyboard;
mod pointer;
mod tap;

pub use engine::{
    Engine, EngineDebugInfo, KEY_PAN_STEP_PX, KEY_SCALE_STEP, PINCH_DENSITY_PX, SNAP_ANIM_MS,
    SNAP_IDLE_MS, TAP_SLOP_PX, WHEEL_SCALE_STEP,
};
pub use events::{EngineEvent, Events};
pub use keyboard::{Modifiers, NavKey};
pub use pointer::{GestureMode, PointerButton, PointerId, PointerSession};
pub use tap::DOUBLE_TAP_MS;
