// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use hueplane_color::Hsl;
use hueplane_grid::LabelKey;

/// Transition events produced by [`Engine`](crate::Engine) methods.
///
/// Events are returned rather than delivered through stored callbacks;
/// hosts interpret them after each call. The buffer is a `SmallVec`, so the
/// common zero-to-two-event case allocates nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EngineEvent {
    /// The user selected a cell; carries the cell's resolved color.
    CellSelected(Hsl),
    /// The grid density changed, for the host's transient indicator.
    DensityChanged {
        /// New density value.
        value: u8,
        /// Upper density bound, for rendering the indicator as a fraction.
        max: u8,
    },
    /// A double-tap captured a color into the saved palette.
    ColorSaved {
        /// Id of the new palette entry.
        id: u64,
        /// The captured color.
        color: Hsl,
    },
    /// A tap toggled the numeric overlay for one color value.
    LabelToggled {
        /// The quantized color key that was toggled.
        key: LabelKey,
        /// Whether the label is now shown.
        visible: bool,
    },
    /// The idle snap timer was (re)armed; hosts should mirror the deadline
    /// into their timer facility and call
    /// [`Engine::on_timer`](crate::Engine::on_timer) when it lands.
    SnapScheduled {
        /// Absolute deadline in caller-time milliseconds.
        deadline_ms: u64,
    },
    /// A pending snap timer was cancelled by a newer interaction.
    SnapCancelled,
    /// An animation is running; hosts should schedule a frame callback and
    /// call [`Engine::on_frame`](crate::Engine::on_frame) from it.
    FrameRequested,
}

/// Event buffer returned by engine methods.
pub type Events = SmallVec<[EngineEvent; 4]>;
