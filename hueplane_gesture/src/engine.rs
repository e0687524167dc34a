// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Rect, Vec2};

use hueplane_color::{ColorFormat, Hsl, format_color, normalize_hue};
use hueplane_grid::{
    CellAddress, GridSheet, JumpOutcome, LabelKey, LabelSet, MAX_DENSITY, MIN_DENSITY,
    SavedPalette,
};
use hueplane_timing::{DeadlineTimer, Tween};
use hueplane_view::{MAX_SCALE, MIN_SCALE, Viewport};
use hueplane_virtual_grid::{CellMetrics, VisibleCells, visible_cells};

use crate::events::{EngineEvent, Events};
use crate::keyboard::{Modifiers, NavKey};
use crate::pointer::{GestureMode, PointerButton, PointerId, PointerSession};
use crate::tap::{TapKind, TapTracker};

/// Idle time after the last pan before the view snaps to the grid.
pub const SNAP_IDLE_MS: u64 = 3_000;

/// Duration of the snap-to-grid animation.
pub const SNAP_ANIM_MS: u64 = 600;

/// Net pointer displacement below which a press-release counts as a tap.
pub const TAP_SLOP_PX: f64 = 5.0;

/// Pan step for an unmodified arrow key.
pub const KEY_PAN_STEP_PX: f64 = 40.0;

/// Scale nudge for a modified arrow key.
pub const KEY_SCALE_STEP: f64 = 0.05;

/// Scale step per wheel notch.
pub const WHEEL_SCALE_STEP: f64 = 0.05;

/// Finger travel past the saturated scale band per density step.
pub const PINCH_DENSITY_PX: f64 = 24.0;

const MIN_PINCH_DIST: f64 = 1e-6;

/// How a zoom request couples into density when the scale band saturates.
enum ZoomInput {
    /// Wheel and similar stepped inputs: one density step per saturated
    /// request.
    Discrete,
    /// Sustained pinch: distance delta accumulates into proportional
    /// density steps.
    Pinch { delta: f64 },
    /// Keyboard nudge: scale only, never density.
    ScaleOnly,
}

#[derive(Clone, Copy, Debug)]
struct Press {
    anchor: Point,
    moved: bool,
}

#[derive(Clone, Copy, Debug)]
struct Pinch {
    last_dist: f64,
    density_acc: f64,
}

#[derive(Clone, Copy, Debug)]
struct SnapAnim {
    tween: Tween,
    from: Vec2,
    to: Vec2,
}

/// The pointer/keyboard gesture engine over the color plane.
///
/// The engine owns every piece of interactive state — [`Viewport`],
/// [`GridSheet`], the live [`PointerSession`], label and palette
/// bookkeeping, and the idle-snap timer/animation — and mutates it only
/// from its own synchronous entry points. Hosts feed it raw pointer,
/// keyboard, wheel, resize, and time events (timestamps are plain
/// milliseconds chosen by the host) and interpret the returned
/// [`EngineEvent`]s.
///
/// See the crate docs for the full interaction model.
#[derive(Clone, Debug)]
pub struct Engine {
    viewport: Viewport,
    sheet: GridSheet,
    metrics: CellMetrics,
    hue: f64,
    format: ColorFormat,
    show_all_labels: bool,
    labels: LabelSet,
    palette: SavedPalette,
    session: PointerSession,
    mode: GestureMode,
    press: Option<Press>,
    pinch: Option<Pinch>,
    panned: bool,
    tap: TapTracker,
    snap_timer: DeadlineTimer,
    snap_anim: Option<SnapAnim>,
}

impl Engine {
    /// Creates an engine over the given view rectangle with default sheet,
    /// metrics, and hue `0`.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        Self::with_parts(view_rect, GridSheet::default(), CellMetrics::default())
    }

    /// Creates an engine from explicit sheet and metrics.
    #[must_use]
    pub fn with_parts(view_rect: Rect, sheet: GridSheet, metrics: CellMetrics) -> Self {
        Self {
            viewport: Viewport::new(view_rect),
            sheet,
            metrics,
            hue: 0.0,
            format: ColorFormat::default(),
            show_all_labels: false,
            labels: LabelSet::new(),
            palette: SavedPalette::new(),
            session: PointerSession::new(),
            mode: GestureMode::Idle,
            press: None,
            pinch: None,
            panned: false,
            tap: TapTracker::default(),
            snap_timer: DeadlineTimer::default(),
            snap_anim: None,
        }
    }

    /// The viewport as last mutated by gestures and animation.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The grid sheet (origin, density, selection).
    #[must_use]
    pub fn sheet(&self) -> &GridSheet {
        &self.sheet
    }

    /// Cell extent in world units.
    #[must_use]
    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    /// The ambient hue applied to every resolved cell color.
    #[must_use]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Sets the ambient hue (wrapped into `[0, 360)`).
    pub fn set_hue(&mut self, hue: f64) {
        self.hue = normalize_hue(hue);
    }

    /// The display format used by [`Engine::format_cell`].
    #[must_use]
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// Sets the display format for cell value overlays.
    pub fn set_format(&mut self, format: ColorFormat) {
        self.format = format;
    }

    /// Renders the value overlay text for a cell in the current format.
    #[must_use]
    pub fn format_cell(&self, address: CellAddress) -> String {
        format_color(self.sheet.hsl_at(address, self.hue), self.format)
    }

    /// Whether every cell shows its value overlay regardless of per-value
    /// toggles.
    #[must_use]
    pub fn show_all_labels(&self) -> bool {
        self.show_all_labels
    }

    /// Toggles the global value overlay.
    pub fn set_show_all_labels(&mut self, show: bool) {
        self.show_all_labels = show;
    }

    /// Whether a cell's value overlay should render: the global toggle, or
    /// a tap on any cell with the same color value.
    #[must_use]
    pub fn label_visible_at(&self, address: CellAddress) -> bool {
        if self.show_all_labels {
            return true;
        }
        let (l, s) = self.sheet.color_at(address);
        self.labels.contains(LabelKey::from_ls(l, s))
    }

    /// Which color values currently show their numeric overlay.
    #[must_use]
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Colors captured by double-tap.
    #[must_use]
    pub fn palette(&self) -> &SavedPalette {
        &self.palette
    }

    /// Removes a saved color on explicit user request.
    pub fn remove_saved(&mut self, id: u64) -> bool {
        self.palette.remove(id)
    }

    /// The gesture currently in progress.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Pending idle-snap deadline, if armed. Hosts mirror this into their
    /// timer facility and call [`Engine::on_timer`] when it lands.
    #[must_use]
    pub fn snap_deadline(&self) -> Option<u64> {
        self.snap_timer.deadline()
    }

    /// Returns `true` while the snap animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.snap_anim.is_some()
    }

    /// Host resize: updates the view rectangle, leaving offset and scale.
    pub fn set_view_rect(&mut self, rect: Rect) {
        self.viewport.set_view_rect(rect);
    }

    /// Lazily enumerates the cells a host should realize right now.
    #[must_use]
    pub fn visible(&self) -> VisibleCells<'_> {
        visible_cells(&self.viewport, &self.metrics, &self.sheet, self.hue)
    }

    /// First pointer down starts a pan; a second suspends it into a pinch.
    ///
    /// Non-primary buttons are ignored. Any pending snap timer or in-flight
    /// snap animation is cancelled before the gesture state changes.
    pub fn on_pointer_down(
        &mut self,
        id: PointerId,
        button: PointerButton,
        pos: Point,
        _now_ms: u64,
    ) -> Events {
        let mut events = Events::new();
        if button != PointerButton::Primary {
            return events;
        }
        self.cancel_pending_snap(&mut events);

        self.session.insert(id, pos);
        match self.session.len() {
            1 => {
                self.mode = GestureMode::Panning;
                self.press = Some(Press {
                    anchor: pos,
                    moved: false,
                });
                self.panned = false;
            }
            2 => {
                self.mode = GestureMode::Pinching;
                // Two fingers can never resolve to a tap.
                self.press = None;
                self.pinch = self.session.first_two().map(|(a, b)| Pinch {
                    last_dist: (b - a).hypot(),
                    density_acc: 0.0,
                });
            }
            _ => {}
        }
        events
    }

    /// Pointer movement: pan delta while panning, distance ratio while
    /// pinching.
    pub fn on_pointer_move(&mut self, id: PointerId, pos: Point, _now_ms: u64) -> Events {
        let mut events = Events::new();
        let Some(prev) = self.session.update(id, pos) else {
            return events;
        };

        match self.mode {
            GestureMode::Panning => {
                let delta = pos - prev;
                if delta != Vec2::ZERO {
                    self.viewport.pan_by(delta);
                    self.panned = true;
                }
                if let Some(press) = &mut self.press {
                    if (pos - press.anchor).hypot() > TAP_SLOP_PX {
                        press.moved = true;
                    }
                }
            }
            GestureMode::Pinching => {
                let Some((a, b)) = self.session.first_two() else {
                    return events;
                };
                let dist = (b - a).hypot();
                let (ratio, delta) = match self.pinch.as_mut() {
                    Some(pinch) if pinch.last_dist > MIN_PINCH_DIST && dist > MIN_PINCH_DIST => {
                        let ratio = dist / pinch.last_dist;
                        let delta = dist - pinch.last_dist;
                        pinch.last_dist = dist;
                        (ratio, delta)
                    }
                    Some(pinch) => {
                        // Degenerate distance: contribute no scale change,
                        // but keep tracking so the gesture can recover.
                        pinch.last_dist = dist;
                        return events;
                    }
                    None => return events,
                };
                let raw = self.viewport.scale() * ratio;
                self.perform_zoom(raw, ZoomInput::Pinch { delta }, &mut events);
                self.panned = true;
            }
            GestureMode::Idle => {}
        }
        events
    }

    /// Pointer lift: pinch hands off to pan, the last lift resolves taps
    /// and arms the idle snap timer after a pan.
    pub fn on_pointer_up(&mut self, id: PointerId, pos: Point, now_ms: u64) -> Events {
        let mut events = Events::new();
        if !self.session.remove(id) {
            return events;
        }

        match self.session.len() {
            0 => {
                let was_panning = self.mode == GestureMode::Panning;
                self.mode = GestureMode::Idle;
                self.pinch = None;

                if let Some(press) = self.press.take() {
                    let still = !press.moved && (pos - press.anchor).hypot() <= TAP_SLOP_PX;
                    if was_panning && still {
                        self.handle_tap(press.anchor, now_ms, &mut events);
                    }
                }

                if self.panned {
                    let deadline = self.snap_timer.arm(now_ms, SNAP_IDLE_MS);
                    events.push(EngineEvent::SnapScheduled {
                        deadline_ms: deadline,
                    });
                    self.panned = false;
                }
            }
            1 if self.mode == GestureMode::Pinching => {
                // Resume panning from the survivor's current position; its
                // session entry is already up to date, so the next move
                // produces a clean delta with no visible jump.
                self.mode = GestureMode::Panning;
                self.pinch = None;
            }
            _ if self.mode == GestureMode::Pinching => {
                // A pointer outside the surviving pair lifted; re-anchor the
                // pinch distance to the pair that now leads the session.
                if let (Some(pinch), Some((a, b))) =
                    (self.pinch.as_mut(), self.session.first_two())
                {
                    pinch.last_dist = (b - a).hypot();
                }
            }
            _ => {}
        }
        events
    }

    /// Host-cancelled pointer (touch cancel, capture loss): the pointer
    /// leaves the session without resolving a tap or arming the snap timer.
    pub fn on_pointer_cancel(&mut self, id: PointerId, _now_ms: u64) -> Events {
        let events = Events::new();
        if !self.session.remove(id) {
            return events;
        }
        self.press = None;
        match self.session.len() {
            0 => {
                self.mode = GestureMode::Idle;
                self.pinch = None;
                self.panned = false;
            }
            1 if self.mode == GestureMode::Pinching => {
                self.mode = GestureMode::Panning;
                self.pinch = None;
            }
            _ => {}
        }
        events
    }

    /// Wheel zoom: one stepped scale change per notch, stepping density by
    /// one when the band is already saturated in that direction.
    pub fn on_wheel(&mut self, delta_y: f64, now_ms: u64) -> Events {
        let mut events = Events::new();
        self.cancel_pending_snap(&mut events);
        if delta_y == 0.0 {
            return events;
        }
        let raw = if delta_y < 0.0 {
            self.viewport.scale() + WHEEL_SCALE_STEP
        } else {
            self.viewport.scale() - WHEEL_SCALE_STEP
        };
        self.perform_zoom(raw, ZoomInput::Discrete, &mut events);

        let deadline = self.snap_timer.arm(now_ms, SNAP_IDLE_MS);
        events.push(EngineEvent::SnapScheduled {
            deadline_ms: deadline,
        });
        events
    }

    /// Arrow keys: pan by a fixed step, or nudge scale with any modifier
    /// held (keyboard zoom never touches density). Restarts the idle snap
    /// timer either way.
    pub fn on_key(&mut self, key: NavKey, modifiers: Modifiers, now_ms: u64) -> Events {
        let mut events = Events::new();
        self.cancel_pending_snap(&mut events);

        if modifiers.is_empty() {
            // Arrows travel across the plane: Right reveals cells to the
            // right, which moves the world left under the view.
            let delta = match key {
                NavKey::Left => Vec2::new(KEY_PAN_STEP_PX, 0.0),
                NavKey::Right => Vec2::new(-KEY_PAN_STEP_PX, 0.0),
                NavKey::Up => Vec2::new(0.0, KEY_PAN_STEP_PX),
                NavKey::Down => Vec2::new(0.0, -KEY_PAN_STEP_PX),
            };
            self.viewport.pan_by(delta);
        } else {
            let raw = match key {
                NavKey::Up | NavKey::Right => self.viewport.scale() + KEY_SCALE_STEP,
                NavKey::Down | NavKey::Left => self.viewport.scale() - KEY_SCALE_STEP,
            };
            self.perform_zoom(raw, ZoomInput::ScaleOnly, &mut events);
        }

        let deadline = self.snap_timer.arm(now_ms, SNAP_IDLE_MS);
        events.push(EngineEvent::SnapScheduled {
            deadline_ms: deadline,
        });
        events
    }

    /// External color request (text editor, suggestion, extracted swatch,
    /// saved-color click).
    ///
    /// If the selected cell already shows the request the call is a no-op
    /// besides hue; otherwise the grid hard-rebases: origin becomes exactly
    /// the requested color, selection resets to `(0, 0)`, and the view
    /// recenters on it. The jump takes precedence over a pending or
    /// in-flight snap, which is cancelled first.
    pub fn request_color(&mut self, color: Hsl, _now_ms: u64) -> Events {
        let mut events = Events::new();
        self.cancel_pending_snap(&mut events);
        self.hue = normalize_hue(color.h);
        if self.sheet.jump_to(color.l, color.s) == JumpOutcome::Rebased {
            self.viewport.center_world_point(Point::ORIGIN);
        }
        events
    }

    /// Host timer callback for the deadline last announced via
    /// [`EngineEvent::SnapScheduled`].
    ///
    /// If the deadline is due, starts the snap animation toward the cell
    /// center nearest the view center and requests a frame.
    pub fn on_timer(&mut self, now_ms: u64) -> Events {
        let mut events = Events::new();
        if !self.snap_timer.fire(now_ms) {
            return events;
        }

        let center = self.viewport.view_rect().center();
        let world_center = self.viewport.view_to_world_point(center);
        let address = self.metrics.nearest_address(world_center);
        let target = self.metrics.world_center_of(address);

        let from = self.viewport.offset();
        let to = Viewport::offset_anchoring(target, center, self.viewport.scale());
        if (to - from).hypot() > 1e-9 {
            self.snap_anim = Some(SnapAnim {
                tween: Tween::new(now_ms, SNAP_ANIM_MS),
                from,
                to,
            });
            events.push(EngineEvent::FrameRequested);
        }
        events
    }

    /// Host frame callback: advances the snap animation and requests the
    /// next frame until it lands.
    pub fn on_frame(&mut self, now_ms: u64) -> Events {
        let mut events = Events::new();
        let Some(anim) = self.snap_anim else {
            return events;
        };

        let t = anim.tween.eased_progress(now_ms);
        self.viewport.set_offset(anim.from + (anim.to - anim.from) * t);
        if anim.tween.is_finished(now_ms) {
            self.snap_anim = None;
        } else {
            events.push(EngineEvent::FrameRequested);
        }
        events
    }

    /// Snapshot of the engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> EngineDebugInfo {
        EngineDebugInfo {
            mode: self.mode,
            pointer_count: self.session.len(),
            offset: self.viewport.offset(),
            scale: self.viewport.scale(),
            density: self.sheet.density(),
            selected: self.sheet.selected(),
            hue: self.hue,
            snap_deadline: self.snap_timer.deadline(),
            animating: self.snap_anim.is_some(),
        }
    }

    /// The anchor-preserving zoom: clamp scale, couple saturated zoom
    /// pressure into density, and recompute the offset so the selected
    /// cell's view position is unchanged.
    fn perform_zoom(&mut self, raw_scale: f64, input: ZoomInput, events: &mut Events) {
        let sel_world = self.metrics.world_center_of(self.sheet.selected());
        let sel_view = self.viewport.world_to_view_point(sel_world);

        let old_scale = self.viewport.scale();
        // Density engages only when the band was already saturated and the
        // input keeps pushing in the same direction.
        let over = raw_scale > MAX_SCALE && old_scale >= MAX_SCALE - 1e-12;
        let under = raw_scale < MIN_SCALE && old_scale <= MIN_SCALE + 1e-12;

        match input {
            ZoomInput::ScaleOnly => {}
            ZoomInput::Discrete => {
                if over {
                    self.step_density(-1, events);
                } else if under {
                    self.step_density(1, events);
                }
            }
            ZoomInput::Pinch { delta } => {
                let mut steps = 0_i64;
                if let Some(pinch) = self.pinch.as_mut() {
                    if (over && delta > 0.0) || (under && delta < 0.0) {
                        pinch.density_acc += delta;
                        #[expect(
                            clippy::cast_possible_truncation,
                            reason = "finger travel per event is a few hundred px at most"
                        )]
                        {
                            steps = (pinch.density_acc / PINCH_DENSITY_PX) as i64;
                        }
                        if steps != 0 {
                            pinch.density_acc -= steps as f64 * PINCH_DENSITY_PX;
                        }
                    }
                }
                if steps != 0 {
                    // Spreading (positive travel) refines the grid.
                    self.step_density(-steps, events);
                }
            }
        }

        self.viewport.set_scale(raw_scale.clamp(MIN_SCALE, MAX_SCALE));
        self.viewport.set_offset(Viewport::offset_anchoring(
            sel_world,
            sel_view,
            self.viewport.scale(),
        ));
    }

    fn step_density(&mut self, steps: i64, events: &mut Events) {
        let target = (i64::from(self.sheet.density()) + steps)
            .clamp(i64::from(MIN_DENSITY), i64::from(MAX_DENSITY));
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped into the u8 density bounds on the previous line"
        )]
        let target = target as u8;
        if self.sheet.set_density(target) {
            events.push(EngineEvent::DensityChanged {
                value: target,
                max: MAX_DENSITY,
            });
        }
    }

    fn handle_tap(&mut self, anchor_view: Point, now_ms: u64, events: &mut Events) {
        let world = self.viewport.view_to_world_point(anchor_view);
        let address = self.metrics.nearest_address(world);

        match self.tap.register(address, now_ms) {
            TapKind::Double => {
                let color = self.sheet.hsl_at(address, self.hue);
                let id = self.palette.save(color, now_ms);
                events.push(EngineEvent::ColorSaved { id, color });
            }
            TapKind::Single => {
                self.sheet.set_selected(address);
                let color = self.sheet.hsl_at(address, self.hue);
                events.push(EngineEvent::CellSelected(color));

                let (l, s) = self.sheet.color_at(address);
                let key = LabelKey::from_ls(l, s);
                let visible = self.labels.toggle(key);
                events.push(EngineEvent::LabelToggled { key, visible });
            }
        }
    }

    fn cancel_pending_snap(&mut self, events: &mut Events) {
        if self.snap_timer.cancel() {
            events.push(EngineEvent::SnapCancelled);
        }
        self.snap_anim = None;
    }
}

/// Debug snapshot of an [`Engine`] state.
#[derive(Clone, Copy, Debug)]
pub struct EngineDebugInfo {
    /// Gesture currently in progress.
    pub mode: GestureMode,
    /// Active pointer count.
    pub pointer_count: usize,
    /// View-space position of world `(0, 0)`.
    pub offset: Vec2,
    /// Current scale factor.
    pub scale: f64,
    /// Current grid density.
    pub density: u8,
    /// Currently selected cell.
    pub selected: CellAddress,
    /// Ambient hue.
    pub hue: f64,
    /// Pending idle-snap deadline, if armed.
    pub snap_deadline: Option<u64>,
    /// Whether the snap animation is in flight.
    pub animating: bool,
}
