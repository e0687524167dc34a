// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reflecting ("bounce") tiling function and angle helpers.

/// Folds an unbounded value into `[0, max]` by reflection.
///
/// The result is a triangle wave with period `2 * max`, symmetric about each
/// multiple of `max` and continuous everywhere. Unlike a modulo wrap there is
/// no jump at the fold points: walking past `max` turns around and walks back
/// down.
///
/// ```rust
/// use hueplane_color::bounce;
///
/// assert_eq!(bounce(0.0, 5.0), 0.0);
/// assert_eq!(bounce(5.0, 5.0), 5.0);
/// assert_eq!(bounce(7.0, 5.0), 3.0);
/// assert_eq!(bounce(10.0, 5.0), 0.0);
/// assert_eq!(bounce(-3.0, 5.0), 3.0);
/// ```
#[must_use]
pub fn bounce(value: f64, max: f64) -> f64 {
    let cycle = 2.0 * max;
    let rem = ((value % cycle) + cycle) % cycle;
    if rem > max { cycle - rem } else { rem }
}

/// Wraps an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_hue(degrees: f64) -> f64 {
    let rem = ((degrees % 360.0) + 360.0) % 360.0;
    // The remainder of a tiny negative angle can land exactly on 360.0.
    if rem >= 360.0 { 0.0 } else { rem }
}
