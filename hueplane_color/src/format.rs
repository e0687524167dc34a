// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display formatting for the supported color notations.

use alloc::string::String;
use core::fmt::Write as _;

#[cfg(not(feature = "std"))]
use crate::floatfuncs::FloatFuncs;

use crate::hsl::Hsl;

/// Which notation to render a color value in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorFormat {
    /// `"H, S%, L%"`.
    #[default]
    Hsl,
    /// `"R, G, B"`.
    Rgb,
    /// `"#RRGGBB"`.
    Hex,
}

/// Renders a color in the selected notation.
///
/// HSL components print as integers when exact and in 2-decimal fixed
/// notation otherwise.
///
/// ```rust
/// use hueplane_color::{ColorFormat, Hsl, format_color};
///
/// let c = Hsl::new(210.0, 50.0, 50.0);
/// assert_eq!(format_color(c, ColorFormat::Hsl), "210, 50%, 50%");
/// assert_eq!(format_color(c, ColorFormat::Rgb), "64, 128, 191");
/// assert_eq!(format_color(c, ColorFormat::Hex), "#4080BF");
/// ```
#[must_use]
pub fn format_color(hsl: Hsl, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hsl => {
            let mut out = String::new();
            push_component(&mut out, hsl.h);
            out.push_str(", ");
            push_component(&mut out, hsl.s);
            out.push_str("%, ");
            push_component(&mut out, hsl.l);
            out.push('%');
            out
        }
        ColorFormat::Rgb => {
            let rgb = hsl.to_rgb();
            let mut out = String::new();
            // Writing to a String cannot fail.
            let _ = write!(out, "{}, {}, {}", rgb.r, rgb.g, rgb.b);
            out
        }
        ColorFormat::Hex => hsl.to_rgb().to_hex(),
    }
}

fn push_component(out: &mut String, v: f64) {
    let rounded = v.round();
    if (v - rounded).abs() < 1e-9 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the value was just confirmed integral and color components are small"
        )]
        let _ = write!(out, "{}", rounded as i64);
    } else {
        let _ = write!(out, "{v:.2}");
    }
}
