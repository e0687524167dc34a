// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HSL and RGB value types and conversions between them.

#[cfg(not(feature = "std"))]
use crate::floatfuncs::FloatFuncs;

use crate::bounce::normalize_hue;

/// A color in hue/saturation/lightness form.
///
/// Hue is in degrees, saturation and lightness are percentages in
/// `[0, 100]`. Construction does not normalize; conversions do.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees.
    pub h: f64,
    /// Saturation percentage.
    pub s: f64,
    /// Lightness percentage.
    pub l: f64,
}

/// A color with 8-bit red/green/blue channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Hsl {
    /// Creates a color from hue (degrees) and saturation/lightness percentages.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Converts to 8-bit RGB using the standard sector decomposition.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);
        let h = normalize_hue(self.h);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = h / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "hp is in [0, 6); the truncated sector index is in [0, 5]"
        )]
        let sector = hp as u8;
        let (r1, g1, b1) = match sector {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb {
            r: channel(r1 + m),
            g: channel(g1 + m),
            b: channel(b1 + m),
        }
    }

    /// Returns a color guaranteed to read differently against this one.
    ///
    /// Lightness and saturation are each shifted 25 points toward the other
    /// half of their range (down if above 50, up otherwise); hue is kept.
    /// This is a cheap deterministic offset, not a perceptual contrast
    /// computation.
    #[must_use]
    pub fn contrast(self) -> Self {
        let shift = |v: f64| if v > 50.0 { v - 25.0 } else { v + 25.0 };
        Self {
            h: self.h,
            s: shift(self.s),
            l: shift(self.l),
        }
    }
}

impl Rgb {
    /// Creates a color from 8-bit channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts to HSL, the inverse of [`Hsl::to_rgb`] up to rounding.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let hp = if max == r {
            ((g - b) / delta % 6.0 + 6.0) % 6.0
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl::new(hp * 60.0, s * 100.0, l * 100.0)
    }
}

#[cfg(feature = "peniko")]
impl From<Hsl> for peniko::Color {
    fn from(hsl: Hsl) -> Self {
        let rgb = hsl.to_rgb();
        Self::from_rgb8(rgb.r, rgb.g, rgb.b)
    }
}

#[cfg(feature = "peniko")]
impl From<Rgb> for peniko::Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb8(rgb.r, rgb.g, rgb.b)
    }
}

fn channel(unit: f64) -> u8 {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the value is clamped into [0, 255] before the cast"
    )]
    {
        (unit * 255.0).round().clamp(0.0, 255.0) as u8
    }
}
