// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hueplane_color --heading-base-level=0

//! Hueplane Color: pure color math for the color-plane explorer.
//!
//! This crate provides the stateless color layer shared by the rest of the
//! workspace:
//!
//! - [`Hsl`] and [`Rgb`] value types with conversions in both directions.
//! - Hexadecimal parsing and rendering ([`parse_hex`], [`Rgb::to_hex`]).
//! - The [`bounce`] reflecting tiling function that folds an unbounded
//!   signal into a bounded range without discontinuities.
//! - Display formatting for the three supported notations
//!   ([`format_color`], [`ColorFormat`]).
//! - A deterministic contrast offset for overlay text ([`Hsl::contrast`]).
//!
//! ## Conventions
//!
//! Hue is measured in degrees and normalized into `[0, 360)`; saturation and
//! lightness are percentages in `[0, 100]`. Conversions round to the nearest
//! 8-bit channel value, so an HSL → RGB → HSL round trip is exact only up to
//! rounding tolerance.
//!
//! ## Minimal example
//!
//! ```rust
//! use hueplane_color::{ColorFormat, Hsl, format_color, parse_hex};
//!
//! let teal = Hsl::new(180.0, 50.0, 40.0);
//! let rgb = teal.to_rgb();
//! assert_eq!(format_color(teal, ColorFormat::Hex), rgb.to_hex());
//!
//! // Malformed input reports no match; callers keep their previous color.
//! assert!(parse_hex("#12345g").is_err());
//! ```
//!
//! ## Bounce tiling
//!
//! [`bounce`] is the primitive that lets an infinite integer address space
//! produce a bounded, seamlessly mirrored color field: walking far enough in
//! one direction reflects the value back down rather than wrapping it.
//!
//! ```rust
//! use hueplane_color::bounce;
//!
//! assert_eq!(bounce(7.0, 5.0), 3.0);
//! assert_eq!(bounce(10.0, 5.0), 0.0);
//! ```
//!
//! This crate is `no_std`; one of the `std` or `libm` features must be
//! enabled.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("hueplane_color requires either the `std` or `libm` feature");

mod bounce;
#[cfg(not(feature = "std"))]
mod floatfuncs;
mod format;
mod hex;
mod hsl;

pub use bounce::{bounce, normalize_hue};
pub use format::{ColorFormat, format_color};
pub use hex::{ParseHexError, parse_hex};
pub use hsl::{Hsl, Rgb};
