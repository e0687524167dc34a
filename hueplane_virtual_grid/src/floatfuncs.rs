// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating point functions sourced from `libm` for `no_std` builds.
//!
//! Adapted from the kurbo implementation of the same shim: in `std` builds
//! the inherent `f64` methods are used instead and this module is not
//! compiled.

/// Floating point methods backed by `libm` when `std` is unavailable.
pub(crate) trait FloatFuncs: Sized {
    /// Largest integer less than or equal to the value.
    fn floor(self) -> Self;

    /// Rounds half-way cases away from zero.
    fn round(self) -> Self;
}

impl FloatFuncs for f64 {
    fn floor(self) -> Self {
        libm::floor(self)
    }

    fn round(self) -> Self {
        libm::round(self)
    }
}
