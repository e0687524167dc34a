// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hueplane_timing --heading-base-level=0

//! Hueplane Timing: host-agnostic timer and tween primitives.
//!
//! Nothing in this crate reads a clock. Timestamps are plain `u64`
//! milliseconds supplied by the caller on every query, so the same types work
//! under any host scheduler (browser frame callbacks, a winit event loop, a
//! test driving synthetic time).
//!
//! - [`DeadlineTimer`]: a single-shot, cancellable deadline. Hosts arm it,
//!   mirror the deadline into their real timer facility, and call
//!   [`DeadlineTimer::fire`] when that timer lands.
//! - [`Tween`]: a fixed-duration animation envelope with
//!   [ease-out-cubic](ease_out_cubic) progress, advanced by polling.
//!
//! ```rust
//! use hueplane_timing::{DeadlineTimer, Tween};
//!
//! let mut timer = DeadlineTimer::default();
//! timer.arm(1_000, 3_000);
//! assert_eq!(timer.deadline(), Some(4_000));
//! assert!(!timer.fire(3_999));
//! assert!(timer.fire(4_000));
//! // Firing disarms.
//! assert_eq!(timer.deadline(), None);
//!
//! let tween = Tween::new(0, 600);
//! assert_eq!(tween.eased_progress(0), 0.0);
//! assert_eq!(tween.eased_progress(600), 1.0);
//! assert!(tween.is_finished(600));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod timer;
mod tween;

pub use timer::DeadlineTimer;
pub use tween::{Tween, ease_out_cubic};
