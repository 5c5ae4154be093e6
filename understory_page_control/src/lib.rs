// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_page_control --heading-base-level=0

//! Understory Page Control: headless page indicator primitives.
//!
//! A page control is a row (or column) of dots, one per page, with one dot
//! highlighted as active. This crate models everything about it except
//! drawing:
//!
//! - [`ActiveIndex`]: a continuous, clamped active index. Fractional values
//!   split the highlight between two neighbouring dots via blend factors.
//! - [`DotStyle`], [`Dot`] and [`blend`]: per-dot styles and the interpolator
//!   that mixes a dot's regular and active style by its blend factor.
//! - [`Animator`] and [`TickSource`]: time-driven progress for animated index
//!   changes, driven by a host-provided frame clock.
//! - [`measure`] and [`layout`]: axis-aware intrinsic size and dot frames,
//!   written once for the primary/secondary axes and mirrored via
//!   [`LayoutAxis`].
//! - [`locate_tap`]: maps a tap to a one-page step towards it.
//! - [`PageControl`]: ties the pieces together and records the refresh work a
//!   host must perform as [`Invalidation`] flags.
//!
//! This crate deliberately does **not** know about widgets, display trees, or
//! any particular UI framework. Host frameworks are responsible for:
//!
//! - Creating one visual element per dot when [`Invalidation::ELEMENTS`] is
//!   raised, and applying [`PageControl::resolved_styles`] on
//!   [`Invalidation::STYLE`].
//! - Positioning elements from [`PageControl::layout`] on
//!   [`Invalidation::LAYOUT`] and re-querying
//!   [`PageControl::intrinsic_size`] on [`Invalidation::MEASURE`].
//! - Implementing [`TickSource`] over their frame clock and forwarding frames
//!   to [`PageControl::tick`].
//! - Forwarding taps (already recognized, in control-local coordinates) to
//!   [`PageControl::handle_tap`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_page_control::{Dot, Invalidation, ManualTickSource, PageControl};
//!
//! let mut clock = ManualTickSource::new();
//! let mut control = PageControl::new();
//! control.set_dots(vec![Dot::default(); 3]);
//! assert_eq!(control.take_invalidation(), Invalidation::all());
//!
//! // Three 20px dots with 5px spacing.
//! assert_eq!(control.intrinsic_size(), Size::new(70.0, 20.0));
//!
//! control.set_active_index_animated(2.0, &mut clock);
//! let token = control.animation_token().unwrap();
//! control.tick(&mut clock, token, 0.0);
//! control.tick(&mut clock, token, 0.075);
//! assert!((control.active_index() - 1.0).abs() < 1e-4);
//!
//! // Halfway through the animation dot 1 carries the whole highlight.
//! let factors: Vec<f32> = control.blend_factors().collect();
//! assert_eq!(factors, [0.0, 1.0, 0.0]);
//! assert!(control.take_invalidation().contains(Invalidation::STYLE));
//! ```
//!
//! ## Diagnostics
//!
//! State transitions (dot list and configuration replacement, animation
//! start/supersession/completion, taps) are reported through [`tracing`] at
//! `debug` level and individual frames at `trace` level. The crate never
//! installs a subscriber.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo`, `peniko` and `tracing`. Without it,
//!   float math goes through `libm`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animator;
mod axis;
mod config;
mod control;
mod index;
mod invalidation;
mod layout;
mod style;
mod tap;

pub use animator::{Animator, ManualTickSource, TickOutcome, TickSource, TickToken};
pub use axis::LayoutAxis;
pub use config::{ConfigError, Configuration, ConfigurationBuilder};
pub use control::PageControl;
pub use index::{ActiveIndex, blend_factor, clamp_index};
pub use invalidation::Invalidation;
pub use layout::{layout, measure};
pub use style::{Dot, DotStyle, blend};
pub use tap::{TapDirection, locate_tap};
