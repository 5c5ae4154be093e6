// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page control state machine.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect, Size};

use crate::animator::{Animator, TickOutcome, TickSource, TickToken};
use crate::config::Configuration;
use crate::index::{ActiveIndex, clamp_index};
use crate::invalidation::Invalidation;
use crate::layout::{layout, measure};
use crate::style::{Dot, DotStyle};
use crate::tap::locate_tap;

/// Headless page indicator.
///
/// `PageControl` owns the dot list, the [`Configuration`], the continuous
/// active index and at most one in-flight index animation. It never draws:
/// hosts read [`resolved_styles`](Self::resolved_styles) and
/// [`layout`](Self::layout) to update their own dot elements, and drain
/// [`take_invalidation`](Self::take_invalidation) to know when to do so.
///
/// A running animation stays registered with its [`TickSource`] until it
/// finishes or is cancelled. Call [`cancel_animation`](Self::cancel_animation)
/// before dropping a control mid-run; dropping it anyway logs a warning.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_page_control::{Dot, ManualTickSource, PageControl};
///
/// let mut source = ManualTickSource::new();
/// let mut control = PageControl::new();
/// control.set_dots(vec![Dot::default(); 5]);
///
/// control.set_active_index(100.0);
/// assert_eq!(control.active_index(), 4.0);
///
/// // Tap the leading half: animate one page back.
/// let bounds = control.intrinsic_size();
/// let target = control.handle_tap(Point::new(1.0, 1.0), bounds, &mut source);
/// assert_eq!(target, Some(3.0));
///
/// let token = control.animation_token().unwrap();
/// control.tick(&mut source, token, 0.0);
/// control.tick(&mut source, token, 1.0);
/// assert_eq!(control.active_index(), 3.0);
/// assert!(!control.is_animating());
/// ```
pub struct PageControl {
    dots: Vec<Dot>,
    config: Configuration,
    index: ActiveIndex,
    run: Option<AnimationRun>,
    invalidation: Invalidation,
    on_active_index_changed: Option<Box<dyn FnMut(f32)>>,
}

/// An animated transition between two index values.
#[derive(Clone, Debug)]
struct AnimationRun {
    animator: Animator,
    from: f32,
    to: f32,
}

impl AnimationRun {
    fn index_at(&self, progress: f32) -> f32 {
        self.from + (self.to - self.from) * progress
    }
}

impl fmt::Debug for PageControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageControl")
            .field("dots", &self.dots)
            .field("config", &self.config)
            .field("index", &self.index)
            .field("run", &self.run)
            .field("invalidation", &self.invalidation)
            .field(
                "on_active_index_changed",
                &self.on_active_index_changed.as_ref().map(|_| "FnMut(f32)"),
            )
            .finish()
    }
}

impl Drop for PageControl {
    fn drop(&mut self) {
        if let Some(token) = self.animation_token() {
            tracing::warn!(token = token.0, "page control dropped with a running animation");
        }
    }
}

impl Default for PageControl {
    fn default() -> Self {
        Self::new()
    }
}

impl PageControl {
    /// Creates an empty control with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_configuration(Configuration::default())
    }

    /// Creates an empty control with `config`.
    #[must_use]
    pub fn with_configuration(config: Configuration) -> Self {
        Self {
            dots: Vec::new(),
            config,
            index: ActiveIndex::new(),
            run: None,
            invalidation: Invalidation::empty(),
            on_active_index_changed: None,
        }
    }

    /// The dots, one per page.
    #[must_use]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Replaces the dot list.
    ///
    /// The active index is clamped into the new range. Requests
    /// [`Invalidation::DOTS`].
    pub fn set_dots(&mut self, dots: Vec<Dot>) {
        self.dots = dots;
        self.index.reclamp(self.dots.len());
        self.invalidation |= Invalidation::DOTS;
        tracing::debug!(count = self.dots.len(), index = self.index.get(), "dots replaced");
    }

    /// The configuration.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Replaces the configuration. Requests [`Invalidation::CONFIGURATION`].
    ///
    /// A running animation keeps the duration it started with.
    pub fn set_configuration(&mut self, config: Configuration) {
        self.config = config;
        self.invalidation |= Invalidation::CONFIGURATION;
        tracing::debug!(?config, "configuration replaced");
    }

    /// The continuous active index, in `[0, dots.len() - 1]` when there are dots.
    #[must_use]
    pub fn active_index(&self) -> f32 {
        self.index.get()
    }

    /// Sets the active index immediately, clamping it into range.
    ///
    /// Does nothing without dots. A running animation is not cancelled and
    /// keeps driving the index on its next tick; call
    /// [`cancel_animation`](Self::cancel_animation) first to stop it.
    pub fn set_active_index(&mut self, value: f32) {
        self.write_index(value);
    }

    /// Animates the active index from its current value to `value` (clamped).
    ///
    /// Any running animation is cancelled first. The index is written once
    /// synchronously with progress `0`; later values arrive through
    /// [`tick`](Self::tick). Does nothing without dots.
    pub fn set_active_index_animated<S: TickSource + ?Sized>(
        &mut self,
        value: f32,
        source: &mut S,
    ) {
        let Some(to) = clamp_index(value, self.dots.len()) else {
            return;
        };
        if let Some(mut previous) = self.run.take() {
            previous.animator.cancel(source);
            tracing::debug!(to = previous.to, "animation superseded");
        }

        let from = self.index.get();
        let mut first = 0.0;
        let animator = Animator::start(source, self.config.animation_duration(), |p| first = p);
        let run = AnimationRun { animator, from, to };
        let start = run.index_at(first);
        tracing::debug!(from, to, "animation started");
        self.run = Some(run);
        self.write_index(start);
    }

    /// Delivers a frame for `token`, stamped `now` in monotonic seconds.
    ///
    /// Frames for anything but the live animation are ignored, so a superseded
    /// or cancelled run never touches the index.
    pub fn tick<S: TickSource + ?Sized>(
        &mut self,
        source: &mut S,
        token: TickToken,
        now: f64,
    ) -> TickOutcome {
        let Some(run) = self.run.as_mut() else {
            tracing::trace!(token = token.0, "tick without a running animation");
            return TickOutcome::Ignored;
        };

        let mut progress = None;
        let outcome = run.animator.tick(source, token, now, |p| progress = Some(p));
        let Some(progress) = progress else {
            tracing::trace!(token = token.0, "stale tick ignored");
            return outcome;
        };

        let value = run.index_at(progress);
        tracing::trace!(progress, index = value, "tick");
        if matches!(outcome, TickOutcome::Finished(_)) {
            self.run = None;
            tracing::debug!(index = value, "animation finished");
        }
        self.write_index(value);
        outcome
    }

    /// Returns `true` while an animated index change is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Registration of the running animation, if any.
    #[must_use]
    pub fn animation_token(&self) -> Option<TickToken> {
        self.run.as_ref().and_then(|run| run.animator.token())
    }

    /// Stops a running animation where it is. Idempotent.
    pub fn cancel_animation<S: TickSource + ?Sized>(&mut self, source: &mut S) {
        if let Some(mut run) = self.run.take() {
            run.animator.cancel(source);
            tracing::debug!(index = self.index.get(), "animation cancelled");
        }
    }

    /// Sets the callback invoked with the target index whenever a tap moves it.
    pub fn set_on_active_index_changed(&mut self, callback: impl FnMut(f32) + 'static) {
        self.on_active_index_changed = Some(Box::new(callback));
    }

    /// Removes the tap callback.
    pub fn clear_on_active_index_changed(&mut self) {
        self.on_active_index_changed = None;
    }

    /// Handles a tap at `point` in a control currently sized `bounds`.
    ///
    /// When tapping is enabled and there are dots, animates to one page before
    /// or after the rounded active index, notifies the callback and returns the
    /// target. The target is reported before clamping, so tapping past either
    /// end reports `-1` or `dots.len()`.
    pub fn handle_tap<S: TickSource + ?Sized>(
        &mut self,
        point: Point,
        bounds: Size,
        source: &mut S,
    ) -> Option<f32> {
        if !self.config.tap_advances_index() || self.dots.is_empty() {
            return None;
        }
        let direction = locate_tap(point, bounds, &self.config);
        let target = direction.target(self.index.get());
        tracing::debug!(?direction, to = target, "tap");

        self.set_active_index_animated(target, source);
        if let Some(callback) = self.on_active_index_changed.as_mut() {
            callback(target);
        }
        Some(target)
    }

    /// Blend factor of each dot (`0` regular, `1` active).
    pub fn blend_factors(&self) -> impl Iterator<Item = f32> + '_ {
        self.index.blend_factors(self.dots.len())
    }

    /// Style each dot should currently be drawn with.
    #[must_use]
    pub fn resolved_styles(&self) -> Vec<DotStyle> {
        self.dots
            .iter()
            .zip(self.blend_factors())
            .map(|(dot, factor)| dot.style_at(factor))
            .collect()
    }

    /// Rendered size of each dot under its current style.
    #[must_use]
    pub fn dot_sizes(&self) -> Vec<Size> {
        self.dots
            .iter()
            .zip(self.blend_factors())
            .map(|(dot, factor)| dot.style_at(factor).size())
            .collect()
    }

    /// Frames of each dot inside a control sized `bounds`.
    #[must_use]
    pub fn layout(&self, bounds: Size) -> Vec<Rect> {
        layout(&self.dot_sizes(), &self.config, bounds)
    }

    /// Size the control wants given an available size.
    ///
    /// The hint is accepted for parity with host measure protocols; dots are
    /// never shrunk, so the result only depends on the current state.
    #[must_use]
    pub fn size_that_fits(&self, _available: Size) -> Size {
        self.intrinsic_size()
    }

    /// Size that exactly fits the dots in their current styles.
    #[must_use]
    pub fn intrinsic_size(&self) -> Size {
        measure(&self.dot_sizes(), &self.config)
    }

    /// Pending refresh work, without clearing it.
    #[must_use]
    pub fn invalidation(&self) -> Invalidation {
        self.invalidation
    }

    /// Returns and clears the pending refresh work.
    pub fn take_invalidation(&mut self) -> Invalidation {
        core::mem::take(&mut self.invalidation)
    }

    fn write_index(&mut self, value: f32) {
        if self.index.set(value, self.dots.len()) {
            self.invalidation |= Invalidation::INDEX;
        }
    }
}
