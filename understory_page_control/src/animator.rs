// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-driven progress for animated index changes.
//!
//! The crate does not own a clock. Hosts implement [`TickSource`] over whatever
//! per-frame callback their platform offers (a display link, a
//! `requestAnimationFrame` loop, a winit redraw cycle) and forward each frame
//! to the registered [`Animator`] along with a monotonic timestamp in seconds.
//!
//! ## Usage
//!
//! 1) Call [`Animator::start`]; it registers with the source and reports
//!    progress `0` synchronously.
//! 2) For every frame the source delivers to the returned [`TickToken`], call
//!    [`Animator::tick`]. The first tick fixes the reference timestamp.
//! 3) Once elapsed time strictly exceeds the duration, the final tick reports
//!    [`TickOutcome::Finished`] and the animator unregisters itself.
//! 4) [`Animator::cancel`] stops early; it is safe to call at any time.
//!
//! ```
//! use core::time::Duration;
//! use understory_page_control::{Animator, ManualTickSource, TickOutcome};
//!
//! let mut source = ManualTickSource::new();
//! let mut seen = Vec::new();
//! let mut animator = Animator::start(&mut source, Duration::from_secs(1), |p| seen.push(p));
//! let token = animator.token().unwrap();
//!
//! animator.tick(&mut source, token, 10.0, |p| seen.push(p));
//! animator.tick(&mut source, token, 10.5, |p| seen.push(p));
//! let last = animator.tick(&mut source, token, 11.25, |p| seen.push(p));
//!
//! assert_eq!(seen, [0.0, 0.0, 0.5, 1.0]);
//! assert_eq!(last, TickOutcome::Finished(1.0));
//! assert!(!animator.is_running());
//! assert!(source.is_empty());
//! ```

use alloc::vec::Vec;
use core::time::Duration;

/// Identifies one registration with a [`TickSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickToken(pub u64);

/// A per-frame callback service.
///
/// Registrations are independent: each [`Animator`] registers once when it
/// starts and unregisters once when it finishes or is cancelled.
pub trait TickSource {
    /// Starts delivering frames to a new registration.
    fn register(&mut self) -> TickToken;

    /// Stops delivering frames to `token`.
    ///
    /// Unregistering an unknown or already removed token must be a no-op.
    fn unregister(&mut self, token: TickToken);
}

/// A [`TickSource`] that only records registrations.
///
/// Frames are delivered by the caller, which makes this suitable for tests and
/// for hosts that already run their own frame loop and only need to know
/// whether anything is still animating.
#[derive(Clone, Debug, Default)]
pub struct ManualTickSource {
    next: u64,
    live: Vec<TickToken>,
}

impl ManualTickSource {
    /// Creates a source with no registrations.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: 0,
            live: Vec::new(),
        }
    }

    /// Returns `true` if `token` is currently registered.
    #[must_use]
    pub fn is_registered(&self, token: TickToken) -> bool {
        self.live.contains(&token)
    }

    /// Currently registered tokens, oldest first.
    #[must_use]
    pub fn registrations(&self) -> &[TickToken] {
        &self.live
    }

    /// Number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl TickSource for ManualTickSource {
    fn register(&mut self) -> TickToken {
        let token = TickToken(self.next);
        self.next += 1;
        self.live.push(token);
        token
    }

    fn unregister(&mut self, token: TickToken) {
        self.live.retain(|t| *t != token);
    }
}

/// Result of delivering one frame to an [`Animator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// The frame was not for this animator, or it is no longer running.
    Ignored,
    /// Progress was reported and the animation continues.
    Running(f32),
    /// Progress was reported and the animation has ended.
    Finished(f32),
}

impl TickOutcome {
    /// Reported progress, if any.
    #[must_use]
    pub const fn progress(self) -> Option<f32> {
        match self {
            Self::Ignored => None,
            Self::Running(p) | Self::Finished(p) => Some(p),
        }
    }
}

/// Produces normalized progress `0 → 1` over a fixed duration.
///
/// Progress is clamped to `[0, 1]` and never decreases within one run.
///
/// Dropping an animator does not unregister it, because that needs the
/// source. Call [`cancel`](Self::cancel) before dropping a running animator,
/// or its token stays registered.
#[derive(Clone, Debug)]
pub struct Animator {
    token: Option<TickToken>,
    duration: f64,
    reference: Option<f64>,
    progress: f32,
}

impl Animator {
    /// Registers with `source` and reports progress `0` to `on_tick`.
    ///
    /// `duration` must be non-zero; [`Configuration`](crate::Configuration)
    /// guarantees this for durations it hands out.
    pub fn start<S, F>(source: &mut S, duration: Duration, mut on_tick: F) -> Self
    where
        S: TickSource + ?Sized,
        F: FnMut(f32),
    {
        debug_assert!(!duration.is_zero(), "animation duration must be non-zero");
        let token = source.register();
        tracing::trace!(
            token = token.0,
            duration = duration.as_secs_f64(),
            "animator registered"
        );
        on_tick(0.0);
        Self {
            token: Some(token),
            duration: duration.as_secs_f64(),
            reference: None,
            progress: 0.0,
        }
    }

    /// Token of the live registration, or `None` once finished or cancelled.
    #[must_use]
    pub const fn token(&self) -> Option<TickToken> {
        self.token
    }

    /// Returns `true` until the run finishes or is cancelled.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.token.is_some()
    }

    /// Last reported progress.
    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Delivers a frame stamped `now` (seconds, monotonic).
    ///
    /// Frames for another token, or arriving after the run ended, are ignored.
    pub fn tick<S, F>(
        &mut self,
        source: &mut S,
        token: TickToken,
        now: f64,
        mut on_tick: F,
    ) -> TickOutcome
    where
        S: TickSource + ?Sized,
        F: FnMut(f32),
    {
        if self.token != Some(token) {
            return TickOutcome::Ignored;
        }

        let reference = *self.reference.get_or_insert(now);
        let elapsed = now - reference;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "progress is clamped to [0, 1] before narrowing"
        )]
        let raw = (elapsed / self.duration).clamp(0.0, 1.0) as f32;
        self.progress = self.progress.max(raw);
        on_tick(self.progress);

        if elapsed > self.duration {
            self.cancel(source);
            TickOutcome::Finished(self.progress)
        } else {
            TickOutcome::Running(self.progress)
        }
    }

    /// Unregisters from `source`. Idempotent.
    pub fn cancel<S: TickSource + ?Sized>(&mut self, source: &mut S) {
        if let Some(token) = self.token.take() {
            source.unregister(token);
            tracing::trace!(token = token.0, progress = self.progress, "animator unregistered");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn start_reports_zero_synchronously_and_registers() {
        let mut source = ManualTickSource::new();
        let mut seen = vec![];
        let animator = Animator::start(&mut source, secs(0.2), |p| seen.push(p));
        assert_eq!(seen, [0.0]);
        assert!(animator.is_running());
        assert!(source.is_registered(animator.token().unwrap()));
    }

    #[test]
    fn first_tick_sets_reference() {
        let mut source = ManualTickSource::new();
        let mut animator = Animator::start(&mut source, secs(1.0), |_| {});
        let token = animator.token().unwrap();
        assert_eq!(animator.tick(&mut source, token, 500.0, |_| {}), TickOutcome::Running(0.0));
        assert_eq!(animator.tick(&mut source, token, 500.25, |_| {}), TickOutcome::Running(0.25));
    }

    #[test]
    fn finishes_only_after_duration_is_exceeded() {
        let mut source = ManualTickSource::new();
        let mut animator = Animator::start(&mut source, secs(1.0), |_| {});
        let token = animator.token().unwrap();
        animator.tick(&mut source, token, 0.0, |_| {});
        // Exactly at the duration the run is still alive.
        assert_eq!(animator.tick(&mut source, token, 1.0, |_| {}), TickOutcome::Running(1.0));
        assert!(animator.is_running());
        assert_eq!(animator.tick(&mut source, token, 1.5, |_| {}), TickOutcome::Finished(1.0));
        assert!(!animator.is_running());
        assert!(source.is_empty());
    }

    #[test]
    fn no_tick_is_delivered_after_finishing() {
        let mut source = ManualTickSource::new();
        let mut animator = Animator::start(&mut source, secs(0.1), |_| {});
        let token = animator.token().unwrap();
        animator.tick(&mut source, token, 0.0, |_| {});
        animator.tick(&mut source, token, 0.5, |_| {});

        let mut late = vec![];
        let outcome = animator.tick(&mut source, token, 0.6, |p| late.push(p));
        assert_eq!(outcome, TickOutcome::Ignored);
        assert!(late.is_empty());
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let mut source = ManualTickSource::new();
        let mut seen = vec![];
        let mut animator = Animator::start(&mut source, secs(1.0), |p| seen.push(p));
        let token = animator.token().unwrap();
        for now in [2.0, 2.1, 2.05, 2.6, 2.6, 3.9] {
            animator.tick(&mut source, token, now, |p| seen.push(p));
        }
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert!(seen.iter().all(|p| (0.0..=1.0).contains(p)));
        assert_eq!(seen.last(), Some(&1.0));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut source = ManualTickSource::new();
        let mut animator = Animator::start(&mut source, secs(1.0), |_| {});
        let token = animator.token().unwrap();
        animator.cancel(&mut source);
        animator.cancel(&mut source);
        assert!(!animator.is_running());
        assert!(!source.is_registered(token));
        assert_eq!(animator.tick(&mut source, token, 0.0, |_| {}), TickOutcome::Ignored);
    }

    #[test]
    fn foreign_tokens_are_ignored() {
        let mut source = ManualTickSource::new();
        let mut a = Animator::start(&mut source, secs(1.0), |_| {});
        let b = Animator::start(&mut source, secs(1.0), |_| {});
        let foreign = b.token().unwrap();
        assert_eq!(a.tick(&mut source, foreign, 0.0, |_| {}), TickOutcome::Ignored);
        assert_eq!(source.len(), 2);
    }
}
