// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous active-index state and per-dot blend factors.
//!
//! The active index is an `f32` in `[0, count - 1]`. An integral value means a
//! single dot is fully active; a fractional value splits the highlight between
//! the two neighbouring dots.
//!
//! ```
//! use understory_page_control::ActiveIndex;
//!
//! let mut index = ActiveIndex::new();
//! index.set(2.25, 5);
//!
//! let factors: Vec<f32> = index.blend_factors(5).collect();
//! assert_eq!(factors, [0.0, 0.0, 0.75, 0.25, 0.0]);
//! ```

/// Clamped, continuous active index.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActiveIndex {
    value: f32,
}

impl ActiveIndex {
    /// Creates an index at `0.0`.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Current value.
    #[must_use]
    pub const fn get(&self) -> f32 {
        self.value
    }

    /// Stores `value` clamped to `[0, count - 1]`.
    ///
    /// With `count == 0` the index is meaningless and the write is dropped.
    /// Returns `true` if the stored value changed.
    pub fn set(&mut self, value: f32, count: usize) -> bool {
        let Some(clamped) = clamp_index(value, count) else {
            return false;
        };
        if clamped == self.value {
            return false;
        }
        self.value = clamped;
        true
    }

    /// Re-clamps the current value after the dot count changed.
    ///
    /// Returns `true` if the stored value changed.
    pub fn reclamp(&mut self, count: usize) -> bool {
        self.set(self.value, count)
    }

    /// Blend factor of the dot at `position` (`0` regular, `1` active).
    #[must_use]
    pub fn blend_factor(&self, position: usize) -> f32 {
        blend_factor(self.value, position)
    }

    /// Blend factors for every dot in `0..count`.
    pub fn blend_factors(&self, count: usize) -> impl Iterator<Item = f32> + '_ {
        (0..count).map(|position| self.blend_factor(position))
    }
}

/// Clamps a raw index into `[0, count - 1]`, or `None` when there are no dots.
///
/// `NaN` is treated as `0`.
#[must_use]
pub fn clamp_index(value: f32, count: usize) -> Option<f32> {
    if count == 0 {
        return None;
    }
    let last = (count - 1) as f32;
    if value.is_nan() {
        return Some(0.0);
    }
    Some(value.clamp(0.0, last))
}

/// Blend factor of the dot at `position` for a continuous `active_index`.
///
/// Let `f = floor(active_index)`, `c = ceil(active_index)` and
/// `t = active_index - f`. Dot `c` receives `t`, dot `f` receives `1 - t`
/// (so an integral index makes that single dot fully active), every other
/// dot receives `0`.
#[must_use]
pub fn blend_factor(active_index: f32, position: usize) -> f32 {
    let floor = libm::floorf(active_index);
    let ceil = libm::ceilf(active_index);
    let t = active_index - floor;

    // Page counts stay far below f32's exact integer range.
    let position = position as f32;
    if position == floor {
        1.0 - t
    } else if position == ceil {
        t
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn set_clamps_into_range() {
        let mut index = ActiveIndex::new();
        index.set(-1.0, 5);
        assert_eq!(index.get(), 0.0);
        index.set(100.0, 5);
        assert_eq!(index.get(), 4.0);
        index.set(2.5, 5);
        assert_eq!(index.get(), 2.5);
    }

    #[test]
    fn clamp_matches_reference_for_many_inputs() {
        for count in 1..8_usize {
            for step in -40..=120 {
                let raw = step as f32 * 0.1;
                let mut index = ActiveIndex::new();
                index.set(raw, count);
                let expected = raw.max(0.0).min((count - 1) as f32);
                assert_eq!(index.get(), expected, "count={count} raw={raw}");
            }
        }
    }

    #[test]
    fn empty_count_drops_writes() {
        let mut index = ActiveIndex::new();
        index.set(3.0, 5);
        assert!(!index.set(1.0, 0));
        assert_eq!(index.get(), 3.0);
    }

    #[test]
    fn set_reports_changes() {
        let mut index = ActiveIndex::new();
        assert!(!index.set(0.0, 3));
        assert!(index.set(1.0, 3));
        assert!(!index.set(1.0, 3));
        // Clamps to the value already stored.
        assert!(!index.set(7.0, 2));
        assert_eq!(index.get(), 1.0);
    }

    #[test]
    fn reclamp_pulls_index_into_shorter_range() {
        let mut index = ActiveIndex::new();
        index.set(4.0, 5);
        assert!(index.reclamp(2));
        assert_eq!(index.get(), 1.0);
    }

    #[test]
    fn nan_is_treated_as_zero() {
        assert_eq!(clamp_index(f32::NAN, 3), Some(0.0));
    }

    #[test]
    fn integral_index_has_single_active_dot() {
        let mut index = ActiveIndex::new();
        index.set(3.0, 5);
        let factors: Vec<f32> = index.blend_factors(5).collect();
        assert_eq!(factors, [0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn fractional_index_splits_between_neighbours() {
        let mut index = ActiveIndex::new();
        for raw in [0.25_f32, 1.5, 2.75, 3.125] {
            index.set(raw, 5);
            let factors: Vec<f32> = index.blend_factors(5).collect();
            let non_zero: Vec<(usize, f32)> = factors
                .iter()
                .copied()
                .enumerate()
                .filter(|(_, f)| *f != 0.0)
                .collect();
            assert_eq!(non_zero.len(), 2, "raw={raw}");
            assert_eq!(non_zero[1].0, non_zero[0].0 + 1);
            assert_eq!(non_zero[0].1 + non_zero[1].1, 1.0);
            assert_eq!(non_zero[1].1, raw - libm::floorf(raw));
        }
    }

    #[test]
    fn last_dot_is_fully_active_at_upper_bound() {
        assert_eq!(blend_factor(4.0, 4), 1.0);
        assert_eq!(blend_factor(4.0, 3), 0.0);
    }
}
