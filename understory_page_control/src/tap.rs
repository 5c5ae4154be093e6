// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap routing: which way a tap moves the active index.

use kurbo::{Point, Size};

use crate::config::Configuration;

/// Direction a tap moves the active index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TapDirection {
    /// One page towards the leading edge.
    Backward,
    /// One page towards the trailing edge.
    Forward,
}

impl TapDirection {
    /// The index delta, `-1` or `+1`.
    #[must_use]
    pub const fn delta(self) -> f32 {
        match self {
            Self::Backward => -1.0,
            Self::Forward => 1.0,
        }
    }

    /// Target index for a tap while the control shows `active_index`.
    ///
    /// The result is not clamped.
    #[must_use]
    pub fn target(self, active_index: f32) -> f32 {
        libm::roundf(active_index) + self.delta()
    }
}

/// Classifies a tap at `point` inside a control of size `bounds`.
///
/// The split is the center of the content box along the layout axis, so
/// asymmetric paddings shift it. Taps exactly on the center count as
/// [`TapDirection::Backward`].
#[must_use]
pub fn locate_tap(point: Point, bounds: Size, config: &Configuration) -> TapDirection {
    let axis = config.axis();
    let (lead, trail) = axis.primary_insets(config.paddings());
    let center = (axis.primary(bounds) + lead - trail) / 2.0;
    if axis.primary_coord(point) - center > 0.0 {
        TapDirection::Forward
    } else {
        TapDirection::Backward
    }
}
