// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout axis and primary/secondary coordinate transforms.
//!
//! Layout, measurement and tap routing are written once in terms of a
//! *primary* axis (the direction dots are laid out in) and a *secondary*
//! (cross) axis. [`LayoutAxis`] converts between those logical axes and
//! concrete `x`/`y` fields at the edges.

use kurbo::{Insets, Point, Size};

/// Direction in which dots are laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutAxis {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl LayoutAxis {
    /// Extent of `size` along the primary axis.
    #[must_use]
    pub const fn primary(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` along the secondary axis.
    #[must_use]
    pub const fn secondary(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Coordinate of `point` along the primary axis.
    #[must_use]
    pub const fn primary_coord(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Builds a size from primary and secondary extents.
    #[must_use]
    pub const fn size(self, primary: f64, secondary: f64) -> Size {
        match self {
            Self::Horizontal => Size::new(primary, secondary),
            Self::Vertical => Size::new(secondary, primary),
        }
    }

    /// Builds a point from primary and secondary coordinates.
    #[must_use]
    pub const fn point(self, primary: f64, secondary: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(primary, secondary),
            Self::Vertical => Point::new(secondary, primary),
        }
    }

    /// Paddings as `(leading, trailing)` along the primary axis.
    #[must_use]
    pub const fn primary_insets(self, insets: Insets) -> (f64, f64) {
        match self {
            Self::Horizontal => (insets.x0, insets.x1),
            Self::Vertical => (insets.y0, insets.y1),
        }
    }

    /// Paddings as `(leading, trailing)` along the secondary axis.
    #[must_use]
    pub const fn secondary_insets(self, insets: Insets) -> (f64, f64) {
        match self {
            Self::Horizontal => (insets.y0, insets.y1),
            Self::Vertical => (insets.x0, insets.x1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_round_trips_through_logical_axes() {
        let size = Size::new(30.0, 12.0);
        for axis in [LayoutAxis::Horizontal, LayoutAxis::Vertical] {
            assert_eq!(axis.size(axis.primary(size), axis.secondary(size)), size);
        }
    }

    #[test]
    fn vertical_swaps_roles() {
        let size = Size::new(30.0, 12.0);
        assert_eq!(LayoutAxis::Vertical.primary(size), 12.0);
        assert_eq!(LayoutAxis::Vertical.point(1.0, 2.0), Point::new(2.0, 1.0));
        assert_eq!(LayoutAxis::Vertical.primary_coord(Point::new(1.0, 2.0)), 2.0);
    }

    #[test]
    fn insets_follow_axis() {
        // left, top, right, bottom
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(LayoutAxis::Horizontal.primary_insets(insets), (1.0, 3.0));
        assert_eq!(LayoutAxis::Horizontal.secondary_insets(insets), (2.0, 4.0));
        assert_eq!(LayoutAxis::Vertical.primary_insets(insets), (2.0, 4.0));
        assert_eq!(LayoutAxis::Vertical.secondary_insets(insets), (1.0, 3.0));
    }
}
