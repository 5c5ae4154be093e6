// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dot styles and the style interpolator.
//!
//! A [`Dot`] pairs a *regular* and an *active* [`DotStyle`]. The control never
//! renders either style directly; it asks [`Dot::style_at`] for a blend keyed
//! by a factor in `[0, 1]`, where `0` is fully regular and `1` fully active.
//!
//! ## Minimal example
//!
//! ```
//! use understory_page_control::{DotStyle, blend};
//! use peniko::Color;
//!
//! let from = DotStyle::new(10.0, Color::TRANSPARENT, Color::BLACK, 2.0);
//! let to = DotStyle::new(14.0, Color::BLACK, Color::TRANSPARENT, 0.0);
//!
//! let mid = blend(&from, &to, 0.5);
//! assert_eq!(mid.radius, 12.0);
//! assert_eq!(mid.stroke_width, 1.0);
//! // Fading in from transparent keeps the hue of the target.
//! assert_eq!(mid.fill_color.components, [0.0, 0.0, 0.0, 0.5]);
//! ```

use kurbo::Size;
use peniko::Color;

/// Visual style of a single dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotStyle {
    /// Radius of the dot, in logical pixels.
    pub radius: f32,
    /// Fill color.
    pub fill_color: Color,
    /// Stroke color.
    pub stroke_color: Color,
    /// Stroke width, in logical pixels.
    pub stroke_width: f32,
}

impl DotStyle {
    /// Creates a new style.
    #[must_use]
    pub const fn new(radius: f32, fill_color: Color, stroke_color: Color, stroke_width: f32) -> Self {
        Self {
            radius,
            fill_color,
            stroke_color,
            stroke_width,
        }
    }

    /// Rendered size of a dot with this style.
    ///
    /// Dots are drawn as circles inscribed in a square of side `2 * radius`;
    /// the stroke is drawn inside that square and does not affect the size.
    #[must_use]
    pub fn size(&self) -> Size {
        let diameter = f64::from(self.radius) * 2.0;
        Size::new(diameter, diameter)
    }
}

/// A page dot: the style it has when inactive and the style it has when active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    /// Style used when the dot is not the active page.
    pub regular_style: DotStyle,
    /// Style used when the dot is the active page.
    pub active_style: DotStyle,
}

impl Dot {
    /// Creates a new dot from its two styles.
    #[must_use]
    pub const fn new(regular_style: DotStyle, active_style: DotStyle) -> Self {
        Self {
            regular_style,
            active_style,
        }
    }

    /// Returns the style for a blend factor in `[0, 1]` (`0` regular, `1` active).
    ///
    /// Out-of-range factors are clamped.
    #[must_use]
    pub fn style_at(&self, factor: f32) -> DotStyle {
        blend(&self.regular_style, &self.active_style, factor)
    }
}

impl Default for Dot {
    /// An outlined black ring that fills in solid black when active.
    fn default() -> Self {
        Self {
            regular_style: DotStyle::new(10.0, Color::TRANSPARENT, Color::BLACK, 2.0),
            active_style: DotStyle::new(10.0, Color::BLACK, Color::TRANSPARENT, 0.0),
        }
    }
}

/// Blends two styles by `t`, clamped to `[0, 1]`. `NaN` is treated as `0`.
///
/// Scalar fields interpolate linearly. Colors interpolate per component in
/// straight-alpha sRGB, except that a fully transparent endpoint borrows the
/// RGB channels of the other endpoint, so fades to and from transparency
/// never pass through an unrelated hue.
///
/// `t == 0` returns `from` exactly and `t == 1` returns `to` exactly.
#[must_use]
pub fn blend(from: &DotStyle, to: &DotStyle, t: f32) -> DotStyle {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    DotStyle {
        radius: lerp(from.radius, to.radius, t),
        fill_color: lerp_color(from.fill_color, to.fill_color, t),
        stroke_color: lerp_color(from.stroke_color, to.stroke_color, t),
        stroke_width: lerp(from.stroke_width, to.stroke_width, t),
    }
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    if t == 0.0 {
        from
    } else if t == 1.0 {
        to
    } else {
        from + t * (to - from)
    }
}

fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let mut from = from.components;
    let mut to = to.components;

    if from[3] == 0.0 {
        from[..3].copy_from_slice(&to[..3]);
    }
    if to[3] == 0.0 {
        to[..3].copy_from_slice(&from[..3]);
    }

    Color::new([
        lerp(from[0], to[0], t),
        lerp(from[1], to[1], t),
        lerp(from[2], to[2], t),
        lerp(from[3], to[3], t),
    ])
}
