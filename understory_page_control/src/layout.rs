// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aware dot layout and intrinsic size.
//!
//! Both passes work on the *rendered* size of each dot (after style blending),
//! so a growing active dot pushes its neighbours apart while an animation runs.
//! They are computed in primary/secondary terms and mapped onto `x`/`y` through
//! [`LayoutAxis`](crate::LayoutAxis).
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_page_control::{Configuration, layout, measure};
//!
//! let config = Configuration::default(); // horizontal, spacing 5
//! let sizes = [Size::new(20.0, 20.0); 3];
//!
//! let size = measure(&sizes, &config);
//! assert_eq!(size, Size::new(70.0, 20.0));
//!
//! let frames = layout(&sizes, &config, size);
//! assert_eq!(frames[1], Rect::new(25.0, 0.0, 45.0, 20.0));
//! ```

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::config::Configuration;

/// Size that exactly fits `sizes` laid out with `config`, paddings included.
///
/// The primary extent is the sum of the dots' primary extents plus one
/// `spacing` between each neighbouring pair; the secondary extent is the
/// largest secondary extent. With no dots only the paddings remain.
#[must_use]
pub fn measure(sizes: &[Size], config: &Configuration) -> Size {
    let axis = config.axis();
    let spacing = config.spacing();

    let (primary, secondary) = sizes.iter().fold((-spacing, 0.0_f64), |(p, s), size| {
        (p + spacing + axis.primary(*size), s.max(axis.secondary(*size)))
    });
    // An empty fold leaves the `-spacing` seed behind.
    let primary = primary.max(0.0);

    let (lead, trail) = axis.primary_insets(config.paddings());
    let (cross_lead, cross_trail) = axis.secondary_insets(config.paddings());
    axis.size(lead + primary + trail, cross_lead + secondary + cross_trail)
}

/// Frames of `sizes` laid out inside `bounds`.
///
/// Dots start at the leading padding, follow each other along the primary axis
/// separated by `spacing`, and are centered on the secondary axis within the
/// content box (`bounds` minus paddings). Frames are in the control's local
/// coordinate space, in dot order.
#[must_use]
pub fn layout(sizes: &[Size], config: &Configuration, bounds: Size) -> Vec<Rect> {
    let axis = config.axis();
    let spacing = config.spacing();
    let (lead, _) = axis.primary_insets(config.paddings());
    let (cross_lead, cross_trail) = axis.secondary_insets(config.paddings());

    let content_secondary = axis.secondary(bounds) - cross_lead - cross_trail;
    let center_secondary = cross_lead + content_secondary / 2.0;

    let mut cursor = lead;
    sizes
        .iter()
        .map(|size| {
            let extent = axis.primary(*size);
            let center = axis.point(cursor + extent / 2.0, center_secondary);
            cursor += extent + spacing;
            Rect::from_center_size(center, *size)
        })
        .collect()
}
