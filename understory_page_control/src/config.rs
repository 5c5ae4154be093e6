// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control configuration and its validation.

use core::fmt;
use core::time::Duration;

use kurbo::Insets;

use crate::axis::LayoutAxis;

/// Error returned when a [`ConfigurationBuilder`] holds an invalid value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Spacing was negative.
    NegativeSpacing(f64),
    /// At least one padding was negative.
    NegativePadding(Insets),
    /// Spacing or a padding was `NaN` or infinite.
    NonFiniteValue,
    /// The animation duration was zero.
    ZeroAnimationDuration,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeSpacing(spacing) => {
                write!(f, "spacing must be non-negative, got {spacing}")
            }
            Self::NegativePadding(insets) => write!(
                f,
                "paddings must be non-negative, got left {} top {} right {} bottom {}",
                insets.x0, insets.y0, insets.x1, insets.y1
            ),
            Self::NonFiniteValue => f.write_str("spacing and paddings must be finite"),
            Self::ZeroAnimationDuration => f.write_str("animation duration must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Layout and interaction settings of a [`PageControl`](crate::PageControl).
///
/// Values are validated on construction, so every `Configuration` in
/// circulation has non-negative finite spacing and paddings and a non-zero
/// animation duration.
///
/// ```
/// use core::time::Duration;
/// use kurbo::Insets;
/// use understory_page_control::{Configuration, LayoutAxis};
///
/// let config = Configuration::builder()
///     .axis(LayoutAxis::Vertical)
///     .spacing(8.0)
///     .paddings(Insets::uniform(4.0))
///     .animation_duration(Duration::from_millis(250))
///     .build()
///     .unwrap();
/// assert_eq!(config.axis(), LayoutAxis::Vertical);
///
/// assert!(Configuration::builder().spacing(-1.0).build().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Configuration {
    axis: LayoutAxis,
    spacing: f64,
    paddings: Insets,
    tap_advances_index: bool,
    animation_duration: Duration,
}

impl Configuration {
    /// Spacing used by [`Configuration::default`].
    pub const DEFAULT_SPACING: f64 = 5.0;

    /// Animation duration used by [`Configuration::default`].
    pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(150);

    /// Starts a builder populated with the default values.
    #[must_use]
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder {
            config: Self::default(),
        }
    }

    /// Starts a builder populated with this configuration's values.
    #[must_use]
    pub fn to_builder(&self) -> ConfigurationBuilder {
        ConfigurationBuilder { config: *self }
    }

    /// Layout direction.
    #[must_use]
    pub const fn axis(&self) -> LayoutAxis {
        self.axis
    }

    /// Gap between neighbouring dots along the layout axis.
    #[must_use]
    pub const fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Paddings around the dots (`x0` left, `y0` top, `x1` right, `y1` bottom).
    #[must_use]
    pub const fn paddings(&self) -> Insets {
        self.paddings
    }

    /// Whether a tap moves the active index one page towards the tap.
    #[must_use]
    pub const fn tap_advances_index(&self) -> bool {
        self.tap_advances_index
    }

    /// Duration of animated index changes.
    #[must_use]
    pub const fn animation_duration(&self) -> Duration {
        self.animation_duration
    }
}

impl Default for Configuration {
    /// Horizontal, 5px spacing, no paddings, tapping enabled, 150ms animations.
    fn default() -> Self {
        Self {
            axis: LayoutAxis::Horizontal,
            spacing: Self::DEFAULT_SPACING,
            paddings: Insets::ZERO,
            tap_advances_index: true,
            animation_duration: Self::DEFAULT_ANIMATION_DURATION,
        }
    }
}

/// Builder for [`Configuration`].
#[derive(Clone, Copy, Debug)]
#[must_use]
pub struct ConfigurationBuilder {
    config: Configuration,
}

impl ConfigurationBuilder {
    /// Sets the layout direction.
    pub fn axis(mut self, axis: LayoutAxis) -> Self {
        self.config.axis = axis;
        self
    }

    /// Sets the gap between neighbouring dots.
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.config.spacing = spacing;
        self
    }

    /// Sets the paddings around the dots.
    pub fn paddings(mut self, paddings: Insets) -> Self {
        self.config.paddings = paddings;
        self
    }

    /// Enables or disables tap navigation.
    pub fn tap_advances_index(mut self, enabled: bool) -> Self {
        self.config.tap_advances_index = enabled;
        self
    }

    /// Sets the duration of animated index changes.
    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.config.animation_duration = duration;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if spacing or paddings are negative or not
    /// finite, or if the animation duration is zero.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        let Configuration {
            spacing,
            paddings,
            animation_duration,
            ..
        } = self.config;

        let finite = spacing.is_finite()
            && paddings.x0.is_finite()
            && paddings.y0.is_finite()
            && paddings.x1.is_finite()
            && paddings.y1.is_finite();
        if !finite {
            return Err(ConfigError::NonFiniteValue);
        }
        if spacing < 0.0 {
            return Err(ConfigError::NegativeSpacing(spacing));
        }
        if paddings.x0 < 0.0 || paddings.y0 < 0.0 || paddings.x1 < 0.0 || paddings.y1 < 0.0 {
            return Err(ConfigError::NegativePadding(paddings));
        }
        if animation_duration.is_zero() {
            return Err(ConfigError::ZeroAnimationDuration);
        }
        Ok(self.config)
    }
}
