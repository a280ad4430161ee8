// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop shadow parameters.

use core::f64::consts::FRAC_PI_6;

use peniko::Color;

/// A fully specified drop shadow.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DropShadowRecord {
    /// Shadow opacity.
    pub alpha: f32,
    /// Direction of the offset, in radians.
    pub angle: f64,
    /// Blur radius.
    pub blur: f64,
    /// Shadow color.
    pub color: Color,
    /// Offset distance.
    pub distance: f64,
}

impl DropShadowRecord {
    /// Alpha 1, angle π/6, no blur, black, distance 5.
    pub const DEFAULT: Self = Self {
        alpha: 1.0,
        angle: FRAC_PI_6,
        blur: 0.0,
        color: Color::BLACK,
        distance: 5.0,
    };
}

impl Default for DropShadowRecord {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A partial drop shadow; unset fields fall back to [`DropShadowRecord::DEFAULT`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DropShadowOptions {
    /// Shadow opacity.
    pub alpha: Option<f32>,
    /// Direction of the offset, in radians.
    pub angle: Option<f64>,
    /// Blur radius.
    pub blur: Option<f64>,
    /// Shadow color.
    pub color: Option<Color>,
    /// Offset distance.
    pub distance: Option<f64>,
}

impl DropShadowOptions {
    /// Fills unset fields from the default record.
    #[must_use]
    pub fn resolve(self) -> DropShadowRecord {
        let d = DropShadowRecord::DEFAULT;
        DropShadowRecord {
            alpha: self.alpha.unwrap_or(d.alpha),
            angle: self.angle.unwrap_or(d.angle),
            blur: self.blur.unwrap_or(d.blur),
            color: self.color.unwrap_or(d.color),
            distance: self.distance.unwrap_or(d.distance),
        }
    }
}

/// Drop shadow state of a style.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum DropShadow {
    /// No shadow.
    #[default]
    Off,
    /// A shadow with the given parameters.
    On(DropShadowRecord),
}

impl DropShadow {
    /// The active record, if any.
    #[must_use]
    pub fn record(&self) -> Option<&DropShadowRecord> {
        match self {
            Self::Off => None,
            Self::On(record) => Some(record),
        }
    }
}

/// Anything accepted by [`TextStyle::set_drop_shadow`](crate::TextStyle::set_drop_shadow).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DropShadowInput {
    /// `true` enables the default shadow, `false` disables it.
    Enabled(bool),
    /// A partial record merged over the defaults.
    Options(DropShadowOptions),
    /// A complete state.
    Shadow(DropShadow),
}

impl DropShadowInput {
    pub(crate) fn resolve(self) -> DropShadow {
        match self {
            Self::Enabled(false) => DropShadow::Off,
            Self::Enabled(true) => DropShadow::On(DropShadowRecord::DEFAULT),
            Self::Options(options) => DropShadow::On(options.resolve()),
            Self::Shadow(shadow) => shadow,
        }
    }
}

impl From<bool> for DropShadowInput {
    fn from(enabled: bool) -> Self {
        Self::Enabled(enabled)
    }
}

impl From<DropShadowOptions> for DropShadowInput {
    fn from(options: DropShadowOptions) -> Self {
        Self::Options(options)
    }
}

impl From<DropShadowRecord> for DropShadowInput {
    fn from(record: DropShadowRecord) -> Self {
        Self::Shadow(DropShadow::On(record))
    }
}

impl From<DropShadow> for DropShadowInput {
    fn from(shadow: DropShadow) -> Self {
        Self::Shadow(shadow)
    }
}
