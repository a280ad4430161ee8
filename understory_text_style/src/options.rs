// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partial style configuration.

use alloc::vec::Vec;

use peniko::Color;

use crate::font::{
    FontFamily, FontSize, FontStyle, FontVariant, FontWeight, TextAlign, TextBaseline, WhiteSpace,
};
use crate::paint::{PaintInput, StrokeInput};
use crate::shadow::DropShadowInput;

/// Options accepted by [`TextStyle::new`](crate::TextStyle::new).
///
/// Every field is optional; unset fields take the documented default:
///
/// | Field | Default |
/// |-------|---------|
/// | `align` | left |
/// | `break_words` | `false` |
/// | `drop_shadow` | off |
/// | `fill` | `"black"` |
/// | `font_family` | `"Arial"` |
/// | `font_size` | `26` |
/// | `font_style`, `font_variant`, `font_weight` | normal |
/// | `leading`, `letter_spacing`, `line_height`, `padding` | `0` |
/// | `stroke` | none |
/// | `text_baseline` | alphabetic |
/// | `trim` | `false` |
/// | `white_space` | pre |
/// | `word_wrap` | `false` |
/// | `word_wrap_width` | `100` |
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextStyleOptions {
    /// Horizontal alignment of multi-line text.
    pub align: Option<TextAlign>,
    /// Whether words longer than the wrap width may be broken.
    pub break_words: Option<bool>,
    /// Drop shadow: a flag, a partial record, or a complete state.
    pub drop_shadow: Option<DropShadowInput>,
    /// Raw fill paint.
    pub fill: Option<PaintInput>,
    /// Font families in fallback order.
    pub font_family: Option<FontFamily>,
    /// Font size in pixels or as a CSS-like string.
    pub font_size: Option<FontSize>,
    /// Font slant.
    pub font_style: Option<FontStyle>,
    /// Font variant.
    pub font_variant: Option<FontVariant>,
    /// Font weight.
    pub font_weight: Option<FontWeight>,
    /// Extra space between lines.
    pub leading: Option<f64>,
    /// Extra space between glyphs.
    pub letter_spacing: Option<f64>,
    /// Line height; `0` means derived from font metrics.
    pub line_height: Option<f64>,
    /// Padding around the rendered text.
    pub padding: Option<f64>,
    /// Raw stroke.
    pub stroke: Option<StrokeInput>,
    /// Vertical baseline.
    pub text_baseline: Option<TextBaseline>,
    /// Whether transparent borders are trimmed from the output.
    pub trim: Option<bool>,
    /// Whitespace handling.
    pub white_space: Option<WhiteSpace>,
    /// Whether lines wrap at `word_wrap_width`.
    pub word_wrap: Option<bool>,
    /// Wrap width.
    pub word_wrap_width: Option<f64>,
    /// Deprecated option shapes, migrated at construction.
    pub legacy: LegacyOptions,
}

impl TextStyleOptions {
    /// Empty options; every property takes its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alignment.
    #[must_use]
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    /// Sets the drop shadow.
    #[must_use]
    pub fn with_drop_shadow(mut self, drop_shadow: impl Into<DropShadowInput>) -> Self {
        self.drop_shadow = Some(drop_shadow.into());
        self
    }

    /// Sets the fill.
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<PaintInput>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Sets the font families.
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<FontFamily>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Sets the font size.
    #[must_use]
    pub fn with_font_size(mut self, size: impl Into<FontSize>) -> Self {
        self.font_size = Some(size.into());
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Sets the stroke.
    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<StrokeInput>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    /// Enables word wrapping at `width`.
    #[must_use]
    pub fn with_word_wrap(mut self, width: f64) -> Self {
        self.word_wrap = Some(true);
        self.word_wrap_width = Some(width);
        self
    }
}

/// Option shapes from older releases.
///
/// These are folded into [`TextStyleOptions`] once, before defaults are
/// applied, and each use is reported to the deprecation sink.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegacyOptions {
    /// Shadow opacity, used with `drop_shadow: Enabled(true)`.
    pub drop_shadow_alpha: Option<f32>,
    /// Shadow angle, used with `drop_shadow: Enabled(true)`.
    pub drop_shadow_angle: Option<f64>,
    /// Shadow blur, used with `drop_shadow: Enabled(true)`.
    pub drop_shadow_blur: Option<f64>,
    /// Shadow color, used with `drop_shadow: Enabled(true)`.
    pub drop_shadow_color: Option<Color>,
    /// Shadow distance, used with `drop_shadow: Enabled(true)`.
    pub drop_shadow_distance: Option<f64>,
    /// Stroke width; now part of the stroke itself.
    pub stroke_thickness: Option<f64>,
    /// Stop positions for a color-list fill.
    pub fill_gradient_stops: Option<Vec<f32>>,
}

impl LegacyOptions {
    /// Returns `true` if no legacy field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
