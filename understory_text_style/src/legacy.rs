// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Migration of deprecated option shapes.

use alloc::vec::Vec;
use core::mem;

use kurbo::Point;

use crate::deprecation::DeprecationSink;
use crate::error::UnsupportedPaintInput;
use crate::options::TextStyleOptions;
use crate::paint::{ColorValue, LinearGradient, PaintInput};
use crate::shadow::{DropShadowInput, DropShadowOptions};
use crate::style::DEFAULT_FONT_SIZE;

const SINCE: &str = "8.0.0";

/// Legacy gradients span this many font sizes vertically.
const GRADIENT_HEIGHT_PER_FONT_SIZE: f64 = 1.7;

/// Rewrites deprecated shapes in `options` into their current form.
///
/// Consumes `options.legacy`. Each rewrite reports one notice to `sink`.
pub(crate) fn migrate(
    options: &mut TextStyleOptions,
    sink: &dyn DeprecationSink,
) -> Result<(), UnsupportedPaintInput> {
    let legacy = mem::take(&mut options.legacy);

    if options.drop_shadow == Some(DropShadowInput::Enabled(true)) {
        sink.deprecated(SINCE, "dropShadow is now an object, not a boolean");
        options.drop_shadow = Some(DropShadowInput::Options(DropShadowOptions {
            alpha: legacy.drop_shadow_alpha,
            angle: legacy.drop_shadow_angle,
            blur: legacy.drop_shadow_blur,
            color: legacy.drop_shadow_color,
            distance: legacy.drop_shadow_distance,
        }));
    }

    if let Some(width) = legacy.stroke_thickness.filter(|w| *w != 0.0) {
        sink.deprecated(SINCE, "strokeThickness is now a part of stroke");
        let mut stroke = options.stroke.take().unwrap_or_default();
        stroke.width = Some(width);
        options.stroke = Some(stroke);
    }

    if let Some(PaintInput::Colors { colors, stops }) = &options.fill {
        sink.deprecated(
            SINCE,
            "gradient fill is now a fill pattern: `new FillGradient(...)`",
        );
        let positions = if stops.is_empty() {
            legacy.fill_gradient_stops.unwrap_or_default()
        } else {
            stops.clone()
        };
        let resolved = colors
            .iter()
            .map(ColorValue::resolve)
            .collect::<Result<Vec<_>, _>>()?;
        let font_size = options
            .font_size
            .as_ref()
            .map_or(DEFAULT_FONT_SIZE, |size| size.to_px());
        let gradient = LinearGradient::from_colors(
            Point::ZERO,
            (0.0, font_size * GRADIENT_HEIGHT_PER_FONT_SIZE),
            &resolved,
            &positions,
        );
        options.fill = Some(PaintInput::Gradient(gradient));
    }

    Ok(())
}
