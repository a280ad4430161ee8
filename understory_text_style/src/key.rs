// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived style keys.
//!
//! The key is the `-`-joined list of every property value in a fixed
//! order: the scalar properties first, then fill, stroke and drop shadow.
//! Paints are keyed by content, so styles with equal values share a key
//! even when their descriptors are distinct allocations.
//!
//! Free-form text is length-prefixed and colors are written at full `f32`
//! precision, so distinct values never collapse onto the same key.

use alloc::string::String;
use core::fmt::Write;

use peniko::Color;

use crate::paint::{FillStyle, PaintSource, StrokeStyle};
use crate::shadow::DropShadow;
use crate::style::TextStyle;

pub(crate) fn generate(style: &TextStyle) -> String {
    let mut key = String::with_capacity(128);
    let _ = write!(key, "{}-{}-", style.align().as_str(), style.break_words());
    for (i, name) in style.font_family().names().iter().enumerate() {
        if i > 0 {
            key.push(',');
        }
        let _ = write!(key, "{}:{name}", name.len());
    }
    let _ = write!(
        key,
        "-{}-{}-{}-{}-{}-{}-{}-{}-{}-{}-{}-{}-{}-",
        style.font_size(),
        style.font_style().as_str(),
        style.font_variant().as_str(),
        style.font_weight(),
        style.leading(),
        style.letter_spacing(),
        style.line_height(),
        style.padding(),
        style.text_baseline().as_str(),
        style.trim(),
        style.white_space().as_str(),
        style.word_wrap(),
        style.word_wrap_width(),
    );
    write_fill(&mut key, style.fill());
    key.push('-');
    write_stroke(&mut key, style.stroke());
    key.push('-');
    write_drop_shadow(&mut key, style.drop_shadow());
    key
}

fn write_color(key: &mut String, color: Color) {
    let [r, g, b, a] = color.components;
    let _ = write!(key, "rgba({r},{g},{b},{a})");
}

fn write_fill(key: &mut String, fill: Option<&FillStyle>) {
    let Some(fill) = fill else {
        key.push_str("none");
        return;
    };
    match &fill.source {
        PaintSource::Solid(color) => {
            key.push_str("solid:");
            write_color(key, *color);
        }
        PaintSource::Gradient(gradient) => {
            let _ = write!(
                key,
                "linear:{},{},{},{}",
                gradient.start.x, gradient.start.y, gradient.end.x, gradient.end.y
            );
            for stop in &gradient.stops {
                let _ = write!(key, ":{}@", stop.offset);
                write_color(key, stop.color);
            }
        }
        PaintSource::Pattern(pattern) => {
            let [a, b, c, d, e, f] = pattern.transform.as_coeffs();
            let id = pattern.texture.id();
            let _ = write!(key, "pattern:{id}:{a},{b},{c},{d},{e},{f}");
        }
    }
    let _ = write!(key, ":{}", fill.alpha);
}

fn write_stroke(key: &mut String, stroke: Option<&StrokeStyle>) {
    let Some(stroke) = stroke else {
        key.push_str("none");
        return;
    };
    write_fill(key, Some(&stroke.fill));
    let _ = write!(
        key,
        ":{}:{}:{}:{}",
        stroke.width,
        stroke.join.as_str(),
        stroke.cap.as_str(),
        stroke.miter_limit
    );
}

fn write_drop_shadow(key: &mut String, shadow: &DropShadow) {
    match shadow {
        DropShadow::Off => key.push_str("none"),
        DropShadow::On(record) => {
            let _ = write!(key, "{}:{}:{}:", record.alpha, record.angle, record.blur);
            write_color(key, record.color);
            let _ = write!(key, ":{}", record.distance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TextStyleOptions;

    #[test]
    fn default_key_is_stable() {
        let style = TextStyle::new(TextStyleOptions::default()).unwrap();
        assert_eq!(
            generate(&style),
            "left-false-5:Arial-26-normal-normal-normal-0-0-0-0-alphabetic-false-pre-false-100-\
             solid:rgba(0,0,0,1):1-none-none"
        );
    }

    #[test]
    fn drop_shadow_is_keyed_by_value() {
        let mut style = TextStyle::new(TextStyleOptions::default()).unwrap();
        style.set_drop_shadow(true);
        let key = generate(&style);
        assert!(key.ends_with(":0:rgba(0,0,0,1):5"), "{key}");
    }

    #[test]
    fn family_boundaries_are_part_of_the_key() {
        let joined =
            TextStyle::new(TextStyleOptions::new().with_font_family(["Foo,Bar"])).unwrap();
        let split =
            TextStyle::new(TextStyleOptions::new().with_font_family(["Foo", "Bar"])).unwrap();
        assert_ne!(joined.font_string(), split.font_string());
        assert_ne!(generate(&joined), generate(&split));
    }

    #[test]
    fn small_color_changes_change_the_key() {
        let mut style = TextStyle::new(TextStyleOptions::default()).unwrap();
        style.set_drop_shadow(true);
        let before = generate(&style);
        assert!(style.update_drop_shadow(|shadow| {
            shadow.color = Color::new([0.001, 0.0, 0.0, 1.0]);
        }));
        assert_ne!(generate(&style), before);
    }
}
