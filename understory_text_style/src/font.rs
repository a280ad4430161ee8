// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enumerated text properties and font helpers.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Horizontal alignment of multi-line text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center each line.
    Center,
    /// Align to the right edge.
    Right,
    /// Stretch lines to fill the width.
    Justify,
}

impl TextAlign {
    /// CSS name of this alignment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// Font slant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic face.
    Italic,
    /// Synthesized slant.
    Oblique,
}

impl FontStyle {
    /// CSS name of this style.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        }
    }
}

/// Font variant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontVariant {
    /// Regular glyphs.
    #[default]
    Normal,
    /// Small capitals.
    SmallCaps,
}

impl FontVariant {
    /// CSS name of this variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::SmallCaps => "small-caps",
        }
    }
}

/// Font weight, either a keyword or a numeric weight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// `normal`, equivalent to 400.
    #[default]
    Normal,
    /// `bold`, equivalent to 700.
    Bold,
    /// One step bolder than the inherited weight.
    Bolder,
    /// One step lighter than the inherited weight.
    Lighter,
    /// A numeric weight, conventionally 100 to 900 in steps of 100.
    Numeric(u16),
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Bold => f.write_str("bold"),
            Self::Bolder => f.write_str("bolder"),
            Self::Lighter => f.write_str("lighter"),
            Self::Numeric(weight) => write!(f, "{weight}"),
        }
    }
}

/// Baseline used when positioning glyphs vertically.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Alphabetic baseline.
    #[default]
    Alphabetic,
    /// Top of the em square.
    Top,
    /// Hanging baseline.
    Hanging,
    /// Middle of the em square.
    Middle,
    /// Ideographic baseline.
    Ideographic,
    /// Bottom of the em square.
    Bottom,
}

impl TextBaseline {
    /// CSS name of this baseline.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alphabetic => "alphabetic",
            Self::Top => "top",
            Self::Hanging => "hanging",
            Self::Middle => "middle",
            Self::Ideographic => "ideographic",
            Self::Bottom => "bottom",
        }
    }
}

/// How whitespace and newlines are handled during layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WhiteSpace {
    /// Collapse both spaces and newlines.
    Normal,
    /// Preserve both spaces and newlines.
    #[default]
    Pre,
    /// Collapse spaces but preserve newlines.
    PreLine,
}

impl WhiteSpace {
    /// CSS name of this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Pre => "pre",
            Self::PreLine => "pre-line",
        }
    }
}

/// An ordered list of font family names.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontFamily(Vec<String>);

impl FontFamily {
    /// Creates a family list from names in fallback order.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// The family names in fallback order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        Self::from("Arial")
    }
}

impl From<&str> for FontFamily {
    fn from(name: &str) -> Self {
        Self(alloc::vec![name.to_string()])
    }
}

impl From<String> for FontFamily {
    fn from(name: String) -> Self {
        Self(alloc::vec![name])
    }
}

impl<const N: usize> From<[&str; N]> for FontFamily {
    fn from(names: [&str; N]) -> Self {
        Self::new(names)
    }
}

impl From<Vec<String>> for FontFamily {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

/// A font size as given by the caller: pixels or a CSS-like string such as `"26px"`.
#[derive(Clone, Debug, PartialEq)]
pub enum FontSize {
    /// Size in pixels.
    Px(f64),
    /// A size with a unit suffix.
    Css(String),
}

impl FontSize {
    /// Resolves the size to pixels.
    ///
    /// Strings keep only ASCII digits, `.` and `-`; everything else is
    /// dropped, so `"26px"` becomes `26`. A string with no number left
    /// resolves to `NaN`.
    #[must_use]
    pub fn to_px(&self) -> f64 {
        match self {
            Self::Px(px) => *px,
            Self::Css(text) => {
                let digits: String = text
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                    .collect();
                digits.parse().unwrap_or(f64::NAN)
            }
        }
    }
}

impl From<f64> for FontSize {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl From<u32> for FontSize {
    fn from(px: u32) -> Self {
        Self::Px(f64::from(px))
    }
}

impl From<&str> for FontSize {
    fn from(text: &str) -> Self {
        Self::Css(text.to_string())
    }
}

impl From<String> for FontSize {
    fn from(text: String) -> Self {
        Self::Css(text)
    }
}

const GENERIC_FAMILIES: [&str; 6] = [
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
];

fn is_quoted(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
}

/// Writes `family` as a CSS family list, quoting non-generic names.
pub(crate) fn write_family_list(out: &mut String, family: &FontFamily) {
    for (i, name) in family.names().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let name = name.trim();
        if GENERIC_FAMILIES.contains(&name) || is_quoted(name) {
            out.push_str(name);
        } else {
            out.push('"');
            out.push_str(name);
            out.push('"');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn css_size_strips_unit() {
        assert_eq!(FontSize::from("26px").to_px(), 26.0);
        assert_eq!(FontSize::from("12.5pt").to_px(), 12.5);
        assert_eq!(FontSize::from(14_u32).to_px(), 14.0);
    }

    #[test]
    fn css_size_without_digits_is_nan() {
        assert!(FontSize::from("large").to_px().is_nan());
    }

    #[test]
    fn weight_display() {
        assert_eq!(format!("{}", FontWeight::Bold), "bold");
        assert_eq!(format!("{}", FontWeight::Numeric(600)), "600");
    }

    #[test]
    fn family_list_quotes_named_families() {
        let mut out = String::new();
        write_family_list(&mut out, &FontFamily::from(["Open Sans", "'Fira'", " serif"]));
        assert_eq!(out, "\"Open Sans\",'Fira',serif");
    }
}
