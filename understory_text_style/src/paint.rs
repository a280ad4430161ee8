// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint descriptors for fills and strokes, and the converter that resolves
//! raw inputs into them.
//!
//! A style keeps two representations of each paint: the raw [`PaintInput`]
//! the caller supplied, and the canonical [`FillStyle`] produced by a
//! [`PaintConverter`]. The raw input is only kept so that reassigning the
//! same value can skip conversion.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Affine, Point};
use peniko::Brush;
use peniko::Color;
use peniko::color::{Srgb, parse_color};

use crate::error::UnsupportedPaintInput;
use crate::texture::Texture;

/// A raw color value.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    /// An already-resolved color.
    Rgba(Color),
    /// A `0xRRGGBB` number.
    Hex(u32),
    /// A CSS color string such as `"black"` or `"#ff8800"`.
    Css(String),
}

impl ColorValue {
    /// Resolves the value to a color.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedPaintInput`] for numbers above `0xFFFFFF` and
    /// strings that are not valid CSS colors.
    pub fn resolve(&self) -> Result<Color, UnsupportedPaintInput> {
        match self {
            Self::Rgba(color) => Ok(*color),
            Self::Hex(value) => {
                if *value > 0xFF_FFFF {
                    return Err(UnsupportedPaintInput::new(format!("color number {value:#x}")));
                }
                let [_, r, g, b] = value.to_be_bytes();
                Ok(Color::from_rgb8(r, g, b))
            }
            Self::Css(text) => parse_color(text)
                .map(|color| color.to_alpha_color::<Srgb>())
                .map_err(|_| UnsupportedPaintInput::new(format!("color string {text:?}"))),
        }
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        Self::Rgba(color)
    }
}

impl From<u32> for ColorValue {
    fn from(value: u32) -> Self {
        Self::Hex(value)
    }
}

impl From<&str> for ColorValue {
    fn from(text: &str) -> Self {
        Self::Css(text.to_string())
    }
}

/// A color stop in a [`LinearGradient`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient line.
    pub offset: f32,
    /// Color at this position.
    pub color: Color,
}

/// A linear gradient between two points.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    /// Start of the gradient line.
    pub start: Point,
    /// End of the gradient line.
    pub end: Point,
    /// Color stops, in insertion order.
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Creates a gradient without stops.
    #[must_use]
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            stops: Vec::new(),
        }
    }

    /// Appends a color stop.
    #[must_use]
    pub fn with_stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push(GradientStop { offset, color });
        self
    }

    /// Builds a gradient from a list of colors.
    ///
    /// The color at index `i` is placed at `positions[i]` when present and
    /// at `i / colors.len()` otherwise. The fallback divides by the color
    /// count, so the last implicit stop lands short of `1.0`.
    #[must_use]
    pub fn from_colors(
        start: impl Into<Point>,
        end: impl Into<Point>,
        colors: &[Color],
        positions: &[f32],
    ) -> Self {
        let count = colors.len();
        let stops = colors
            .iter()
            .enumerate()
            .map(|(index, color)| GradientStop {
                offset: positions
                    .get(index)
                    .copied()
                    .unwrap_or_else(|| implicit_offset(index, count)),
                color: *color,
            })
            .collect();
        Self {
            start: start.into(),
            end: end.into(),
            stops,
        }
    }

    /// Converts to a `peniko` gradient for backends.
    #[must_use]
    pub fn to_peniko(&self) -> peniko::Gradient {
        let stops: Vec<peniko::ColorStop> = self
            .stops
            .iter()
            .map(|stop| peniko::ColorStop::from((stop.offset, stop.color)))
            .collect();
        let kind = peniko::GradientKind::Linear(peniko::LinearGradientPosition::new(
            self.start, self.end,
        ));
        peniko::Gradient {
            kind,
            stops: peniko::ColorStops::from(stops.as_slice()),
            ..peniko::Gradient::default()
        }
    }
}

fn implicit_offset(index: usize, count: usize) -> f32 {
    index as f32 / count as f32
}

/// A texture repeated as a fill.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    /// The texture to sample.
    pub texture: Texture,
    /// Transform from pattern space to local space.
    pub transform: Affine,
}

impl Pattern {
    /// Creates an untransformed pattern.
    #[must_use]
    pub fn new(texture: Texture) -> Self {
        Self {
            texture,
            transform: Affine::IDENTITY,
        }
    }
}

/// The source of color for a resolved paint.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintSource {
    /// A single color.
    Solid(Color),
    /// A gradient, shared between styles that resolved or cloned it.
    Gradient(Rc<LinearGradient>),
    /// A texture pattern.
    Pattern(Pattern),
}

/// A resolved fill descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct FillStyle {
    /// Where the color comes from.
    pub source: PaintSource,
    /// Opacity multiplier applied on top of the source.
    pub alpha: f32,
}

impl FillStyle {
    /// An opaque solid fill.
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self {
            source: PaintSource::Solid(color),
            alpha: 1.0,
        }
    }

    /// The texture referenced by this fill, if it is a pattern.
    #[must_use]
    pub fn texture(&self) -> Option<&Texture> {
        match &self.source {
            PaintSource::Pattern(pattern) => Some(&pattern.texture),
            _ => None,
        }
    }

    /// Converts to a `peniko` brush.
    ///
    /// Patterns return `None`; their pixels live with the backend that owns
    /// the texture.
    #[must_use]
    pub fn to_brush(&self) -> Option<Brush> {
        match &self.source {
            PaintSource::Solid(color) => Some(Brush::Solid(color.multiply_alpha(self.alpha))),
            PaintSource::Gradient(gradient) => {
                Some(Brush::Gradient(gradient.to_peniko()).multiply_alpha(self.alpha))
            }
            PaintSource::Pattern(_) => None,
        }
    }
}

impl Default for FillStyle {
    /// White, fully opaque. Used as the conversion template for fills.
    fn default() -> Self {
        Self::solid(Color::WHITE)
    }
}

/// How stroke segments are joined.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineJoin {
    /// Sharp corners, limited by the miter limit.
    #[default]
    Miter,
    /// Rounded corners.
    Round,
    /// Cut-off corners.
    Bevel,
}

impl LineJoin {
    /// CSS name of this join.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// How open stroke ends are drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineCap {
    /// Flat end at the endpoint.
    #[default]
    Butt,
    /// Rounded end.
    Round,
    /// Square end extending past the endpoint.
    Square,
}

impl LineCap {
    /// CSS name of this cap.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// A resolved stroke descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Paint of the stroke.
    pub fill: FillStyle,
    /// Stroke width.
    pub width: f64,
    /// Join style.
    pub join: LineJoin,
    /// Cap style.
    pub cap: LineCap,
    /// Miter limit.
    pub miter_limit: f64,
}

impl StrokeStyle {
    /// Converts the geometry part to a `kurbo` stroke.
    #[must_use]
    pub fn to_kurbo(&self) -> kurbo::Stroke {
        let join = match self.join {
            LineJoin::Miter => kurbo::Join::Miter,
            LineJoin::Round => kurbo::Join::Round,
            LineJoin::Bevel => kurbo::Join::Bevel,
        };
        let cap = match self.cap {
            LineCap::Butt => kurbo::Cap::Butt,
            LineCap::Round => kurbo::Cap::Round,
            LineCap::Square => kurbo::Cap::Square,
        };
        kurbo::Stroke::new(self.width)
            .with_join(join)
            .with_caps(cap)
            .with_miter_limit(self.miter_limit)
    }
}

impl Default for StrokeStyle {
    /// White, width 1, miter joins, butt caps, miter limit 10.
    fn default() -> Self {
        Self {
            fill: FillStyle::default(),
            width: 1.0,
            join: LineJoin::Miter,
            cap: LineCap::Butt,
            miter_limit: 10.0,
        }
    }
}

/// A raw fill or stroke paint as supplied by the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintInput {
    /// A single color.
    Color(ColorValue),
    /// A list of colors forming an implicit vertical gradient.
    ///
    /// `stops[i]` positions `colors[i]`; missing positions are evenly spaced.
    Colors {
        /// Gradient colors, top to bottom.
        colors: Vec<ColorValue>,
        /// Explicit stop positions; may be shorter than `colors`.
        stops: Vec<f32>,
    },
    /// An explicit gradient.
    Gradient(LinearGradient),
    /// A texture pattern.
    Pattern(Pattern),
    /// An already-resolved descriptor, passed through unchanged.
    Style(FillStyle),
}

impl PaintInput {
    /// A color list with evenly spaced stops.
    #[must_use]
    pub fn colors<I, C>(colors: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColorValue>,
    {
        Self::Colors {
            colors: colors.into_iter().map(Into::into).collect(),
            stops: Vec::new(),
        }
    }

    /// The texture referenced by this input, if any.
    #[must_use]
    pub fn texture(&self) -> Option<&Texture> {
        match self {
            Self::Pattern(pattern) => Some(&pattern.texture),
            Self::Style(style) => style.texture(),
            _ => None,
        }
    }
}

impl From<Color> for PaintInput {
    fn from(color: Color) -> Self {
        Self::Color(ColorValue::Rgba(color))
    }
}

impl From<u32> for PaintInput {
    fn from(value: u32) -> Self {
        Self::Color(ColorValue::Hex(value))
    }
}

impl From<&str> for PaintInput {
    fn from(text: &str) -> Self {
        Self::Color(ColorValue::from(text))
    }
}

impl From<ColorValue> for PaintInput {
    fn from(color: ColorValue) -> Self {
        Self::Color(color)
    }
}

impl From<LinearGradient> for PaintInput {
    fn from(gradient: LinearGradient) -> Self {
        Self::Gradient(gradient)
    }
}

impl From<Pattern> for PaintInput {
    fn from(pattern: Pattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<FillStyle> for PaintInput {
    fn from(style: FillStyle) -> Self {
        Self::Style(style)
    }
}

/// A raw stroke: a paint plus optional geometry overrides.
///
/// Unset fields take their value from the stroke template.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrokeInput {
    /// Stroke paint.
    pub paint: Option<PaintInput>,
    /// Stroke width.
    pub width: Option<f64>,
    /// Join style.
    pub join: Option<LineJoin>,
    /// Cap style.
    pub cap: Option<LineCap>,
    /// Miter limit.
    pub miter_limit: Option<f64>,
}

impl StrokeInput {
    /// A stroke with the given paint and width.
    #[must_use]
    pub fn new(paint: impl Into<PaintInput>, width: f64) -> Self {
        Self {
            paint: Some(paint.into()),
            width: Some(width),
            ..Self::default()
        }
    }

    /// The texture referenced by this input, if any.
    #[must_use]
    pub fn texture(&self) -> Option<&Texture> {
        self.paint.as_ref().and_then(PaintInput::texture)
    }

    /// Resolves the stroke against `template` using `converter`.
    ///
    /// # Errors
    ///
    /// Propagates the converter's failure for the paint.
    pub fn resolve(
        &self,
        converter: &dyn PaintConverter,
        template: &StrokeStyle,
    ) -> Result<StrokeStyle, UnsupportedPaintInput> {
        let fill = match &self.paint {
            Some(paint) => converter.convert(paint, &template.fill)?,
            None => template.fill.clone(),
        };
        Ok(StrokeStyle {
            fill,
            width: self.width.unwrap_or(template.width),
            join: self.join.unwrap_or(template.join),
            cap: self.cap.unwrap_or(template.cap),
            miter_limit: self.miter_limit.unwrap_or(template.miter_limit),
        })
    }
}

impl From<PaintInput> for StrokeInput {
    fn from(paint: PaintInput) -> Self {
        Self {
            paint: Some(paint),
            ..Self::default()
        }
    }
}

impl From<Color> for StrokeInput {
    fn from(color: Color) -> Self {
        PaintInput::from(color).into()
    }
}

impl From<u32> for StrokeInput {
    fn from(value: u32) -> Self {
        PaintInput::from(value).into()
    }
}

impl From<&str> for StrokeInput {
    fn from(text: &str) -> Self {
        PaintInput::from(text).into()
    }
}

impl From<StrokeStyle> for StrokeInput {
    fn from(stroke: StrokeStyle) -> Self {
        Self {
            paint: Some(PaintInput::Style(stroke.fill)),
            width: Some(stroke.width),
            join: Some(stroke.join),
            cap: Some(stroke.cap),
            miter_limit: Some(stroke.miter_limit),
        }
    }
}

/// Resolves raw paint inputs into [`FillStyle`] descriptors.
pub trait PaintConverter {
    /// Converts `input`, taking unspecified attributes such as alpha from `template`.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedPaintInput`] when `input` cannot be represented.
    fn convert(
        &self,
        input: &PaintInput,
        template: &FillStyle,
    ) -> Result<FillStyle, UnsupportedPaintInput>;
}

/// The stock converter.
///
/// Color lists become local-space gradients running from `(0, 0)` to
/// `(0, 1)`. Resolved descriptors pass through unchanged.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultPaintConverter;

impl PaintConverter for DefaultPaintConverter {
    fn convert(
        &self,
        input: &PaintInput,
        template: &FillStyle,
    ) -> Result<FillStyle, UnsupportedPaintInput> {
        let source = match input {
            PaintInput::Color(color) => PaintSource::Solid(color.resolve()?),
            PaintInput::Colors { colors, stops } => {
                if colors.is_empty() {
                    return Err(UnsupportedPaintInput::new("empty color list"));
                }
                let resolved = colors
                    .iter()
                    .map(ColorValue::resolve)
                    .collect::<Result<Vec<_>, _>>()?;
                PaintSource::Gradient(Rc::new(LinearGradient::from_colors(
                    Point::ZERO,
                    (0.0, 1.0),
                    &resolved,
                    stops,
                )))
            }
            PaintInput::Gradient(gradient) => PaintSource::Gradient(Rc::new(gradient.clone())),
            PaintInput::Pattern(pattern) => PaintSource::Pattern(pattern.clone()),
            PaintInput::Style(style) => return Ok(style.clone()),
        };
        Ok(FillStyle {
            source,
            alpha: template.alpha,
        })
    }
}
