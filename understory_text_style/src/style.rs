// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mutable, cache-keyed text style.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::OnceCell;
use core::fmt;
use core::mem;

use peniko::Color;

use crate::deprecation::{DeprecationSink, LogDeprecations};
use crate::error::UnsupportedPaintInput;
use crate::font::{
    FontFamily, FontSize, FontStyle, FontVariant, FontWeight, TextAlign, TextBaseline, WhiteSpace,
    write_family_list,
};
use crate::key;
use crate::legacy;
use crate::observer::{ObserverId, Observers};
use crate::options::{LegacyOptions, TextStyleOptions};
use crate::paint::{
    ColorValue, DefaultPaintConverter, FillStyle, PaintConverter, PaintInput, StrokeInput,
    StrokeStyle,
};
use crate::shadow::{DropShadow, DropShadowInput, DropShadowRecord};

pub(crate) const DEFAULT_FONT_SIZE: f64 = 26.0;
const DEFAULT_WORD_WRAP_WIDTH: f64 = 100.0;

/// What [`TextStyle::destroy`] should release besides the style itself.
///
/// Textures may be shared with other styles or sprites, so nothing is
/// destroyed unless asked for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DestroyOptions {
    /// Destroy textures referenced by the fill and stroke.
    pub texture: bool,
    /// Also destroy their texture sources. Only honored with `texture`.
    pub texture_source: bool,
}

impl From<bool> for DestroyOptions {
    fn from(texture: bool) -> Self {
        Self {
            texture,
            texture_source: false,
        }
    }
}

/// A text style with change notification and a memoized derived key.
///
/// Every setter stores its value, invalidates the cached key, and calls
/// each observer exactly once, synchronously, before returning. Renderers
/// compare [`style_key`](Self::style_key) against the key their cached
/// glyphs were produced with to decide whether to rebuild them.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use understory_text_style::{TextStyle, TextStyleOptions};
///
/// let mut style = TextStyle::new(TextStyleOptions::new().with_font_size("32px")).unwrap();
/// assert_eq!(style.font_size(), 32.0);
///
/// let updates = Rc::new(Cell::new(0));
/// let seen = updates.clone();
/// style.subscribe(move |_| seen.set(seen.get() + 1));
///
/// let before = style.style_key().to_owned();
/// style.set_letter_spacing(2.0);
/// assert_eq!(updates.get(), 1);
/// assert!(style.cached_style_key().is_none());
/// assert_ne!(style.style_key(), before);
/// ```
pub struct TextStyle {
    align: TextAlign,
    break_words: bool,
    drop_shadow: DropShadow,
    fill: Option<FillStyle>,
    original_fill: Option<PaintInput>,
    font_family: FontFamily,
    font_size: f64,
    font_style: FontStyle,
    font_variant: FontVariant,
    font_weight: FontWeight,
    leading: f64,
    letter_spacing: f64,
    line_height: f64,
    padding: f64,
    stroke: Option<StrokeStyle>,
    original_stroke: Option<StrokeInput>,
    text_baseline: TextBaseline,
    trim: bool,
    white_space: WhiteSpace,
    word_wrap: bool,
    word_wrap_width: f64,
    key: OnceCell<String>,
    converter: Rc<dyn PaintConverter>,
    observers: Observers,
    destroyed: bool,
}

impl TextStyle {
    /// Number of independently settable properties.
    pub const PROPERTY_COUNT: usize = 19;

    /// Creates a style from `options` merged over the defaults.
    ///
    /// Uses [`DefaultPaintConverter`] and reports deprecated option shapes
    /// through the `log` facade.
    ///
    /// # Errors
    ///
    /// Fails if the fill or stroke cannot be converted.
    pub fn new(options: TextStyleOptions) -> Result<Self, UnsupportedPaintInput> {
        Self::with_collaborators(options, Rc::new(DefaultPaintConverter), &LogDeprecations)
    }

    /// Creates a style with an explicit paint converter and deprecation sink.
    ///
    /// Legacy shapes in `options` are migrated first, then every property is
    /// assigned through its setter, then [`update`](Self::update) runs once.
    ///
    /// # Errors
    ///
    /// Fails if migration or the converter rejects the fill or stroke.
    pub fn with_collaborators(
        mut options: TextStyleOptions,
        converter: Rc<dyn PaintConverter>,
        deprecations: &dyn DeprecationSink,
    ) -> Result<Self, UnsupportedPaintInput> {
        legacy::migrate(&mut options, deprecations)?;
        let mut style = Self {
            align: TextAlign::default(),
            break_words: false,
            drop_shadow: DropShadow::Off,
            fill: None,
            original_fill: None,
            font_family: FontFamily::default(),
            font_size: DEFAULT_FONT_SIZE,
            font_style: FontStyle::default(),
            font_variant: FontVariant::default(),
            font_weight: FontWeight::default(),
            leading: 0.0,
            letter_spacing: 0.0,
            line_height: 0.0,
            padding: 0.0,
            stroke: None,
            original_stroke: None,
            text_baseline: TextBaseline::default(),
            trim: false,
            white_space: WhiteSpace::default(),
            word_wrap: false,
            word_wrap_width: DEFAULT_WORD_WRAP_WIDTH,
            key: OnceCell::new(),
            converter,
            observers: Observers::default(),
            destroyed: false,
        };
        style.assign(options)?;
        style.update();
        log::trace!(target: "understory_text_style", "text style created");
        Ok(style)
    }

    /// Assigns every property, taking defaults for unset options.
    fn assign(&mut self, options: TextStyleOptions) -> Result<(), UnsupportedPaintInput> {
        let TextStyleOptions {
            align,
            break_words,
            drop_shadow,
            fill,
            font_family,
            font_size,
            font_style,
            font_variant,
            font_weight,
            leading,
            letter_spacing,
            line_height,
            padding,
            stroke,
            text_baseline,
            trim,
            white_space,
            word_wrap,
            word_wrap_width,
            legacy: _,
        } = options;

        self.set_align(align.unwrap_or_default());
        self.set_break_words(break_words.unwrap_or(false));
        self.set_drop_shadow(drop_shadow.unwrap_or(DropShadowInput::Enabled(false)));
        self.set_fill(fill.unwrap_or(PaintInput::Color(ColorValue::Rgba(Color::BLACK))))?;
        self.set_font_family(font_family.unwrap_or_default());
        self.set_font_size(font_size.unwrap_or(FontSize::Px(DEFAULT_FONT_SIZE)));
        self.set_font_style(font_style.unwrap_or_default());
        self.set_font_variant(font_variant.unwrap_or_default());
        self.set_font_weight(font_weight.unwrap_or_default());
        self.set_leading(leading.unwrap_or(0.0));
        self.set_letter_spacing(letter_spacing.unwrap_or(0.0));
        self.set_line_height(line_height.unwrap_or(0.0));
        self.set_padding(padding.unwrap_or(0.0));
        self.set_stroke(stroke)?;
        self.set_text_baseline(text_baseline.unwrap_or_default());
        self.set_trim(trim.unwrap_or(false));
        self.set_white_space(white_space.unwrap_or_default());
        self.set_word_wrap(word_wrap.unwrap_or(false));
        self.set_word_wrap_width(word_wrap_width.unwrap_or(DEFAULT_WORD_WRAP_WIDTH));
        Ok(())
    }

    /// Restores every property to its default, one setter call per property.
    ///
    /// # Errors
    ///
    /// Fails only if a custom converter rejects the default fill.
    pub fn reset(&mut self) -> Result<(), UnsupportedPaintInput> {
        self.assign(TextStyleOptions::default())
    }

    /// Invalidates the cached key and notifies observers.
    ///
    /// Observers are detached from the style while they run, so
    /// [`observer_count`](Self::observer_count) reads zero inside a callback.
    pub fn update(&mut self) {
        self.key.take();
        let mut observers = mem::take(&mut self.observers);
        observers.emit(self);
        self.observers = observers;
    }

    /// The derived key, computed on first read after a change.
    #[must_use]
    pub fn style_key(&self) -> &str {
        self.key.get_or_init(|| key::generate(self))
    }

    /// The derived key if it is currently cached, `None` if stale.
    #[must_use]
    pub fn cached_style_key(&self) -> Option<&str> {
        self.key.get().map(String::as_str)
    }

    /// Registers `callback` to run after every change.
    ///
    /// The callback sees the style with its observer list detached, so
    /// [`observer_count`](Self::observer_count) is zero while it runs.
    /// Every observer is back in place once [`update`](Self::update) returns.
    pub fn subscribe(&mut self, callback: impl FnMut(&Self) + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(callback))
    }

    /// Removes an observer. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of subscribed observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Horizontal alignment.
    #[must_use]
    pub fn align(&self) -> TextAlign {
        self.align
    }

    /// Sets the horizontal alignment.
    pub fn set_align(&mut self, align: TextAlign) {
        self.align = align;
        self.update();
    }

    /// Whether long words may be broken when wrapping.
    #[must_use]
    pub fn break_words(&self) -> bool {
        self.break_words
    }

    /// Sets whether long words may be broken.
    pub fn set_break_words(&mut self, break_words: bool) {
        self.break_words = break_words;
        self.update();
    }

    /// Drop shadow state.
    #[must_use]
    pub fn drop_shadow(&self) -> &DropShadow {
        &self.drop_shadow
    }

    /// Sets the drop shadow.
    ///
    /// `true` enables the default shadow and partial options are merged
    /// over it.
    pub fn set_drop_shadow(&mut self, drop_shadow: impl Into<DropShadowInput>) {
        self.drop_shadow = drop_shadow.into().resolve();
        self.update();
    }

    /// Edits the active drop shadow in place.
    ///
    /// Returns `false`, without notifying, when the shadow is off.
    pub fn update_drop_shadow(&mut self, edit: impl FnOnce(&mut DropShadowRecord)) -> bool {
        let DropShadow::On(record) = &mut self.drop_shadow else {
            return false;
        };
        edit(record);
        self.update();
        true
    }

    /// Resolved fill. `None` only after [`destroy`](Self::destroy).
    #[must_use]
    pub fn fill(&self) -> Option<&FillStyle> {
        self.fill.as_ref()
    }

    /// The raw input the current fill was resolved from.
    #[must_use]
    pub fn original_fill(&self) -> Option<&PaintInput> {
        self.original_fill.as_ref()
    }

    /// Sets the fill.
    ///
    /// Reassigning the current raw input skips conversion but still counts
    /// as a change.
    ///
    /// # Errors
    ///
    /// Returns the converter's error; the style is left unchanged.
    pub fn set_fill(&mut self, fill: impl Into<PaintInput>) -> Result<(), UnsupportedPaintInput> {
        let fill = fill.into();
        if self.fill.is_none() || self.original_fill.as_ref() != Some(&fill) {
            self.fill = Some(self.converter.convert(&fill, &FillStyle::default())?);
            self.original_fill = Some(fill);
        }
        self.update();
        Ok(())
    }

    /// Font families.
    #[must_use]
    pub fn font_family(&self) -> &FontFamily {
        &self.font_family
    }

    /// Sets the font families.
    pub fn set_font_family(&mut self, family: impl Into<FontFamily>) {
        self.font_family = family.into();
        self.update();
    }

    /// Font size in pixels.
    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Sets the font size. Strings such as `"26px"` are reduced to their number.
    pub fn set_font_size(&mut self, size: impl Into<FontSize>) {
        self.font_size = size.into().to_px();
        self.update();
    }

    /// Font slant.
    #[must_use]
    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    /// Sets the font slant.
    pub fn set_font_style(&mut self, font_style: FontStyle) {
        self.font_style = font_style;
        self.update();
    }

    /// Font variant.
    #[must_use]
    pub fn font_variant(&self) -> FontVariant {
        self.font_variant
    }

    /// Sets the font variant.
    pub fn set_font_variant(&mut self, font_variant: FontVariant) {
        self.font_variant = font_variant;
        self.update();
    }

    /// Font weight.
    #[must_use]
    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    /// Sets the font weight.
    pub fn set_font_weight(&mut self, font_weight: FontWeight) {
        self.font_weight = font_weight;
        self.update();
    }

    /// Extra space between lines.
    #[must_use]
    pub fn leading(&self) -> f64 {
        self.leading
    }

    /// Sets the extra space between lines.
    pub fn set_leading(&mut self, leading: f64) {
        self.leading = leading;
        self.update();
    }

    /// Extra space between glyphs.
    #[must_use]
    pub fn letter_spacing(&self) -> f64 {
        self.letter_spacing
    }

    /// Sets the extra space between glyphs.
    pub fn set_letter_spacing(&mut self, letter_spacing: f64) {
        self.letter_spacing = letter_spacing;
        self.update();
    }

    /// Line height; `0` defers to font metrics.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// Sets the line height.
    pub fn set_line_height(&mut self, line_height: f64) {
        self.line_height = line_height;
        self.update();
    }

    /// Padding around the rendered text.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Sets the padding.
    pub fn set_padding(&mut self, padding: f64) {
        self.padding = padding;
        self.update();
    }

    /// Resolved stroke, if any.
    #[must_use]
    pub fn stroke(&self) -> Option<&StrokeStyle> {
        self.stroke.as_ref()
    }

    /// The raw input the current stroke was resolved from.
    #[must_use]
    pub fn original_stroke(&self) -> Option<&StrokeInput> {
        self.original_stroke.as_ref()
    }

    /// Sets or clears the stroke.
    ///
    /// # Errors
    ///
    /// Returns the converter's error; the style is left unchanged.
    pub fn set_stroke(&mut self, stroke: Option<StrokeInput>) -> Result<(), UnsupportedPaintInput> {
        match stroke {
            None => {
                self.stroke = None;
                self.original_stroke = None;
            }
            Some(input) => {
                if self.stroke.is_none() || self.original_stroke.as_ref() != Some(&input) {
                    let resolved = input.resolve(&*self.converter, &StrokeStyle::default())?;
                    self.stroke = Some(resolved);
                    self.original_stroke = Some(input);
                }
            }
        }
        self.update();
        Ok(())
    }

    /// Vertical baseline.
    #[must_use]
    pub fn text_baseline(&self) -> TextBaseline {
        self.text_baseline
    }

    /// Sets the vertical baseline.
    pub fn set_text_baseline(&mut self, text_baseline: TextBaseline) {
        self.text_baseline = text_baseline;
        self.update();
    }

    /// Whether transparent borders are trimmed.
    #[must_use]
    pub fn trim(&self) -> bool {
        self.trim
    }

    /// Sets whether transparent borders are trimmed.
    pub fn set_trim(&mut self, trim: bool) {
        self.trim = trim;
        self.update();
    }

    /// Whitespace handling.
    #[must_use]
    pub fn white_space(&self) -> WhiteSpace {
        self.white_space
    }

    /// Sets the whitespace handling.
    pub fn set_white_space(&mut self, white_space: WhiteSpace) {
        self.white_space = white_space;
        self.update();
    }

    /// Whether lines wrap.
    #[must_use]
    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    /// Sets whether lines wrap.
    pub fn set_word_wrap(&mut self, word_wrap: bool) {
        self.word_wrap = word_wrap;
        self.update();
    }

    /// Wrap width.
    #[must_use]
    pub fn word_wrap_width(&self) -> f64 {
        self.word_wrap_width
    }

    /// Sets the wrap width.
    pub fn set_word_wrap_width(&mut self, word_wrap_width: f64) {
        self.word_wrap_width = word_wrap_width;
        self.update();
    }

    /// CSS font shorthand, e.g. `normal normal bold 26px "Open Sans",serif`.
    #[must_use]
    pub fn font_string(&self) -> String {
        let mut out = format!(
            "{} {} {} {}px ",
            self.font_style.as_str(),
            self.font_variant.as_str(),
            self.font_weight,
            self.font_size
        );
        write_family_list(&mut out, &self.font_family);
        out
    }

    /// The complete current configuration.
    ///
    /// Paints are captured as resolved descriptors, so a style built from
    /// the snapshot shares them instead of converting again.
    #[must_use]
    pub fn snapshot(&self) -> TextStyleOptions {
        TextStyleOptions {
            align: Some(self.align),
            break_words: Some(self.break_words),
            drop_shadow: Some(DropShadowInput::Shadow(self.drop_shadow)),
            fill: self.fill.clone().map(PaintInput::Style),
            font_family: Some(self.font_family.clone()),
            font_size: Some(FontSize::Px(self.font_size)),
            font_style: Some(self.font_style),
            font_variant: Some(self.font_variant),
            font_weight: Some(self.font_weight),
            leading: Some(self.leading),
            letter_spacing: Some(self.letter_spacing),
            line_height: Some(self.line_height),
            padding: Some(self.padding),
            stroke: self.stroke.clone().map(StrokeInput::from),
            text_baseline: Some(self.text_baseline),
            trim: Some(self.trim),
            white_space: Some(self.white_space),
            word_wrap: Some(self.word_wrap),
            word_wrap_width: Some(self.word_wrap_width),
            legacy: LegacyOptions::default(),
        }
    }

    /// Returns `true` once [`destroy`](Self::destroy) has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Tears the style down: drops all observers and clears fill, stroke and
    /// drop shadow. Textures are destroyed only when `options` asks for it.
    ///
    /// Calling this twice is harmless. Setters keep working afterwards but
    /// the style should be discarded instead.
    pub fn destroy(&mut self, options: impl Into<DestroyOptions>) {
        let options = options.into();
        self.observers.clear();
        if options.texture {
            let textures = [
                self.fill.as_ref().and_then(FillStyle::texture),
                self.original_fill.as_ref().and_then(PaintInput::texture),
                self.stroke.as_ref().and_then(|s| s.fill.texture()),
                self.original_stroke.as_ref().and_then(StrokeInput::texture),
            ];
            for texture in textures.into_iter().flatten() {
                texture.destroy(options.texture_source);
            }
        }
        self.fill = None;
        self.original_fill = None;
        self.stroke = None;
        self.original_stroke = None;
        self.drop_shadow = DropShadow::Off;
        self.key.take();
        if !mem::replace(&mut self.destroyed, true) {
            log::trace!(target: "understory_text_style", "text style destroyed");
        }
    }
}

impl Clone for TextStyle {
    /// Copies every property into a new style with no observers.
    ///
    /// Paint descriptors are shared rather than converted again, and the
    /// clone starts with the original's cached key.
    fn clone(&self) -> Self {
        Self {
            align: self.align,
            break_words: self.break_words,
            drop_shadow: self.drop_shadow,
            fill: self.fill.clone(),
            original_fill: self.fill.clone().map(PaintInput::Style),
            font_family: self.font_family.clone(),
            font_size: self.font_size,
            font_style: self.font_style,
            font_variant: self.font_variant,
            font_weight: self.font_weight,
            leading: self.leading,
            letter_spacing: self.letter_spacing,
            line_height: self.line_height,
            padding: self.padding,
            stroke: self.stroke.clone(),
            original_stroke: self.stroke.clone().map(StrokeInput::from),
            text_baseline: self.text_baseline,
            trim: self.trim,
            white_space: self.white_space,
            word_wrap: self.word_wrap,
            word_wrap_width: self.word_wrap_width,
            key: self.key.clone(),
            converter: self.converter.clone(),
            observers: Observers::default(),
            destroyed: self.destroyed,
        }
    }
}

impl fmt::Debug for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextStyle")
            .field("align", &self.align)
            .field("break_words", &self.break_words)
            .field("drop_shadow", &self.drop_shadow)
            .field("fill", &self.fill)
            .field("font_family", &self.font_family)
            .field("font_size", &self.font_size)
            .field("font_style", &self.font_style)
            .field("font_variant", &self.font_variant)
            .field("font_weight", &self.font_weight)
            .field("leading", &self.leading)
            .field("letter_spacing", &self.letter_spacing)
            .field("line_height", &self.line_height)
            .field("padding", &self.padding)
            .field("stroke", &self.stroke)
            .field("text_baseline", &self.text_baseline)
            .field("trim", &self.trim)
            .field("white_space", &self.white_space)
            .field("word_wrap", &self.word_wrap)
            .field("word_wrap_width", &self.word_wrap_width)
            .field("observers", &self.observers)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}
