// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Text Style: mutable text styles with change notification and
//! memoized cache keys.
//!
//! A [`TextStyle`] holds the visual properties of a run of text: font,
//! spacing, wrapping, fill and stroke paints, and an optional drop shadow.
//! It is meant to sit between application code that edits styles and the
//! renderer stages that cache glyphs or layouts built from them.
//!
//! ## Core Concepts
//!
//! ### Change notification
//!
//! Every setter notifies the style's observers synchronously, exactly once,
//! with a reference to the whole style. Observers are registered with
//! [`TextStyle::subscribe`] and removed with the returned [`ObserverId`].
//!
//! ### Derived keys
//!
//! [`TextStyle::style_key`] summarizes every property in a string. The key
//! is computed lazily, cached, and dropped on each change, so two reads
//! without a change in between return the same string. Styles with equal
//! values produce equal keys.
//!
//! ```rust
//! use understory_text_style::{TextStyle, TextStyleOptions};
//!
//! let options = TextStyleOptions::new().with_fill("teal").with_font_size(18.0);
//! let a = TextStyle::new(options.clone()).unwrap();
//! let mut b = TextStyle::new(options).unwrap();
//! assert_eq!(a.style_key(), b.style_key());
//!
//! b.set_padding(2.0);
//! assert_ne!(a.style_key(), b.style_key());
//! ```
//!
//! ### Paints
//!
//! Fills and strokes are given as raw [`PaintInput`]s (colors, color
//! lists, gradients, patterns) and resolved once, on assignment, into
//! [`FillStyle`] / [`StrokeStyle`] descriptors by a [`PaintConverter`].
//! Descriptors convert to `peniko` brushes and `kurbo` strokes for
//! backends.
//!
//! ### Legacy options
//!
//! Older option shapes in [`LegacyOptions`] (a boolean drop shadow with
//! sibling fields, a separate stroke thickness, a color-list fill) are
//! rewritten into their current form at construction. Each rewrite is
//! reported to a [`DeprecationSink`].
//!
//! ```rust
//! use understory_text_style::{
//!     DropShadowRecord, LegacyOptions, SilentDeprecations, TextStyle, TextStyleOptions,
//! };
//! use std::rc::Rc;
//!
//! let options = TextStyleOptions {
//!     drop_shadow: Some(true.into()),
//!     legacy: LegacyOptions {
//!         drop_shadow_blur: Some(4.0),
//!         ..LegacyOptions::default()
//!     },
//!     ..TextStyleOptions::default()
//! };
//! let style = TextStyle::with_collaborators(
//!     options,
//!     Rc::new(understory_text_style::DefaultPaintConverter),
//!     &SilentDeprecations,
//! )
//! .unwrap();
//! assert_eq!(
//!     style.drop_shadow().record(),
//!     Some(&DropShadowRecord { blur: 4.0, ..DropShadowRecord::DEFAULT })
//! );
//! ```
//!
//! ## Threading
//!
//! Styles are single-threaded (`!Send`, `!Sync`): observers and shared
//! paint resources use `Rc`.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std` or the
//! `libm` feature for the float math required by `kurbo` and `peniko`.

#![no_std]

extern crate alloc;

mod deprecation;
mod error;
mod font;
mod key;
mod legacy;
mod observer;
mod options;
mod paint;
mod shadow;
mod style;
mod texture;

pub use deprecation::{DeprecationSink, LogDeprecations, SilentDeprecations};
pub use error::UnsupportedPaintInput;
pub use font::{
    FontFamily, FontSize, FontStyle, FontVariant, FontWeight, TextAlign, TextBaseline, WhiteSpace,
};
pub use observer::ObserverId;
pub use options::{LegacyOptions, TextStyleOptions};
pub use paint::{
    ColorValue, DefaultPaintConverter, FillStyle, GradientStop, LineCap, LineJoin, LinearGradient,
    PaintConverter, PaintInput, PaintSource, Pattern, StrokeInput, StrokeStyle,
};
pub use shadow::{DropShadow, DropShadowInput, DropShadowOptions, DropShadowRecord};
pub use style::{DestroyOptions, TextStyle};
pub use texture::{Texture, TextureSource};

pub use peniko::Color;
