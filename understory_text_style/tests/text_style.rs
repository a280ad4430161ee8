// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_text_style` crate.
//!
//! These exercise `TextStyle` through its public API: key memoization and
//! equality, notification counts, legacy migration, cloning, and texture
//! handling on destroy.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use understory_text_style::{
    Color, DefaultPaintConverter, DestroyOptions, DropShadow, DropShadowOptions, DropShadowRecord,
    FillStyle, FontStyle, FontVariant, FontWeight, LegacyOptions, LinearGradient, PaintInput,
    PaintSource, Pattern, SilentDeprecations, StrokeInput, TextAlign, TextBaseline, TextStyle,
    TextStyleOptions, Texture, TextureSource, WhiteSpace,
};

fn style(options: TextStyleOptions) -> TextStyle {
    TextStyle::with_collaborators(options, Rc::new(DefaultPaintConverter), &SilentDeprecations)
        .expect("options should convert")
}

fn count_updates(style: &mut TextStyle) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let seen = count.clone();
    style.subscribe(move |_| seen.set(seen.get() + 1));
    count
}

fn gradient_offsets(fill: &FillStyle) -> Vec<f32> {
    match &fill.source {
        PaintSource::Gradient(gradient) => gradient.stops.iter().map(|s| s.offset).collect(),
        other => panic!("expected a gradient, got {other:?}"),
    }
}

#[test]
fn key_is_memoized_between_changes() {
    let style = style(TextStyleOptions::new().with_fill("purple"));
    let first = style.style_key();
    let second = style.style_key();
    assert_eq!(first, second);
    assert_eq!(first.as_ptr(), second.as_ptr(), "second read should hit the cache");
}

#[test]
fn identical_options_give_identical_keys() {
    let options = TextStyleOptions::new()
        .with_align(TextAlign::Center)
        .with_font_family(["Inter", "sans-serif"])
        .with_stroke(StrokeInput::new(0x33_3333_u32, 2.0))
        .with_drop_shadow(DropShadowOptions {
            distance: Some(2.0),
            ..DropShadowOptions::default()
        });
    let a = style(options.clone());
    let b = style(options);
    assert_eq!(a.style_key(), b.style_key());
}

#[test]
fn every_single_property_change_alters_the_key() {
    let base = style(TextStyleOptions::default());
    let base_key = base.style_key().to_owned();

    let edits: Vec<(&str, Box<dyn Fn(&mut TextStyle)>)> = vec![
        ("align", Box::new(|s: &mut TextStyle| s.set_align(TextAlign::Right))),
        ("break_words", Box::new(|s: &mut TextStyle| s.set_break_words(true))),
        ("drop_shadow", Box::new(|s: &mut TextStyle| s.set_drop_shadow(true))),
        ("fill", Box::new(|s: &mut TextStyle| s.set_fill("red").unwrap())),
        ("font_family", Box::new(|s: &mut TextStyle| s.set_font_family("Helvetica"))),
        ("font_size", Box::new(|s: &mut TextStyle| s.set_font_size("12px"))),
        ("font_style", Box::new(|s: &mut TextStyle| s.set_font_style(FontStyle::Italic))),
        ("font_variant", Box::new(|s: &mut TextStyle| s.set_font_variant(FontVariant::SmallCaps))),
        ("font_weight", Box::new(|s: &mut TextStyle| s.set_font_weight(FontWeight::Bold))),
        ("leading", Box::new(|s: &mut TextStyle| s.set_leading(1.0))),
        ("letter_spacing", Box::new(|s: &mut TextStyle| s.set_letter_spacing(1.0))),
        ("line_height", Box::new(|s: &mut TextStyle| s.set_line_height(30.0))),
        ("padding", Box::new(|s: &mut TextStyle| s.set_padding(3.0))),
        ("stroke", Box::new(|s: &mut TextStyle| s.set_stroke(Some("white".into())).unwrap())),
        ("text_baseline", Box::new(|s: &mut TextStyle| s.set_text_baseline(TextBaseline::Top))),
        ("trim", Box::new(|s: &mut TextStyle| s.set_trim(true))),
        ("white_space", Box::new(|s: &mut TextStyle| s.set_white_space(WhiteSpace::Normal))),
        ("word_wrap", Box::new(|s: &mut TextStyle| s.set_word_wrap(true))),
        ("word_wrap_width", Box::new(|s: &mut TextStyle| s.set_word_wrap_width(250.0))),
    ];
    assert_eq!(edits.len(), TextStyle::PROPERTY_COUNT);

    for (name, edit) in edits {
        let mut changed = base.clone();
        edit(&mut changed);
        assert_ne!(changed.style_key(), base_key, "changing {name} kept the key");
    }
}

#[test]
fn each_setter_call_notifies_exactly_once() {
    let mut s = style(TextStyleOptions::default());
    let count = count_updates(&mut s);

    s.set_word_wrap(true);
    assert_eq!(count.get(), 1);
    s.set_word_wrap(true);
    assert_eq!(count.get(), 2, "reassigning an equal value still notifies");
    s.set_fill("black").unwrap();
    assert_eq!(count.get(), 3);
    s.set_stroke(None).unwrap();
    assert_eq!(count.get(), 4);
}

#[test]
fn reset_notifies_once_per_property_and_restores_defaults() {
    let mut s = style(
        TextStyleOptions::new()
            .with_font_weight(FontWeight::Bold)
            .with_stroke("red")
            .with_word_wrap(300.0),
    );
    let count = count_updates(&mut s);
    s.reset().unwrap();
    assert_eq!(count.get(), TextStyle::PROPERTY_COUNT);
    assert_eq!(s.style_key(), style(TextStyleOptions::default()).style_key());
}

#[test]
fn observers_can_unsubscribe() {
    let mut s = style(TextStyleOptions::default());
    let log = Rc::new(RefCell::new(Vec::new()));
    let first = {
        let log = log.clone();
        s.subscribe(move |_| log.borrow_mut().push("first"))
    };
    {
        let log = log.clone();
        s.subscribe(move |_| log.borrow_mut().push("second"));
    }
    s.set_trim(true);
    assert!(s.unsubscribe(first));
    assert!(!s.unsubscribe(first));
    s.set_trim(false);
    assert_eq!(*log.borrow(), ["first", "second", "second"]);
    assert_eq!(s.observer_count(), 1);
}

#[test]
fn observers_can_rekey_during_notification() {
    let mut s = style(TextStyleOptions::default());
    let keys = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = keys.clone();
    s.subscribe(move |style| sink.borrow_mut().push(style.style_key().to_owned()));
    s.set_padding(9.0);
    assert_eq!(keys.borrow().len(), 1);
    assert_eq!(keys.borrow()[0], s.style_key());
}

#[test]
fn legacy_boolean_drop_shadow_uses_defaults_for_missing_fields() {
    let s = style(TextStyleOptions {
        drop_shadow: Some(true.into()),
        legacy: LegacyOptions {
            drop_shadow_blur: Some(4.0),
            ..LegacyOptions::default()
        },
        ..TextStyleOptions::default()
    });
    assert_eq!(
        s.drop_shadow(),
        &DropShadow::On(DropShadowRecord {
            blur: 4.0,
            ..DropShadowRecord::DEFAULT
        })
    );
}

#[test]
fn legacy_color_list_fill_spaces_by_count() {
    let s = style(TextStyleOptions {
        fill: Some(PaintInput::colors([0x00_0000_u32, 0xFF_FFFF])),
        ..TextStyleOptions::default()
    });
    assert_eq!(gradient_offsets(s.fill().unwrap()), [0.0, 0.5]);
}

#[test]
fn legacy_stroke_thickness_becomes_stroke_width() {
    let s = style(TextStyleOptions {
        stroke: Some("red".into()),
        legacy: LegacyOptions {
            stroke_thickness: Some(4.0),
            ..LegacyOptions::default()
        },
        ..TextStyleOptions::default()
    });
    let stroke = s.stroke().unwrap();
    assert_eq!(stroke.width, 4.0);
    let rgba = match stroke.fill.source {
        PaintSource::Solid(color) => color.to_rgba8(),
        ref other => panic!("expected a solid stroke, got {other:?}"),
    };
    assert_eq!((rgba.r, rgba.g, rgba.b), (0xFF, 0x00, 0x00));
}

#[test]
fn legacy_use_is_reported() {
    let notices = RefCell::new(Vec::new());
    let sink = |since: &str, message: &str| {
        notices.borrow_mut().push(format!("{since}: {message}"));
    };
    let options = TextStyleOptions {
        drop_shadow: Some(true.into()),
        ..TextStyleOptions::default()
    };
    TextStyle::with_collaborators(options, Rc::new(DefaultPaintConverter), &sink).unwrap();
    assert_eq!(notices.borrow().len(), 1);
    assert!(notices.borrow()[0].starts_with("8.0.0: dropShadow"));
}

#[test]
fn clone_keeps_key_and_is_independent() {
    let mut original = style(
        TextStyleOptions::new()
            .with_fill(LinearGradient::new((0.0, 0.0), (0.0, 10.0)).with_stop(0.0, Color::WHITE))
            .with_drop_shadow(true),
    );
    let count = count_updates(&mut original);
    let key = original.style_key().to_owned();

    let mut copy = original.clone();
    assert_eq!(copy.style_key(), key);
    assert_eq!(copy.observer_count(), 0);

    match (&original.fill().unwrap().source, &copy.fill().unwrap().source) {
        (PaintSource::Gradient(a), PaintSource::Gradient(b)) => assert!(Rc::ptr_eq(a, b)),
        other => panic!("expected shared gradients, got {other:?}"),
    }

    copy.set_letter_spacing(5.0);
    copy.update_drop_shadow(|shadow| shadow.alpha = 0.5);
    assert_ne!(copy.style_key(), key);
    assert_eq!(original.style_key(), key);
    assert_eq!(count.get(), 0, "clone mutations must not reach the original's observers");
}

#[test]
fn snapshot_rebuilds_an_equivalent_style() {
    let original = style(
        TextStyleOptions::new()
            .with_fill(0x12_3456_u32)
            .with_stroke(StrokeInput::new("orange", 3.0))
            .with_font_size("40px"),
    );
    let rebuilt = style(original.snapshot());
    assert_eq!(rebuilt.style_key(), original.style_key());
}

#[test]
fn destroy_keeps_shared_textures_by_default() {
    let source = TextureSource::new(16, 16);
    let texture = Texture::new(source.clone());
    let mut s = style(TextStyleOptions::new().with_fill(Pattern::new(texture.clone())));
    count_updates(&mut s);

    s.destroy(false);
    assert!(!texture.is_destroyed());
    assert!(!source.is_destroyed());
    assert_eq!(s.observer_count(), 0);
    assert!(s.fill().is_none());
    assert!(s.stroke().is_none());
    assert_eq!(s.drop_shadow(), &DropShadow::Off);

    s.destroy(false);
    assert!(s.is_destroyed());
}

#[test]
fn destroy_releases_textures_and_sources_on_request() {
    let source = TextureSource::new(16, 16);
    let fill_texture = Texture::new(source.clone());
    let stroke_texture = Texture::new(TextureSource::new(4, 4));
    let mut s = style(
        TextStyleOptions::new()
            .with_fill(Pattern::new(fill_texture.clone()))
            .with_stroke(StrokeInput::new(Pattern::new(stroke_texture.clone()), 1.0)),
    );

    s.destroy(DestroyOptions {
        texture: true,
        texture_source: true,
    });
    assert!(fill_texture.is_destroyed());
    assert!(source.is_destroyed());
    assert!(stroke_texture.is_destroyed());
    assert!(stroke_texture.source().is_destroyed());
}

#[test]
fn destroy_texture_without_source() {
    let source = TextureSource::new(2, 2);
    let texture = Texture::new(source.clone());
    let mut s = style(TextStyleOptions::new().with_fill(Pattern::new(texture.clone())));
    s.destroy(true);
    assert!(texture.is_destroyed());
    assert!(!source.is_destroyed());
}

#[test]
fn unsupported_fill_fails_construction() {
    let err = TextStyle::new(TextStyleOptions::new().with_fill(0x1_000_000_u32)).unwrap_err();
    assert!(err.to_string().starts_with("unsupported paint input"));
}

#[test]
fn fill_converts_to_a_brush() {
    let s = style(TextStyleOptions::new().with_fill("white"));
    let brush = s.fill().and_then(FillStyle::to_brush);
    assert!(matches!(brush, Some(peniko::Brush::Solid(_))));
}
