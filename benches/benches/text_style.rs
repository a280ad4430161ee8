// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_text_style`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::cell::Cell;
use std::rc::Rc;

use understory_text_style::{
    FontWeight, LinearGradient, StrokeInput, TextStyle, TextStyleOptions,
};

fn rich_options() -> TextStyleOptions {
    TextStyleOptions::new()
        .with_font_family(["Inter", "Helvetica", "sans-serif"])
        .with_font_weight(FontWeight::Numeric(600))
        .with_fill(
            LinearGradient::new((0.0, 0.0), (0.0, 40.0))
                .with_stop(0.0, understory_text_style::Color::WHITE)
                .with_stop(1.0, understory_text_style::Color::BLACK),
        )
        .with_stroke(StrokeInput::new(0x22_2222_u32, 2.0))
        .with_drop_shadow(true)
        .with_word_wrap(320.0)
}

fn bench_text_style(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_style");

    group.bench_function("construct_default", |b| {
        b.iter(|| black_box(TextStyle::new(TextStyleOptions::default()).unwrap()));
    });

    group.bench_function("construct_rich", |b| {
        b.iter_batched(
            rich_options,
            |options| black_box(TextStyle::new(options).unwrap()),
            BatchSize::SmallInput,
        );
    });

    let cached = TextStyle::new(rich_options()).unwrap();
    let _ = cached.style_key();
    group.bench_function("style_key_cached", |b| {
        b.iter(|| black_box(cached.style_key().len()));
    });

    for observers in [0_usize, 1, 8] {
        group.bench_with_input(
            BenchmarkId::new("set_and_rekey", observers),
            &observers,
            |b, &observers| {
                let mut style = TextStyle::new(rich_options()).unwrap();
                let hits = Rc::new(Cell::new(0_u64));
                for _ in 0..observers {
                    let hits = hits.clone();
                    style.subscribe(move |_| hits.set(hits.get() + 1));
                }
                let mut spacing = 0.0;
                b.iter(|| {
                    spacing += 1.0;
                    style.set_letter_spacing(spacing);
                    black_box(style.style_key().len())
                });
                black_box(hits.get());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_text_style);
criterion_main!(benches);
