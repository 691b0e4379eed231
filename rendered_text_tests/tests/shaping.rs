// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simple and complex shaping.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use rendered_text::shape::{select_strategy, FontRange};
use rendered_text::{GlyphFlags, ShapingStrategy};

use crate::test_name;
use crate::util::fixtures::{default_font, MonoFont};
use crate::util::{LigatureShaper, TestEnv, ADVANCE, HEIGHT};

#[test]
fn shaping_kerning() {
    let mut env = TestEnv::new(test_name!());
    let text = env.render("[font='kern']AVA");
    let glyphs = text.paragraphs()[0].glyphs();

    let advances: Vec<_> = glyphs.iter().map(|g| g.advance).collect();
    assert_eq!(advances, [10., 7., 10.], "only the AV pair is kerned");
    assert_eq!(glyphs[1].offset.x, -3., "the kerned glyph is shifted");
    assert_eq!(glyphs[1].offset.y, 16., "glyphs sit on the baseline");
}

#[test]
fn shaping_kerning_across_elements() {
    let mut env = TestEnv::new(test_name!());
    let text = env.render("[font='kern']A[colour='FF00FF00']V[font='big']A[font='kern']V");
    let advances: Vec<_> = text.paragraphs()[0]
        .glyphs()
        .iter()
        .map(|g| g.advance)
        .collect();

    assert_eq!(
        advances,
        [10., 7., 20., 10.],
        "kerning continues within a font and resets when it changes"
    );
}

#[test]
fn shaping_replacement_glyph() {
    let mut env = TestEnv::new(test_name!());
    let text = env.render("a\u{4E00}b");
    let glyphs = text.paragraphs()[0].glyphs();

    assert_eq!(glyphs.len(), 3, "one glyph per character");
    assert_eq!(glyphs[1].advance, ADVANCE, "the replacement glyph is used");
    assert!(glyphs[1].image.is_some(), "and drawn");
}

#[test]
fn shaping_flags() {
    let mut env = TestEnv::new(test_name!());
    let text = env.render("a b\u{A0}c\t[image='set:icon']");
    let flags: Vec<_> = text.paragraphs()[0]
        .glyphs()
        .iter()
        .map(|g| g.flags)
        .collect();

    assert_eq!(
        flags,
        [
            GlyphFlags::empty(),
            GlyphFlags::JUSTIFYABLE | GlyphFlags::BREAKABLE,
            GlyphFlags::empty(),
            GlyphFlags::JUSTIFYABLE,
            GlyphFlags::empty(),
            GlyphFlags::BREAKABLE,
            GlyphFlags::EMBEDDED_OBJECT | GlyphFlags::BREAKABLE,
        ],
        "flags derived from the source characters"
    );
    assert_eq!(text.paragraphs()[0].justifyable_count(), 2, "space and nbsp");
}

#[test]
fn shaping_complex_ligature() {
    let shaper = LigatureShaper::default();
    let calls = shaper.calls.clone();
    let mut env = TestEnv::with_shaper(test_name!(), shaper);
    let text = env.render("[font='complex']fish");
    let glyphs = text.paragraphs()[0].glyphs();

    assert_eq!(calls.load(Ordering::Relaxed), 1, "one request per paragraph");
    assert_eq!(glyphs.len(), 3, "fi is one glyph");
    assert_eq!(glyphs[0].source_index, 0, "the ligature maps to its cluster");
    assert_eq!(glyphs[1].source_index, 2, "clusters after the ligature");
    assert_eq!(glyphs[0].advance, ADVANCE, "26.6 advances are converted");
    assert_eq!(glyphs[0].offset.y, 16., "baseline offset");
    assert_eq!(glyphs[0].height(), HEIGHT, "font height");
}

#[test]
fn shaping_complex_with_objects() {
    let mut env = TestEnv::with_shaper(test_name!(), LigatureShaper::default());
    let text = env.render("[font='complex']a[image='set:icon']b");
    let glyphs = text.paragraphs()[0].glyphs();

    assert_eq!(glyphs.len(), 3, "object placeholders are kept");
    assert!(glyphs[1].is_embedded_object(), "placeholder glyph");
    assert_eq!(glyphs[1].advance, 16., "sized like on the simple path");
}

#[test]
fn shaping_complex_needs_supported_fonts() {
    let shaper = LigatureShaper::default();
    let calls = shaper.calls.clone();
    let mut env = TestEnv::with_shaper(test_name!(), shaper);
    let text = env.render("fish");

    assert_eq!(calls.load(Ordering::Relaxed), 0, "the default font is not supported");
    assert_eq!(text.paragraphs()[0].glyphs().len(), 4, "simple shaping");
}

#[test]
fn shaping_complex_falls_back() {
    let shaper = LigatureShaper::failing();
    let calls = shaper.calls.clone();
    let mut env = TestEnv::with_shaper(test_name!(), shaper);
    let text = env.render("[font='complex']fish");

    assert_eq!(calls.load(Ordering::Relaxed), 1, "the engine was asked");
    assert_eq!(
        text.paragraphs()[0].glyphs().len(),
        4,
        "simple shaping after the engine failed"
    );
    assert!(
        text.paragraphs()[0]
            .glyphs()
            .iter()
            .all(|g| g.advance == ADVANCE),
        "no ligature"
    );
}

#[test]
fn shaping_strategy_selection() {
    let complex: rendered_text::FontRef = Arc::new(
        MonoFont::new("complex", ADVANCE, HEIGHT, 9).with_complex_shaping(),
    );
    let supported = [FontRange {
        font: complex.clone(),
        len: 3,
    }];
    let mixed = [
        FontRange {
            font: complex,
            len: 3,
        },
        FontRange {
            font: default_font(),
            len: 1,
        },
    ];

    assert_eq!(
        select_strategy(false, &supported),
        ShapingStrategy::Simple,
        "no engine installed"
    );
    assert_eq!(
        select_strategy(true, &supported),
        ShapingStrategy::Complex,
        "every font is supported"
    );
    assert_eq!(
        select_strategy(true, &mixed),
        ShapingStrategy::Simple,
        "one unsupported font"
    );
}
