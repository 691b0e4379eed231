// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Various helper functions to assert truths during testing.

use rendered_text::RenderedText;

/// Returns the source text of every line.
pub(crate) fn line_texts(text: &RenderedText) -> Vec<String> {
    (0..text.line_count())
        .map(|line| text.line_text(line).unwrap())
        .collect()
}

/// Assert that splitting moved every glyph of `before` into exactly one of
/// `left` and `right`.
pub(crate) fn assert_same_glyphs(before: &RenderedText, left: &RenderedText, right: &RenderedText) {
    let sources = |text: &RenderedText| {
        text.paragraphs()
            .iter()
            .flat_map(|p| p.glyphs().iter().map(|g| g.source_index))
            .collect::<Vec<_>>()
    };
    let mut expected = sources(before);
    let mut actual = sources(left);
    actual.extend(sources(right));
    expected.sort_unstable();
    actual.sort_unstable();
    assert_eq!(expected, actual, "glyphs lost or duplicated by split");
}
