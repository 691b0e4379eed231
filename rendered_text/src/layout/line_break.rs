// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy line breaking.

use core::ops::Range;

use super::{BreakReason, Glyph};
use crate::util::WalkOrder;

/// Breaks `glyphs` into lines no wider than `max_advance`.
///
/// Returns ranges of walk positions. Trailing whitespace hangs past the end of
/// a line and never causes a break. When a glyph overflows, the line ends at
/// the last break opportunity, or right before the glyph if there is none.
/// The first glyph of a line is always placed.
pub(crate) fn break_lines(
    glyphs: &[Glyph],
    walk: WalkOrder,
    max_advance: f32,
    word_wrap: bool,
) -> Vec<(Range<usize>, BreakReason)> {
    let len = glyphs.len();
    if len == 0 {
        return vec![(0..0, BreakReason::None)];
    }
    if !word_wrap || !max_advance.is_finite() {
        return vec![(0..len, BreakReason::None)];
    }

    let mut lines = Vec::new();
    let mut start = 0;
    while start < len {
        let mut x = 0.;
        let mut prev_boundary: Option<usize> = None;
        let mut end = len;
        let mut reason = BreakReason::None;

        let mut pos = start;
        while pos < len {
            let glyph = &glyphs[walk.glyph(pos)];
            let width = glyph.width();

            if glyph.is_whitespace() {
                x += width;
                pos += 1;
                prev_boundary = Some(pos);
                continue;
            }

            if pos > start && x + width > max_advance {
                (end, reason) = if glyph.is_embedded_object() {
                    (pos, BreakReason::Regular)
                } else if let Some(boundary) = prev_boundary {
                    (boundary, BreakReason::Regular)
                } else {
                    (pos, BreakReason::Emergency)
                };
                break;
            }

            x += width;
            pos += 1;
            if glyph.is_embedded_object() {
                prev_boundary = Some(pos);
            }
        }

        lines.push((start..end, reason));
        start = end;
    }
    lines
}
