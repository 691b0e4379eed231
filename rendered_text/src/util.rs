// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Misc helpers.

pub(crate) fn nearly_eq(x: f32, y: f32) -> bool {
    (x - y).abs() < f32::EPSILON
}

/// Characters that delimit tokens when wrapping or splitting.
pub(crate) fn is_wrap_delimiter(ch: char) -> bool {
    matches!(ch, ' ' | '\n' | '\t' | '\r')
}

/// Maps a position in line-breaking order to a visual glyph index.
///
/// Right-to-left paragraphs are walked from their visual end so that the
/// first line holds the logical start of the paragraph.
#[derive(Clone, Copy, Debug)]
pub(crate) struct WalkOrder {
    len: usize,
    rtl: bool,
}

impl WalkOrder {
    pub(crate) fn new(len: usize, rtl: bool) -> Self {
        Self { len, rtl }
    }

    pub(crate) fn glyph(self, pos: usize) -> usize {
        if self.rtl {
            self.len - 1 - pos
        } else {
            pos
        }
    }

    /// Converts a range of walk positions into the covered visual glyph range.
    pub(crate) fn glyph_range(self, walk: core::ops::Range<usize>) -> core::ops::Range<usize> {
        if self.rtl {
            self.len - walk.end..self.len - walk.start
        } else {
            walk
        }
    }

    /// Converts a visual glyph range into walk positions.
    pub(crate) fn walk_range(self, glyphs: core::ops::Range<usize>) -> core::ops::Range<usize> {
        // The mapping is an involution on ranges.
        self.glyph_range(glyphs)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Layout coordinates are f32; kurbo values are f64."
)]
pub(crate) fn to_f32(v: f64) -> f32 {
    v as f32
}
