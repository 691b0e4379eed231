// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paragraph layout: line breaking, horizontal alignment and justification.

mod alignment;
mod glyph;
pub(crate) mod line_break;
mod paragraph;

pub use glyph::{Glyph, GlyphFlags, GlyphOffset};
pub use paragraph::Paragraph;

use core::ops::Range;

/// Horizontal alignment of the lines of a paragraph.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub enum Alignment {
    /// This is [`Alignment::Left`] for LTR text and [`Alignment::Right`] for RTL text.
    #[default]
    Start,
    /// This is [`Alignment::Right`] for LTR text and [`Alignment::Left`] for RTL text.
    End,
    /// Align content to the left edge.
    ///
    /// For alignment that should be aware of text direction, use [`Alignment::Start`] or
    /// [`Alignment::End`] instead.
    Left,
    /// Align each line centered within the container.
    Middle,
    /// Align content to the right edge.
    ///
    /// For alignment that should be aware of text direction, use [`Alignment::Start`] or
    /// [`Alignment::End`] instead.
    Right,
    /// Justify each line by spacing out content, except for the last line of a paragraph.
    Justified,
}

/// Options for [`RenderedText::format`](crate::RenderedText::format).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FormatOptions {
    /// Break lines that do not fit into the area width.
    pub word_wrap: bool,
    /// Horizontal alignment of every line.
    pub alignment: Alignment,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            word_wrap: true,
            alignment: Alignment::Start,
        }
    }
}

/// Why a line ended.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub enum BreakReason {
    /// The paragraph ended.
    #[default]
    None,
    /// The line was broken at a break opportunity.
    Regular,
    /// No break opportunity fit, the line was broken inside a word.
    Emergency,
}

/// A line of a [`Paragraph`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    pub(crate) glyph_range: Range<usize>,
    pub(crate) content_range: Range<usize>,
    pub(crate) advance: f32,
    pub(crate) trailing_whitespace: f32,
    pub(crate) height: f32,
    pub(crate) offset: f32,
    pub(crate) justify_extra: f32,
    pub(crate) justifyable_count: usize,
    pub(crate) break_reason: BreakReason,
}

impl Line {
    /// Range of the line's glyphs in the paragraph, in visual order.
    pub fn glyph_range(&self) -> Range<usize> {
        self.glyph_range.clone()
    }

    /// Range of the line's glyphs without the hanging trailing whitespace.
    pub fn content_range(&self) -> Range<usize> {
        self.content_range.clone()
    }

    /// Width of the content, including justification but not the trailing
    /// whitespace.
    pub fn advance(&self) -> f32 {
        self.advance + self.justify_extra * self.justifyable_count as f32
    }

    /// Width of the trailing whitespace.
    pub fn trailing_whitespace(&self) -> f32 {
        self.trailing_whitespace
    }

    /// Full width of the line.
    pub fn width(&self) -> f32 {
        self.advance() + self.trailing_whitespace
    }

    /// Height of the line, the height of its tallest component.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Horizontal offset applied by alignment.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Extra width given to every justifyable glyph of the content.
    pub fn justify_extra(&self) -> f32 {
        self.justify_extra
    }

    /// Number of justifyable glyphs in the content.
    pub fn justifyable_count(&self) -> usize {
        self.justifyable_count
    }

    /// Why the line ended.
    pub fn break_reason(&self) -> BreakReason {
        self.break_reason
    }

    /// Returns `true` if the visual glyph index `index` belongs to the
    /// content and can absorb justification.
    pub(crate) fn in_content(&self, index: usize) -> bool {
        self.content_range.contains(&index)
    }
}
