// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph shaping.
//!
//! Every paragraph is shaped with one [`ShapingStrategy`]. The simple strategy
//! maps each codepoint to one glyph of its font and is always available. The
//! complex strategy hands the whole paragraph to an external
//! [`ComplexShaper`] and is only chosen when a shaper is installed and every
//! font touched by the paragraph supports it.

mod complex;
mod simple;

pub use complex::{ComplexShaper, GlyphDirection, ShapeError, ShapeOutput, ShapeRequest, ShapedGlyph};

use core::ops::Range;

use smallvec::SmallVec;

use crate::bidi::ParagraphDirection;
use crate::error::Result;
use crate::font::{same_font, FontRef};
use crate::layout::{Glyph, GlyphFlags, Paragraph};
use crate::style::{ElementIndex, StyleElement};

/// How a paragraph is shaped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ShapingStrategy {
    /// One glyph per codepoint, looked up in the font of the covering element.
    Simple,
    /// The paragraph is shaped by a [`ComplexShaper`].
    Complex,
}

/// A run of logical characters sharing a font.
#[derive(Clone, Debug)]
pub struct FontRange {
    /// Font of the run.
    pub font: FontRef,
    /// Number of characters in the run.
    pub len: usize,
}

/// The inputs shared by both strategies.
pub(crate) struct ShapeInput<'a> {
    /// The whole plain text.
    pub(crate) text: &'a [char],
    /// Logical range of the paragraph within `text`.
    pub(crate) range: Range<usize>,
    pub(crate) element_indices: &'a [ElementIndex],
    pub(crate) elements: &'a [StyleElement],
    pub(crate) default_font: Option<&'a FontRef>,
    pub(crate) direction: ParagraphDirection,
}

impl ShapeInput<'_> {
    fn element(&self, logical: usize) -> Option<(ElementIndex, &StyleElement)> {
        let index = *self.element_indices.get(logical)?;
        Some((index, self.elements.get(index)?))
    }
}

/// Shapes one paragraph into glyphs in visual order.
pub(crate) fn shape_paragraph(
    input: &ShapeInput<'_>,
    shaper: Option<&mut (dyn ComplexShaper + 'static)>,
) -> Result<Paragraph> {
    if let Some(shaper) = shaper {
        if let Some(ranges) = font_ranges(input) {
            let strategy = select_strategy(true, &ranges);
            log::debug!(
                "shaping paragraph {:?} with the {strategy:?} strategy",
                input.range
            );
            if strategy == ShapingStrategy::Complex {
                match complex::shape(shaper, input, &ranges) {
                    Ok((glyphs, direction)) => return Ok(Paragraph::new(glyphs, direction)),
                    Err(err) => {
                        log::debug!("complex shaping failed ({err}), using the simple strategy");
                    }
                }
            }
        }
    }
    let (glyphs, direction) = simple::shape(input)?;
    Ok(Paragraph::new(glyphs, direction))
}

/// Picks the strategy for a paragraph whose fonts are `ranges`.
pub fn select_strategy(has_complex_shaper: bool, ranges: &[FontRange]) -> ShapingStrategy {
    if has_complex_shaper && ranges.iter().all(|r| r.font.supports_complex_shaping()) {
        ShapingStrategy::Complex
    } else {
        ShapingStrategy::Simple
    }
}

/// Groups the characters of the paragraph into runs of the same font.
///
/// Embedded objects continue the run they are in. Returns `None` if some
/// character has no font at all.
fn font_ranges(input: &ShapeInput<'_>) -> Option<SmallVec<[FontRange; 4]>> {
    let mut ranges: SmallVec<[FontRange; 4]> = SmallVec::new();
    let mut current: Option<FontRef> = None;
    for logical in input.range.clone() {
        let (_, element) = input.element(logical)?;
        let font = match element {
            StyleElement::Text(style) => style.font.as_ref().or(input.default_font),
            _ => current.as_ref().or(input.default_font),
        }?
        .clone();
        match ranges.last_mut() {
            Some(last) if same_font(&last.font, &font) => last.len += 1,
            _ => ranges.push(FontRange {
                font: font.clone(),
                len: 1,
            }),
        }
        current = Some(font);
    }
    Some(ranges)
}

/// Flags derived from the source character.
fn char_flags(ch: char) -> GlyphFlags {
    let mut flags = GlyphFlags::empty();
    if matches!(ch, ' ' | '\u{A0}') {
        flags |= GlyphFlags::JUSTIFYABLE;
    }
    if matches!(ch, ' ' | '\t' | '\r') {
        flags |= GlyphFlags::BREAKABLE;
    }
    flags
}

/// Placeholder glyph for an embedded image or object, sized during layout.
fn object_glyph(source_index: usize, element_index: ElementIndex) -> Glyph {
    Glyph {
        source_index,
        element_index,
        flags: GlyphFlags::EMBEDDED_OBJECT | GlyphFlags::BREAKABLE,
        ..Glyph::default()
    }
}
