// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use super::{char_flags, object_glyph, FontRange, ShapeInput};
use crate::bidi::{ParagraphDirection, TextDirection};
use crate::layout::{Glyph, GlyphFlags, GlyphOffset};
use crate::style::StyleElement;

/// Converts 26.6 fixed point values to pixels.
const FIXED_26_6_TO_FLOAT: f32 = 1.0 / 64.0;

/// A paragraph handed to a [`ComplexShaper`].
#[derive(Clone, Copy, Debug)]
pub struct ShapeRequest<'a> {
    /// The paragraph in logical order.
    pub text: &'a [char],
    /// Consecutive runs of `text` sharing a font. The lengths add up to the
    /// length of `text`.
    pub font_ranges: &'a [FontRange],
    /// Requested paragraph direction.
    pub direction: ParagraphDirection,
}

/// Direction of a shaped glyph.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub enum GlyphDirection {
    /// Horizontal, left to right.
    #[default]
    LeftToRight,
    /// Horizontal, right to left.
    RightToLeft,
    /// Vertical, top to bottom. The vertical advance is used.
    TopToBottom,
}

/// A glyph produced by a [`ComplexShaper`], with 26.6 fixed point metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShapedGlyph {
    /// Glyph index in the font covering the cluster.
    pub glyph_index: u32,
    /// Index of the first source character of the cluster, relative to the
    /// paragraph.
    pub cluster: u32,
    /// Horizontal advance.
    pub x_advance: i32,
    /// Vertical advance.
    pub y_advance: i32,
    /// Horizontal offset.
    pub x_offset: i32,
    /// Vertical offset.
    pub y_offset: i32,
    /// Direction of the run containing the glyph.
    pub direction: GlyphDirection,
}

/// Result of shaping a paragraph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapeOutput {
    /// Resolved paragraph direction.
    pub direction: TextDirection,
    /// Glyphs in visual order.
    pub glyphs: Vec<ShapedGlyph>,
}

/// Failure of a [`ComplexShaper`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ShapeError {
    /// The shaping engine reported an error.
    #[error("shaping engine failed: {0}")]
    Backend(String),
    /// A glyph refers to a cluster outside of the paragraph.
    #[error("cluster {cluster} is out of range for a paragraph of {len} characters")]
    InvalidCluster {
        /// The offending cluster.
        cluster: u32,
        /// Length of the paragraph.
        len: usize,
    },
}

/// An external shaping engine that handles ligatures, contextual forms and
/// bidi reordering for whole paragraphs.
pub trait ComplexShaper: core::fmt::Debug {
    /// Shapes a paragraph.
    fn shape(&mut self, request: &ShapeRequest<'_>) -> Result<ShapeOutput, ShapeError>;
}

pub(super) fn shape(
    shaper: &mut dyn ComplexShaper,
    input: &ShapeInput<'_>,
    ranges: &[FontRange],
) -> Result<(Vec<Glyph>, TextDirection), ShapeError> {
    let text = &input.text[input.range.clone()];
    let output = shaper.shape(&ShapeRequest {
        text,
        font_ranges: ranges,
        direction: input.direction,
    })?;

    // Turn (font, len) into sorted (font, end) for cluster lookup.
    let mut ends = Vec::with_capacity(ranges.len());
    let mut end = 0;
    for range in ranges {
        end += range.len;
        ends.push(end);
    }

    let mut glyphs = Vec::with_capacity(output.glyphs.len());
    for shaped in &output.glyphs {
        let cluster = shaped.cluster as usize;
        let invalid = || ShapeError::InvalidCluster {
            cluster: shaped.cluster,
            len: text.len(),
        };
        let Some(&ch) = text.get(cluster) else {
            return Err(invalid());
        };
        let source_index = input.range.start + cluster;
        let Some((element_index, element)) = input.element(source_index) else {
            return Err(invalid());
        };
        if !matches!(element, StyleElement::Text(_)) {
            glyphs.push(object_glyph(source_index, element_index));
            continue;
        }
        let Some(range) = ranges.get(ends.partition_point(|&end| end <= cluster)) else {
            return Err(invalid());
        };

        let font = &range.font;
        let font_glyph = font
            .glyph_by_index(shaped.glyph_index)
            .or_else(|| font.replacement_glyph());
        let advance = match shaped.direction {
            GlyphDirection::TopToBottom => shaped.y_advance,
            _ => shaped.x_advance,
        };
        let mut flags = char_flags(ch);
        if shaped.direction == GlyphDirection::RightToLeft {
            flags |= GlyphFlags::RIGHT_TO_LEFT;
        }
        glyphs.push(Glyph {
            source_index,
            element_index,
            image: font_glyph.and_then(|g| g.image().cloned()),
            advance: advance as f32 * FIXED_26_6_TO_FLOAT,
            offset: GlyphOffset {
                x: shaped.x_offset as f32 * FIXED_26_6_TO_FLOAT,
                y: shaped.y_offset as f32 * FIXED_26_6_TO_FLOAT + font.baseline(),
            },
            flags,
            natural_height: font.font_height(),
            ..Glyph::default()
        });
    }

    log::trace!(
        "complex shaper produced {} glyphs for paragraph {:?}",
        glyphs.len(),
        input.range
    );
    Ok((glyphs, output.direction))
}
