// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::{char_flags, object_glyph, ShapeInput};
use crate::bidi::{apply_bidi, bidi_char_type, BidiCharType, BidiMapping, TextDirection};
use crate::error::{Error, Result};
use crate::font::{same_font, FontGlyph, FontRef};
use crate::layout::{Glyph, GlyphFlags, GlyphOffset};
use crate::style::StyleElement;

/// Shapes a paragraph one codepoint at a time.
pub(super) fn shape(input: &ShapeInput<'_>) -> Result<(Vec<Glyph>, TextDirection)> {
    let logical = &input.text[input.range.clone()];
    let mapping = apply_bidi(logical, input.direction).unwrap_or_else(|err| {
        log::debug!(
            "bidi reordering of paragraph {:?} failed ({err}), keeping logical order",
            input.range
        );
        BidiMapping::identity(logical, TextDirection::Ltr)
    });

    let mut glyphs = Vec::with_capacity(mapping.visual.len());
    let mut prev: Option<(&FontRef, Option<&FontGlyph>)> = None;
    for (&ch, &offset) in mapping.visual.iter().zip(&mapping.visual_to_logical) {
        let source_index = input.range.start + offset;
        let Some((element_index, element)) = input.element(source_index) else {
            return Err(Error::MissingFont {
                index: source_index,
            });
        };

        let font = match element {
            StyleElement::Text(style) => style.font.as_ref().or(input.default_font),
            _ => {
                glyphs.push(object_glyph(source_index, element_index));
                continue;
            }
        };
        let Some(font) = font else {
            return Err(Error::MissingFont {
                index: source_index,
            });
        };

        let font_glyph = font
            .glyph_for_codepoint(ch)
            .or_else(|| font.replacement_glyph());
        let prev_glyph = match prev {
            Some((prev_font, prev_glyph)) if same_font(prev_font, font) => prev_glyph,
            _ => None,
        };

        let mut flags = char_flags(ch);
        if bidi_char_type(ch) == BidiCharType::RightToLeft {
            flags |= GlyphFlags::RIGHT_TO_LEFT;
        }
        let (image, advance, kerning) = match font_glyph {
            Some(fg) => {
                let kerning = font.kerning(prev_glyph, fg);
                (fg.image().cloned(), fg.advance() + kerning, kerning)
            }
            None => (None, 0., 0.),
        };
        glyphs.push(Glyph {
            source_index,
            element_index,
            image,
            advance,
            offset: GlyphOffset {
                x: kerning,
                y: font.baseline(),
            },
            flags,
            natural_height: font.font_height(),
            ..Glyph::default()
        });
        prev = Some((font, font_glyph));
    }

    log::trace!(
        "shaped {} glyphs for paragraph {:?}",
        glyphs.len(),
        input.range
    );
    Ok((glyphs, mapping.direction))
}
