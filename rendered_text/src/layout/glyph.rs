// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;

use crate::resource::ImageRef;
use crate::style::ElementIndex;

bitflags! {
    /// Properties of a shaped glyph.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct GlyphFlags: u8 {
        /// The source character is strongly right to left.
        const RIGHT_TO_LEFT = 1 << 0;
        /// The glyph absorbs extra width when a line is justified.
        const JUSTIFYABLE = 1 << 1;
        /// A line may break after this glyph.
        const BREAKABLE = 1 << 2;
        /// The glyph stands in for an embedded image or object.
        const EMBEDDED_OBJECT = 1 << 3;
    }
}

/// Offset of a glyph image relative to the pen position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GlyphOffset {
    /// Horizontal offset, the kerning shift on the simple shaping path.
    pub x: f32,
    /// Vertical offset from the top of the component, usually the baseline.
    pub y: f32,
}

/// A shaped glyph in visual order.
#[derive(Clone, Debug, Default)]
pub struct Glyph {
    /// Index of the source character in the plain text.
    pub source_index: usize,
    /// Index of the style element owning the glyph.
    pub element_index: ElementIndex,
    /// Image to draw, `None` for whitespace and embedded objects.
    pub image: Option<ImageRef>,
    /// Horizontal advance. Embedded objects get their width during `format`.
    pub advance: f32,
    /// Image offset relative to the pen position.
    pub offset: GlyphOffset,
    /// Glyph properties.
    pub flags: GlyphFlags,
    /// Height of the glyph without padding.
    pub(crate) natural_height: f32,
    pub(crate) pad_left: f32,
    pub(crate) pad_right: f32,
    pub(crate) pad_top: f32,
    /// Height including vertical padding.
    pub(crate) height: f32,
}

impl Glyph {
    /// Width the glyph occupies on its line, including component padding.
    pub fn width(&self) -> f32 {
        self.pad_left + self.advance + self.pad_right
    }

    /// Height the glyph's component needs, including padding.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns `true` for an embedded image or object.
    pub fn is_embedded_object(&self) -> bool {
        self.flags.contains(GlyphFlags::EMBEDDED_OBJECT)
    }

    /// Returns `true` for glyphs that hang at the end of a line.
    pub(crate) fn is_whitespace(&self) -> bool {
        self.flags.contains(GlyphFlags::BREAKABLE) && !self.is_embedded_object()
    }

    pub(crate) fn is_justifyable(&self) -> bool {
        self.flags.contains(GlyphFlags::JUSTIFYABLE)
    }
}
