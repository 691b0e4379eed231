// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The font backend contract.
//!
//! Font files are parsed and rasterized elsewhere. Rendered text only needs
//! glyph lookup, kerning and a few vertical metrics, which a backend exposes by
//! implementing [`Font`].

use std::sync::Arc;

use crate::resource::ImageRef;

/// A glyph provided by a font backend.
#[derive(Clone, Debug)]
pub struct FontGlyph {
    index: u32,
    image: Option<ImageRef>,
    advance: f32,
}

impl FontGlyph {
    /// Creates a glyph with the backend's glyph index, its renderable image and
    /// its horizontal advance.
    pub fn new(index: u32, image: Option<ImageRef>, advance: f32) -> Self {
        Self {
            index,
            image,
            advance,
        }
    }

    /// Returns the backend specific glyph index.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the renderable image of the glyph, if it has one.
    ///
    /// Whitespace glyphs usually have no image.
    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Returns the stored horizontal advance in pixels.
    pub fn advance(&self) -> f32 {
        self.advance
    }
}

/// A font consumed by the shaper.
///
/// Fonts are shared, read-only resources. After a font's metrics change the
/// owner must call [`RenderedText::on_fonts_changed`] on every string that
/// references it.
///
/// [`RenderedText::on_fonts_changed`]: crate::RenderedText::on_fonts_changed
pub trait Font: core::fmt::Debug + Send + Sync {
    /// Name the font is registered under.
    fn name(&self) -> &str;

    /// Looks up the glyph for a codepoint.
    fn glyph_for_codepoint(&self, codepoint: char) -> Option<&FontGlyph>;

    /// Looks up a glyph by its backend index, as reported by a complex shaper.
    fn glyph_by_index(&self, _index: u32) -> Option<&FontGlyph> {
        None
    }

    /// Glyph substituted for codepoints the font does not cover.
    fn replacement_glyph(&self) -> Option<&FontGlyph> {
        self.glyph_for_codepoint(char::REPLACEMENT_CHARACTER)
    }

    /// Kerning adjustment between two consecutive glyphs.
    fn kerning(&self, _prev: Option<&FontGlyph>, _curr: &FontGlyph) -> f32 {
        0.
    }

    /// Distance from the top of a line to the baseline.
    fn baseline(&self) -> f32;

    /// Height of a line of text in this font.
    fn font_height(&self) -> f32;

    /// Whether a [`ComplexShaper`](crate::ComplexShaper) can shape runs in this
    /// font.
    fn supports_complex_shaping(&self) -> bool {
        false
    }
}

/// A shared reference to a font.
pub type FontRef = Arc<dyn Font>;

pub(crate) fn same_font(a: &FontRef, b: &FontRef) -> bool {
    Arc::ptr_eq(a, b)
}
