// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich text rendering for tagged strings.
//!
//! A string such as `"Hello [colour='FFFF0000']World"` goes through four stages:
//!
//! 1. [`markup`] turns the tagged input into plain text, an arena of
//!    [`StyleElement`]s and a per-character element index.
//! 2. [`bidi`] reorders every paragraph into visual order with the Unicode
//!    Bidirectional Algorithm.
//! 3. [`shape`] produces positioned [`Glyph`]s, either through the simple
//!    per-codepoint path or through an external [`ComplexShaper`].
//! 4. [`layout`] wraps each paragraph into [`Line`]s, justifies them and
//!    aligns embedded objects.
//!
//! [`RenderedText`] owns the result and answers extent, selection, split and
//! geometry queries. Fonts, images and embedded objects are consumed through
//! the traits in [`font`] and [`resource`]; this crate never parses font files
//! or talks to a renderer.
//!
//! ```ignore
//! let mut cx = TextContext::new(resources);
//! let mut text = RenderedText::new();
//! text.render_text(
//!     &mut cx,
//!     "Hello [colour='FFFF0000']World",
//!     Some(&LegacyTextParser::new()),
//!     Some(default_font),
//!     ParagraphDirection::Automatic,
//! )?;
//! text.format(200.0, FormatOptions::default(), &HostContext::default())?;
//! let batches = text.create_render_geometry(0, Point::ZERO, None, None, 0.0)?;
//! ```

pub use peniko::{kurbo, Color};

pub mod bidi;
pub mod context;
pub mod error;
pub mod font;
pub mod geometry;
pub mod layout;
pub mod markup;
pub mod rendered;
pub mod resource;
pub mod shape;
pub mod style;

mod util;

#[cfg(test)]
mod tests;

pub use bidi::{BidiCharType, ParagraphDirection, TextDirection};
pub use context::TextContext;
pub use error::{Error, Result};
pub use font::{Font, FontGlyph, FontRef};
pub use geometry::{GeometryBatch, Quad};
pub use layout::{
    Alignment, BreakReason, FormatOptions, Glyph, GlyphFlags, GlyphOffset, Line, Paragraph,
};
pub use markup::{LegacyTextParser, ParsedText, ParserOptions, TextParser};
pub use rendered::{ComponentInfo, ComponentKind, RenderedText, Selection};
pub use resource::{EmbeddedObject, HostContext, Image, ImageRef, ObjectRef, ResourceMap, Resources};
pub use shape::{ComplexShaper, ShapingStrategy};
pub use style::{
    ColourRect, ElementIndex, ImageStyle, StyleElement, TextStyle, VerticalAlignment, WidgetStyle,
};
