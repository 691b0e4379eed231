// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup parsing.
//!
//! A [`TextParser`] turns tagged input into plain text, the arena of
//! [`StyleElement`]s and the index of the element owning each character.

mod legacy;
pub(crate) mod value;

pub use legacy::LegacyTextParser;

use peniko::kurbo::Insets;

use crate::resource::Resources;
use crate::style::{ColourRect, ElementIndex, StyleElement, VerticalAlignment};

/// Character that stands in for an embedded image or object in the plain
/// text.
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

/// Output of a [`TextParser`].
#[derive(Clone, Debug, Default)]
pub struct ParsedText {
    /// The plain text with all tags removed.
    pub text: Vec<char>,
    /// Style elements in order of appearance.
    pub elements: Vec<StyleElement>,
    /// Index into `elements` for each character of `text`.
    ///
    /// May be shorter than `text`; trailing characters without an element use
    /// the default text style.
    pub element_indices: Vec<ElementIndex>,
}

/// Turns tagged input into [`ParsedText`].
pub trait TextParser {
    /// Parses `input`, resolving font, image and object names with
    /// `resources`.
    fn parse(&self, input: &str, resources: &dyn Resources) -> ParsedText;
}

/// Initial formatting state of a parse.
#[derive(Clone, Debug, Default)]
pub struct ParserOptions {
    /// Colour of text and images until a `colour` tag changes it.
    pub colours: ColourRect,
    /// Padding until a padding tag changes it.
    pub padding: Insets,
    /// Vertical alignment until a `vert-formatting` tag changes it.
    pub vertical_alignment: VerticalAlignment,
}
