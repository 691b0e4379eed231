// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendered text container.

mod component;
mod draw;
mod selection;
mod split;

pub use component::{ComponentInfo, ComponentKind};
pub use selection::Selection;

use std::sync::Arc;

use peniko::kurbo::Size;
use peniko::Color;

use crate::bidi::{ParagraphDirection, TextDirection};
use crate::context::TextContext;
use crate::error::{Error, Result};
use crate::font::FontRef;
use crate::layout::{FormatOptions, Line, Paragraph};
use crate::markup::{ParsedText, TextParser};
use crate::resource::HostContext;
use crate::shape::{shape_paragraph, ComplexShaper, ShapeInput};
use crate::style::{ColourRect, ElementIndex, StyleElement, TextStyle};

/// Default colour of the selection highlight.
const DEFAULT_SELECTION_COLOUR: Color = Color::from_rgba8(0x60, 0x80, 0xC0, 0x80);

/// Text that has been parsed, shaped and laid out.
///
/// Built with [`render_text`](Self::render_text) and laid out with
/// [`format`](Self::format). Copies are explicit through
/// [`clone_text`](Self::clone_text), which duplicates the style element arena.
#[derive(Debug)]
pub struct RenderedText {
    text: Arc<[char]>,
    element_indices: Vec<ElementIndex>,
    elements: Vec<StyleElement>,
    paragraphs: Vec<Paragraph>,
    default_font: Option<FontRef>,
    direction: ParagraphDirection,
    area_width: f32,
    options: FormatOptions,
    host: HostContext,
    selection: Option<Selection>,
    selection_colours: ColourRect,
    layout_outdated: bool,
}

impl Default for RenderedText {
    fn default() -> Self {
        Self {
            text: Arc::from(Vec::new()),
            element_indices: Vec::new(),
            elements: Vec::new(),
            paragraphs: Vec::new(),
            default_font: None,
            direction: ParagraphDirection::default(),
            area_width: f32::INFINITY,
            options: FormatOptions::default(),
            host: HostContext::default(),
            selection: None,
            selection_colours: ColourRect::uniform(DEFAULT_SELECTION_COLOUR),
            layout_outdated: false,
        }
    }
}

impl RenderedText {
    /// Creates empty rendered text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses, shapes and lays out `text`.
    ///
    /// Without a parser the text is used verbatim with a default text style.
    /// Characters not covered by a style element use `default_font`; if one is
    /// needed and missing, [`Error::MissingFont`] is returned and the previous
    /// content is left untouched.
    ///
    /// Every `\n` starts a new paragraph, including empty ones. The initial
    /// layout is not wrapped, so until [`format`](Self::format) runs there is
    /// one line per paragraph.
    pub fn render_text(
        &mut self,
        cx: &mut TextContext,
        text: &str,
        parser: Option<&dyn TextParser>,
        default_font: Option<FontRef>,
        direction: ParagraphDirection,
    ) -> Result<()> {
        let (resources, mut shaper) = cx.parts();
        let ParsedText {
            text: chars,
            mut elements,
            mut element_indices,
        } = match parser {
            Some(parser) => parser.parse(text, resources),
            None => ParsedText {
                text: text.chars().collect(),
                ..ParsedText::default()
            },
        };

        if element_indices.len() < chars.len() {
            if default_font.is_none() {
                return Err(Error::MissingFont {
                    index: element_indices.len(),
                });
            }
            let index = elements.len();
            elements.push(StyleElement::Text(TextStyle {
                font: default_font.clone(),
                ..TextStyle::default()
            }));
            element_indices.resize(chars.len(), index);
        }

        let paragraphs = build_paragraphs(
            &mut shaper,
            &chars,
            &element_indices,
            &elements,
            default_font.as_ref(),
            direction,
        )?;
        log::trace!(
            "rendered {} characters into {} paragraphs",
            chars.len(),
            paragraphs.len()
        );

        self.text = chars.into();
        self.element_indices = element_indices;
        self.elements = elements;
        self.paragraphs = paragraphs;
        self.default_font = default_font;
        self.direction = direction;
        self.area_width = f32::INFINITY;
        self.options = FormatOptions::default();
        self.host = HostContext::default();
        self.selection = None;
        self.relayout();
        self.layout_outdated = false;
        Ok(())
    }

    /// Lays out every paragraph into lines no wider than `area_width`.
    ///
    /// Returns `Ok(true)` if every line fits. A line can overflow when
    /// wrapping is disabled or a single glyph or object is wider than the
    /// area. An infinite width disables wrapping and alignment.
    pub fn format(
        &mut self,
        area_width: f32,
        options: FormatOptions,
        host: &HostContext,
    ) -> Result<bool> {
        if area_width.is_nan() || area_width < 0. {
            return Err(Error::InvalidAreaWidth(area_width));
        }
        self.area_width = area_width;
        self.options = options;
        self.host = *host;
        self.selection = None;
        let fits = self.relayout();
        self.layout_outdated = false;
        Ok(fits)
    }

    fn relayout(&mut self) -> bool {
        let default_height = self.default_font_height();
        let mut fits = true;
        for paragraph in &mut self.paragraphs {
            fits &= paragraph.format(
                &self.elements,
                &self.host,
                self.area_width,
                &self.options,
                default_height,
            );
        }
        fits
    }

    fn default_font_height(&self) -> f32 {
        self.default_font
            .as_ref()
            .map_or(0., |font| font.font_height())
    }

    /// Re-shapes every paragraph after font metrics changed.
    ///
    /// The layout is recomputed with the last format settings but stays
    /// marked as outdated until the next [`format`](Self::format).
    pub fn on_fonts_changed(&mut self, cx: &mut TextContext) -> Result<()> {
        let (_, mut shaper) = cx.parts();
        let paragraphs = build_paragraphs(
            &mut shaper,
            &self.text,
            &self.element_indices,
            &self.elements,
            self.default_font.as_ref(),
            self.direction,
        )?;
        self.paragraphs = paragraphs;
        self.selection = None;
        self.relayout();
        self.layout_outdated = true;
        Ok(())
    }

    /// Marks the layout as outdated after an embedded object changed size.
    pub fn notify_embedded_size_changed(&mut self) {
        self.layout_outdated = true;
    }

    /// Forwards a display size change to every embedded object and marks the
    /// layout as outdated.
    pub fn notify_display_size_changed(&mut self, size: Size) {
        for element in &self.elements {
            if let StyleElement::Widget(widget) = element {
                if let Some(object) = &widget.object {
                    object.notify_display_size_changed(size);
                }
            }
        }
        self.layout_outdated = true;
    }

    /// Returns `true` if [`format`](Self::format) must run before extents or
    /// geometry can be queried.
    pub fn is_layout_outdated(&self) -> bool {
        self.layout_outdated
    }

    /// Creates an independent copy, duplicating the style element arena.
    pub fn clone_text(&self) -> Self {
        Self {
            text: self.text.clone(),
            element_indices: self.element_indices.clone(),
            elements: self.elements.clone(),
            paragraphs: self.paragraphs.clone(),
            default_font: self.default_font.clone(),
            direction: self.direction,
            area_width: self.area_width,
            options: self.options,
            host: self.host,
            selection: self.selection.clone(),
            selection_colours: self.selection_colours,
            layout_outdated: self.layout_outdated,
        }
    }

    /// The plain text without markup.
    pub fn text(&self) -> &[char] {
        &self.text
    }

    /// The style element arena.
    pub fn elements(&self) -> &[StyleElement] {
        &self.elements
    }

    /// The paragraphs in reading order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// The font used for characters without an explicit font.
    pub fn default_font(&self) -> Option<&FontRef> {
        self.default_font.as_ref()
    }

    /// Width given to the last [`format`](Self::format).
    pub fn area_width(&self) -> f32 {
        self.area_width
    }

    /// Sets the colours of the selection highlight.
    pub fn set_selection_colours(&mut self, colours: ColourRect) {
        self.selection_colours = colours;
    }

    /// Colours of the selection highlight.
    pub fn selection_colours(&self) -> &ColourRect {
        &self.selection_colours
    }

    /// Number of lines over all paragraphs.
    pub fn line_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.lines.len()).sum()
    }

    /// Finds the paragraph and the index within it of a line.
    fn locate(&self, line: usize) -> Result<(usize, usize)> {
        let mut first = 0;
        for (index, paragraph) in self.paragraphs.iter().enumerate() {
            let count = paragraph.lines.len();
            if line < first + count {
                return Ok((index, line - first));
            }
            first += count;
        }
        Err(Error::InvalidLine {
            index: line,
            count: first,
        })
    }

    fn line(&self, line: usize) -> Result<(&Paragraph, &Line)> {
        let (p, l) = self.locate(line)?;
        let paragraph = &self.paragraphs[p];
        Ok((paragraph, &paragraph.lines[l]))
    }

    fn check_layout(&self) -> Result<()> {
        if self.layout_outdated {
            Err(Error::LayoutOutdated)
        } else {
            Ok(())
        }
    }

    /// Size of a line, including justification and trailing whitespace.
    pub fn line_extent(&self, line: usize) -> Result<Size> {
        self.check_layout()?;
        let (_, line) = self.line(line)?;
        Ok(Size::new(line.width().into(), line.height.into()))
    }

    /// Width of the widest line and the total height of all lines.
    pub fn extent(&self) -> Result<Size> {
        self.check_layout()?;
        let (width, height) = self
            .paragraphs
            .iter()
            .map(Paragraph::extent)
            .fold((0_f64, 0_f64), |(w, h), size| {
                (w.max(size.width), h + size.height)
            });
        Ok(Size::new(width, height))
    }

    /// Number of justifyable glyphs in the content of a line.
    pub fn space_count(&self, line: usize) -> Result<usize> {
        self.check_layout()?;
        let (_, line) = self.line(line)?;
        Ok(line.justifyable_count)
    }

    /// Source characters of the glyphs of a line, in visual order.
    pub fn line_text(&self, line: usize) -> Result<String> {
        self.check_layout()?;
        let (paragraph, line) = self.line(line)?;
        Ok(paragraph.glyphs[line.glyph_range()]
            .iter()
            .filter_map(|glyph| self.text.get(glyph.source_index))
            .collect())
    }
}

/// Shapes every `\n` separated paragraph of `text`.
fn build_paragraphs(
    shaper: &mut Option<&mut (dyn ComplexShaper + 'static)>,
    text: &[char],
    element_indices: &[ElementIndex],
    elements: &[StyleElement],
    default_font: Option<&FontRef>,
    direction: ParagraphDirection,
) -> Result<Vec<Paragraph>> {
    let mut paragraphs = Vec::new();
    if text.is_empty() {
        return Ok(paragraphs);
    }
    let mut start = 0;
    loop {
        let end = text[start..]
            .iter()
            .position(|&ch| ch == '\n')
            .map_or(text.len(), |offset| start + offset);
        let paragraph = if end > start {
            let input = ShapeInput {
                text,
                range: start..end,
                element_indices,
                elements,
                default_font,
                direction,
            };
            shape_paragraph(&input, shaper.as_deref_mut())?
        } else {
            let empty_direction = if direction == ParagraphDirection::RightToLeft {
                TextDirection::Rtl
            } else {
                TextDirection::Ltr
            };
            Paragraph::new(Vec::new(), empty_direction)
        };
        paragraphs.push(paragraph);
        if end == text.len() {
            break;
        }
        start = end + 1;
    }
    Ok(paragraphs)
}
