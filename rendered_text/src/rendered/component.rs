// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use peniko::kurbo::Size;

use super::RenderedText;
use crate::error::Result;
use crate::layout::{Line, Paragraph};
use crate::style::{ElementIndex, StyleElement};

/// Kind of a component.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ComponentKind {
    /// A run of text.
    Text,
    /// An embedded image.
    Image,
    /// An embedded external object.
    Widget,
}

impl From<&StyleElement> for ComponentKind {
    fn from(element: &StyleElement) -> Self {
        match element {
            StyleElement::Text(_) => Self::Text,
            StyleElement::Image(_) => Self::Image,
            StyleElement::Widget(_) => Self::Widget,
        }
    }
}

/// A run of glyphs on one line that share a style element.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentInfo {
    /// The shared style element.
    pub element_index: ElementIndex,
    /// Kind of the element.
    pub kind: ComponentKind,
    /// Visual glyph range within the paragraph.
    pub glyph_range: Range<usize>,
    /// Width including padding and justification, and height including
    /// padding.
    pub size: Size,
}

/// Width of the glyph at `index` on `line`, including justification.
pub(super) fn glyph_width(paragraph: &Paragraph, line: &Line, index: usize, space_extra: f32) -> f32 {
    let glyph = &paragraph.glyphs[index];
    if glyph.is_justifyable() && line.in_content(index) {
        glyph.width() + line.justify_extra + space_extra
    } else {
        glyph.width()
    }
}

impl RenderedText {
    /// The components of a line from left to right.
    pub fn components(&self, line: usize) -> Result<Vec<ComponentInfo>> {
        self.check_layout()?;
        let (paragraph, line) = self.line(line)?;
        let mut components: Vec<ComponentInfo> = Vec::new();
        for index in line.glyph_range() {
            let glyph = &paragraph.glyphs[index];
            let width = glyph_width(paragraph, line, index, 0.);
            match components.last_mut() {
                Some(last) if last.element_index == glyph.element_index => {
                    last.glyph_range.end = index + 1;
                    last.size.width += f64::from(width);
                    last.size.height = last.size.height.max(glyph.height.into());
                }
                _ => {
                    let kind = self
                        .elements
                        .get(glyph.element_index)
                        .map_or(ComponentKind::Text, ComponentKind::from);
                    components.push(ComponentInfo {
                        element_index: glyph.element_index,
                        kind,
                        glyph_range: index..index + 1,
                        size: Size::new(width.into(), glyph.height.into()),
                    });
                }
            }
        }
        Ok(components)
    }
}
