// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Point, Rect, Size};

use super::component::glyph_width;
use super::RenderedText;
use crate::error::Result;
use crate::geometry::{GeometryBatch, Quad};
use crate::layout::{Line, Paragraph};
use crate::style::{ColourRect, StyleElement, VerticalAlignment};
use crate::util::to_f32;

fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::from_origin_size(
        (f64::from(x), f64::from(y)),
        (f64::from(width), f64::from(height)),
    )
}

impl RenderedText {
    /// Emits the geometry of one line with its top left corner at `position`.
    ///
    /// The selection highlight comes first, followed by the quads of every
    /// glyph and the geometry of embedded objects. `space_extra` is added to
    /// every justifyable glyph on top of the justification from `format`.
    pub fn create_render_geometry(
        &self,
        line: usize,
        position: Point,
        mod_colours: Option<&ColourRect>,
        clip: Option<Rect>,
        space_extra: f32,
    ) -> Result<Vec<GeometryBatch>> {
        self.check_layout()?;
        let (paragraph, line_data) = self.line(line)?;
        let mut out = Vec::new();
        self.draw_line(
            &mut out,
            line,
            paragraph,
            line_data,
            position,
            mod_colours,
            clip,
            space_extra,
        );
        Ok(out)
    }

    /// Emits the geometry of every line, stacked downwards from `position`.
    pub fn create_render_geometry_all(
        &self,
        position: Point,
        mod_colours: Option<&ColourRect>,
        clip: Option<Rect>,
    ) -> Result<Vec<GeometryBatch>> {
        self.check_layout()?;
        let mut out = Vec::new();
        let mut pen = position;
        let mut index = 0;
        for paragraph in &self.paragraphs {
            for line in &paragraph.lines {
                self.draw_line(&mut out, index, paragraph, line, pen, mod_colours, clip, 0.);
                pen.y += f64::from(line.height);
                index += 1;
            }
        }
        Ok(out)
    }

    fn draw_line(
        &self,
        out: &mut Vec<GeometryBatch>,
        line_index: usize,
        paragraph: &Paragraph,
        line: &Line,
        position: Point,
        mod_colours: Option<&ColourRect>,
        clip: Option<Rect>,
        space_extra: f32,
    ) {
        let left = to_f32(position.x) + line.offset;
        let top = to_f32(position.y);
        let colours = |base: &ColourRect| match mod_colours {
            Some(m) => base.modulate(m),
            None => *base,
        };

        if let Some(selection) = self
            .selection
            .as_ref()
            .filter(|selection| selection.line() == line_index)
        {
            let mut x = left;
            let mut start = None;
            let mut end = left;
            for index in line.glyph_range() {
                if index == selection.glyph_range().start {
                    start = Some(x);
                }
                x += glyph_width(paragraph, line, index, space_extra);
                if index < selection.glyph_range().end {
                    end = x;
                }
            }
            if let Some(start) = start {
                GeometryBatch::push_quad(
                    out,
                    Quad {
                        rect: rect(start, top, end - start, line.height),
                        image: None,
                        colours: self.selection_colours,
                    },
                    clip,
                );
            }
        }

        let mut pen = left;
        for index in line.glyph_range() {
            let glyph = &paragraph.glyphs[index];
            let advance = glyph_width(paragraph, line, index, space_extra);
            let Some(element) = self.elements.get(glyph.element_index) else {
                pen += advance;
                continue;
            };
            let valign = element.vertical_alignment();
            let (dy, height) = valign.place(glyph.height, line.height);
            let x = pen + glyph.pad_left;
            let y = top + dy + glyph.pad_top;
            let inner_height = if valign == VerticalAlignment::Stretch {
                (height - element.vertical_padding()).max(0.)
            } else {
                glyph.natural_height
            };

            match element {
                StyleElement::Text(style) => {
                    if let Some(image) = &glyph.image {
                        let offset = image.offset();
                        let Size { width, height } = image.size();
                        GeometryBatch::push_quad(
                            out,
                            Quad {
                                rect: rect(
                                    x + glyph.offset.x + to_f32(offset.x),
                                    y + glyph.offset.y + to_f32(offset.y),
                                    to_f32(width),
                                    to_f32(height),
                                ),
                                image: Some(image.clone()),
                                colours: colours(&style.colours),
                            },
                            clip,
                        );
                    }
                }
                StyleElement::Image(style) => {
                    GeometryBatch::push_quad(
                        out,
                        Quad {
                            rect: rect(x, y, glyph.advance, inner_height),
                            image: Some(style.image.clone()),
                            colours: colours(&style.colours),
                        },
                        clip,
                    );
                }
                StyleElement::Widget(style) => {
                    if let Some(object) = &style.object {
                        object.create_render_geometry(
                            rect(x, y, glyph.advance, inner_height),
                            clip,
                            out,
                        );
                    }
                }
            }
            pen += advance;
        }
    }
}
