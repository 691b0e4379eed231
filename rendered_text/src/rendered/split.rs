// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use super::RenderedText;
use crate::error::{Error, Result};
use crate::layout::{BreakReason, Glyph};
use crate::util::{is_wrap_delimiter, WalkOrder};

impl RenderedText {
    /// Splits `line` at the horizontal position `split_point`.
    ///
    /// Everything before the line moves into `left`, replacing its content,
    /// followed by the part of the line that fits into `split_point`. The rest
    /// of the line becomes the first line of `self`.
    ///
    /// Components are walked in reading order. Components that fit move left
    /// wholesale. A straddling text component is split after its last fitting
    /// token; only the first token of the first component may be split inside
    /// the token. A straddling embedded object moves left if it is narrower
    /// than `split_point` or starts the line.
    ///
    /// A line that fits entirely moves left without leaving an empty line
    /// behind.
    ///
    /// Returns `Ok(true)` if a token had to be split.
    pub fn split(&mut self, line: usize, split_point: f32, left: &mut Self) -> Result<bool> {
        if split_point.is_nan() || split_point < 0. {
            return Err(Error::InvalidSplitPoint(split_point));
        }
        self.check_layout()?;
        let (p, l) = self.locate(line)?;

        let paragraph = &self.paragraphs[p];
        let walk = paragraph.walk_order();
        let walk_lines = paragraph.walk_lines();
        let (line_range, line_reason) = walk_lines[l].clone();
        let text = &self.text;
        let is_delimiter = |glyph: &Glyph| {
            !glyph.is_embedded_object()
                && text
                    .get(glyph.source_index)
                    .is_some_and(|&ch| is_wrap_delimiter(ch))
        };
        let (at, was_word_split) = find_split(
            &paragraph.glyphs,
            walk,
            line_range.clone(),
            split_point,
            is_delimiter,
        );
        log::trace!("splitting line {line} at walk position {at}");

        let default_height = self.default_font_height();
        let mut front = self.paragraphs[p].split_off_front(at);
        let mut front_lines: Vec<_> = walk_lines[..l].to_vec();
        front_lines.push((line_range.start..at, BreakReason::Regular));
        // A line that moved left entirely leaves nothing behind.
        let mut rest_lines = Vec::new();
        if at < line_range.end {
            rest_lines.push((0..line_range.end - at, line_reason));
        }
        rest_lines.extend(
            walk_lines[l + 1..]
                .iter()
                .map(|(range, reason)| (range.start - at..range.end - at, *reason)),
        );

        front.update_extents(&self.elements, &self.host);
        front.set_lines(front_lines, default_height);
        front.align(self.area_width, &self.options);

        let mut left_paragraphs: Vec<_> = self.paragraphs.drain(..p).collect();
        left_paragraphs.push(front);
        if rest_lines.is_empty() {
            self.paragraphs.remove(0);
        } else {
            let rest = &mut self.paragraphs[0];
            rest.update_extents(&self.elements, &self.host);
            rest.set_lines(rest_lines, default_height);
            rest.align(self.area_width, &self.options);
        }

        *left = Self {
            text: self.text.clone(),
            element_indices: self.element_indices.clone(),
            elements: self.elements.clone(),
            paragraphs: left_paragraphs,
            default_font: self.default_font.clone(),
            direction: self.direction,
            area_width: self.area_width,
            options: self.options,
            host: self.host,
            selection: None,
            selection_colours: self.selection_colours,
            layout_outdated: false,
        };
        self.selection = None;
        Ok(was_word_split)
    }
}

/// Finds the walk position at which a line is split.
fn find_split(
    glyphs: &[Glyph],
    walk: WalkOrder,
    range: Range<usize>,
    split_point: f32,
    is_delimiter: impl Fn(&Glyph) -> bool,
) -> (usize, bool) {
    let glyph_at = |pos: usize| &glyphs[walk.glyph(pos)];
    let mut x = 0.;
    let mut pos = range.start;
    while pos < range.end {
        let element = glyph_at(pos).element_index;
        let mut end = pos;
        let mut width = 0.;
        while end < range.end && glyph_at(end).element_index == element {
            width += glyph_at(end).width();
            end += 1;
        }
        if x + width <= split_point {
            x += width;
            pos = end;
            continue;
        }

        let first_component = pos == range.start;
        if glyph_at(pos).is_embedded_object() {
            return if width < split_point || first_component {
                (end, false)
            } else {
                (pos, false)
            };
        }
        return split_text(
            &glyph_at,
            &is_delimiter,
            pos..end,
            split_point - x,
            first_component,
        );
    }
    (range.end, false)
}

/// Splits a text component that does not fit into `available`.
fn split_text<'a>(
    glyph_at: &impl Fn(usize) -> &'a Glyph,
    is_delimiter: &impl Fn(&Glyph) -> bool,
    component: Range<usize>,
    available: f32,
    first_component: bool,
) -> (usize, bool) {
    let mut used = 0.;
    let mut pos = component.start;
    while pos < component.end {
        let mut token_start = pos;
        let mut delimiters = 0.;
        while token_start < component.end && is_delimiter(glyph_at(token_start)) {
            delimiters += glyph_at(token_start).width();
            token_start += 1;
        }
        let mut token_end = token_start;
        let mut token = 0.;
        while token_end < component.end && !is_delimiter(glyph_at(token_end)) {
            token += glyph_at(token_end).width();
            token_end += 1;
        }

        if used + delimiters + token > available {
            if pos == component.start && first_component {
                // Nothing fits on the line, break inside the token.
                let mut x = used + delimiters;
                let mut at = token_start;
                while at < token_end && x + glyph_at(at).width() <= available {
                    x += glyph_at(at).width();
                    at += 1;
                }
                let at = at.max(component.start + 1);
                return (at, at > token_start && at < token_end);
            }
            return (token_start, false);
        }

        used += delimiters + token;
        pos = token_end;
    }
    (component.end, false)
}
