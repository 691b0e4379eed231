// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use peniko::kurbo::Size;

use super::alignment::align;
use super::line_break::break_lines;
use super::{BreakReason, FormatOptions, Glyph, Line};
use crate::bidi::TextDirection;
use crate::resource::HostContext;
use crate::style::StyleElement;
use crate::util::{to_f32, WalkOrder};

/// A `\n` delimited segment of text, shaped into glyphs in visual order.
#[derive(Clone, Debug, Default)]
pub struct Paragraph {
    pub(crate) glyphs: Vec<Glyph>,
    pub(crate) direction: TextDirection,
    pub(crate) lines: Vec<Line>,
    pub(crate) justifyable_count: usize,
}

impl Paragraph {
    pub(crate) fn new(glyphs: Vec<Glyph>, direction: TextDirection) -> Self {
        let justifyable_count = glyphs.iter().filter(|g| g.is_justifyable()).count();
        Self {
            glyphs,
            direction,
            lines: Vec::new(),
            justifyable_count,
        }
    }

    /// The glyphs of the paragraph in visual order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Resolved direction of the paragraph.
    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    /// Lines of the last layout, in reading order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of justifyable glyphs in the paragraph.
    pub fn justifyable_count(&self) -> usize {
        self.justifyable_count
    }

    /// Width of the widest line and the total height of all lines.
    pub fn extent(&self) -> Size {
        let (width, height) = self.lines.iter().fold((0_f32, 0_f32), |(w, h), line| {
            (w.max(line.width()), h + line.height)
        });
        Size::new(width.into(), height.into())
    }

    pub(crate) fn walk_order(&self) -> WalkOrder {
        WalkOrder::new(self.glyphs.len(), self.direction.is_rtl())
    }

    /// Sizes embedded objects and distributes component padding.
    ///
    /// Padding is applied to the outer edges of every run of glyphs sharing
    /// an element.
    pub(crate) fn update_extents(&mut self, elements: &[StyleElement], host: &HostContext) {
        let len = self.glyphs.len();
        for i in 0..len {
            let prev = i.checked_sub(1).map(|j| self.glyphs[j].element_index);
            let next = self.glyphs.get(i + 1).map(|g| g.element_index);
            let glyph = &mut self.glyphs[i];
            let Some(element) = elements.get(glyph.element_index) else {
                continue;
            };

            if glyph.is_embedded_object() {
                let size = element.object_size(host);
                glyph.advance = to_f32(size.width);
                glyph.natural_height = to_f32(size.height);
            }

            let padding = element.padding();
            glyph.pad_left = if prev != Some(glyph.element_index) {
                to_f32(padding.x0)
            } else {
                0.
            };
            glyph.pad_right = if next != Some(glyph.element_index) {
                to_f32(padding.x1)
            } else {
                0.
            };
            glyph.pad_top = to_f32(padding.y0);
            glyph.height = glyph.natural_height + element.vertical_padding();
        }
    }

    /// Breaks and aligns the paragraph.
    ///
    /// Returns `true` if every line fits into `area_width`.
    pub(crate) fn format(
        &mut self,
        elements: &[StyleElement],
        host: &HostContext,
        area_width: f32,
        options: &FormatOptions,
        default_height: f32,
    ) -> bool {
        self.update_extents(elements, host);
        let walk = self.walk_order();
        let breaks = break_lines(&self.glyphs, walk, area_width, options.word_wrap);
        self.set_lines(breaks, default_height);
        self.align(area_width, options);

        let fits = self
            .lines
            .iter()
            .all(|line| !area_width.is_finite() || line.advance <= area_width);
        log::trace!(
            "formatted {} glyphs into {} lines at width {area_width}",
            self.glyphs.len(),
            self.lines.len()
        );
        fits
    }

    pub(crate) fn align(&mut self, area_width: f32, options: &FormatOptions) {
        align(
            &mut self.lines,
            area_width,
            options.alignment,
            self.direction.is_rtl(),
        );
    }

    /// Replaces the lines with the given ranges of walk positions.
    pub(crate) fn set_lines(
        &mut self,
        walk_lines: impl IntoIterator<Item = (Range<usize>, BreakReason)>,
        default_height: f32,
    ) {
        let walk = self.walk_order();
        self.lines = walk_lines
            .into_iter()
            .map(|(range, reason)| self.build_line(walk, range, reason, default_height))
            .collect();
    }

    /// Walk ranges and break reasons of the current lines.
    pub(crate) fn walk_lines(&self) -> Vec<(Range<usize>, BreakReason)> {
        let walk = self.walk_order();
        self.lines
            .iter()
            .map(|line| (walk.walk_range(line.glyph_range()), line.break_reason))
            .collect()
    }

    fn build_line(
        &self,
        walk: WalkOrder,
        range: Range<usize>,
        break_reason: BreakReason,
        default_height: f32,
    ) -> Line {
        let mut content_end = range.end;
        while content_end > range.start && self.glyphs[walk.glyph(content_end - 1)].is_whitespace()
        {
            content_end -= 1;
        }
        let glyph_range = walk.glyph_range(range.clone());
        let content_range = walk.glyph_range(range.start..content_end);

        let mut advance = 0.;
        let mut trailing_whitespace = 0.;
        let mut justifyable_count = 0;
        let mut height: Option<f32> = None;
        for index in glyph_range.clone() {
            let glyph = &self.glyphs[index];
            if content_range.contains(&index) {
                advance += glyph.width();
                if glyph.is_justifyable() {
                    justifyable_count += 1;
                }
            } else {
                trailing_whitespace += glyph.width();
            }
            height = Some(height.map_or(glyph.height, |h| h.max(glyph.height)));
        }

        Line {
            glyph_range,
            content_range,
            advance,
            trailing_whitespace,
            height: height.unwrap_or(default_height),
            offset: 0.,
            justify_extra: 0.,
            justifyable_count,
            break_reason,
        }
    }

    /// Splits off the glyphs at walk positions `..at`, which come first in
    /// reading order. Lines of both parts are cleared.
    pub(crate) fn split_off_front(&mut self, at: usize) -> Self {
        let len = self.glyphs.len();
        let at = at.min(len);
        let front = if self.direction.is_rtl() {
            self.glyphs.split_off(len - at)
        } else {
            let rest = self.glyphs.split_off(at);
            core::mem::replace(&mut self.glyphs, rest)
        };
        self.justifyable_count = self.glyphs.iter().filter(|g| g.is_justifyable()).count();
        self.lines.clear();
        Self::new(front, self.direction)
    }
}
