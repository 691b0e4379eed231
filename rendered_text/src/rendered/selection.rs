// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use super::component::glyph_width;
use super::RenderedText;
use crate::error::Result;
use crate::util::nearly_eq;

/// A selected range of glyphs on one line.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    line: usize,
    glyph_range: Range<usize>,
}

impl Selection {
    /// Index of the selected line.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Selected visual glyph range within the line's paragraph.
    pub fn glyph_range(&self) -> Range<usize> {
        self.glyph_range.clone()
    }
}

impl RenderedText {
    /// Selects the glyphs of `line` between two horizontal positions.
    ///
    /// Positions are relative to the left edge of the line's content, before
    /// alignment. A glyph is selected if any part of it lies in the range.
    /// Equal positions clear the selection.
    pub fn set_selection(&mut self, line: usize, start: f32, end: f32) -> Result<()> {
        self.check_layout()?;
        let (paragraph, line_data) = self.line(line)?;
        if start.is_nan() || end.is_nan() || nearly_eq(start, end) {
            self.selection = None;
            return Ok(());
        }
        let (start, end) = if start <= end { (start, end) } else { (end, start) };

        let mut first = None;
        let mut last = line_data.glyph_range.end;
        let mut x = 0.;
        for index in line_data.glyph_range() {
            if x >= end {
                last = index;
                break;
            }
            let width = glyph_width(paragraph, line_data, index, 0.);
            if first.is_none() && x + width > start {
                first = Some(index);
            }
            x += width;
        }

        self.selection = match first {
            Some(first) if first < last => Some(Selection {
                line,
                glyph_range: first..last,
            }),
            _ => None,
        };
        Ok(())
    }

    /// The current selection.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Removes the selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }
}
