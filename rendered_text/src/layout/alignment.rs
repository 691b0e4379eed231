// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::{Alignment, BreakReason, Line};

pub(crate) fn align(lines: &mut [Line], alignment_width: f32, alignment: Alignment, is_rtl: bool) {
    for line in lines {
        line.offset = 0.;
        line.justify_extra = 0.;

        if !alignment_width.is_finite() {
            continue;
        }

        // Trailing whitespace hangs, so it is not part of the advance.
        let free_space = alignment_width - line.advance;
        if free_space <= 0.0 {
            continue;
        }

        match (alignment, is_rtl) {
            (Alignment::Left, _) | (Alignment::Start, false) | (Alignment::End, true) => {}
            (Alignment::Right, _) | (Alignment::Start, true) | (Alignment::End, false) => {
                line.offset = free_space;
            }
            (Alignment::Middle, _) => {
                line.offset = free_space * 0.5;
            }
            (Alignment::Justified, _) => {
                // The last line of a paragraph and lines without spaces are
                // start aligned instead.
                if line.break_reason == BreakReason::None || line.justifyable_count == 0 {
                    if is_rtl {
                        line.offset = free_space;
                    }
                } else {
                    line.justify_extra = free_space / line.justifyable_count as f32;
                }
            }
        }

        if is_rtl {
            // In RTL text, trailing whitespace is on the left. As we hang that whitespace, offset
            // the line to the left.
            line.offset -= line.trailing_whitespace;
        }
    }
}
