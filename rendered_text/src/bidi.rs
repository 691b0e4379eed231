// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bidirectional reordering of paragraphs.

use thiserror::Error;
use unicode_bidi::{bidi_class, BidiClass, BidiInfo, Level};

/// Base direction requested for a paragraph.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub enum ParagraphDirection {
    /// Left to right.
    #[default]
    LeftToRight,
    /// Right to left.
    RightToLeft,
    /// Determined by the first strongly directional character, left to right
    /// when there is none.
    Automatic,
}

/// Resolved direction of a paragraph.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl TextDirection {
    /// Returns `true` for [`TextDirection::Rtl`].
    pub fn is_rtl(self) -> bool {
        self == Self::Rtl
    }
}

/// Coarse bidi classification of a character.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BidiCharType {
    /// Strong left to right.
    LeftToRight,
    /// Strong right to left, including Arabic letters.
    RightToLeft,
    /// Everything else.
    Neutral,
}

/// Classifies `ch` by its Unicode bidi class.
pub fn bidi_char_type(ch: char) -> BidiCharType {
    match bidi_class(ch) {
        BidiClass::L => BidiCharType::LeftToRight,
        BidiClass::R | BidiClass::AL => BidiCharType::RightToLeft,
        _ => BidiCharType::Neutral,
    }
}

/// Failure to reorder a paragraph.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BidiError {
    /// The algorithm produced levels for a different number of characters.
    #[error("bidi levels cover {actual} characters, expected {expected}")]
    LengthMismatch {
        /// Number of characters in the paragraph.
        expected: usize,
        /// Number of resolved levels.
        actual: usize,
    },
    /// The visual order is not a permutation of the logical order.
    #[error("visual order is not a permutation of the logical order")]
    NotAPermutation,
}

/// The visual order of a paragraph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BidiMapping {
    /// Characters in visual order.
    pub visual: Vec<char>,
    /// Visual position of every logical character.
    pub logical_to_visual: Vec<usize>,
    /// Logical index of the character at every visual position.
    pub visual_to_logical: Vec<usize>,
    /// Resolved paragraph direction.
    pub direction: TextDirection,
}

impl BidiMapping {
    /// Creates the mapping for text that is already in visual order.
    pub fn identity(text: &[char], direction: TextDirection) -> Self {
        let order: Vec<usize> = (0..text.len()).collect();
        Self {
            visual: text.to_vec(),
            logical_to_visual: order.clone(),
            visual_to_logical: order,
            direction,
        }
    }
}

fn needs_reordering(ch: char) -> bool {
    use BidiClass::*;
    matches!(
        bidi_class(ch),
        R | AL | AN | LRE | RLE | LRO | RLO | PDF | LRI | RLI | FSI | PDI
    )
}

fn is_strong(ch: char) -> bool {
    bidi_char_type(ch) != BidiCharType::Neutral
}

/// Reorders `text` into visual order with the Unicode Bidirectional
/// Algorithm.
pub fn apply_bidi(text: &[char], direction: ParagraphDirection) -> Result<BidiMapping, BidiError> {
    if direction != ParagraphDirection::RightToLeft && !text.iter().copied().any(needs_reordering)
    {
        return Ok(BidiMapping::identity(text, TextDirection::Ltr));
    }

    let default_level = match direction {
        ParagraphDirection::LeftToRight => Some(Level::ltr()),
        ParagraphDirection::RightToLeft => Some(Level::rtl()),
        ParagraphDirection::Automatic => None,
    };
    let source: String = text.iter().collect();
    let info = BidiInfo::new(&source, default_level);

    // The first paragraph with a strong character decides, so a leading
    // separator does not force left to right.
    let resolved = match info
        .paragraphs
        .iter()
        .find(|para| source[para.range.clone()].chars().any(is_strong))
    {
        Some(para) if para.level.is_rtl() => TextDirection::Rtl,
        Some(_) => TextDirection::Ltr,
        None => match direction {
            ParagraphDirection::RightToLeft => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        },
    };

    // `BidiInfo` splits on paragraph separators such as `\r`, so the visual
    // order is assembled paragraph by paragraph. The per-character levels
    // always cover the whole text.
    let mut visual_to_logical = Vec::with_capacity(text.len());
    let mut char_start = 0;
    for para in &info.paragraphs {
        let char_len = source[para.range.clone()].chars().count();
        let levels = info.reordered_levels_per_char(para, para.range.clone());
        let Some(para_levels) = levels.get(char_start..char_start + char_len) else {
            return Err(BidiError::LengthMismatch {
                expected: char_start + char_len,
                actual: levels.len(),
            });
        };
        visual_to_logical.extend(
            BidiInfo::reorder_visual(para_levels)
                .into_iter()
                .map(|index| char_start + index),
        );
        char_start += char_len;
    }
    if visual_to_logical.len() != text.len() {
        return Err(BidiError::LengthMismatch {
            expected: text.len(),
            actual: visual_to_logical.len(),
        });
    }

    const UNSET: usize = usize::MAX;
    let mut logical_to_visual = vec![UNSET; text.len()];
    for (visual, &logical) in visual_to_logical.iter().enumerate() {
        match logical_to_visual.get_mut(logical) {
            Some(slot) if *slot == UNSET => *slot = visual,
            _ => return Err(BidiError::NotAPermutation),
        }
    }

    let visual = visual_to_logical.iter().map(|&i| text[i]).collect();
    Ok(BidiMapping {
        visual,
        logical_to_visual,
        visual_to_logical,
        direction: resolved,
    })
}
