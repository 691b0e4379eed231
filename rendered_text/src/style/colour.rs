// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Colours for the four corners of a quad.
#[derive(Clone, Copy, Debug)]
pub struct ColourRect {
    /// Colour of the top left corner.
    pub top_left: Color,
    /// Colour of the top right corner.
    pub top_right: Color,
    /// Colour of the bottom left corner.
    pub bottom_left: Color,
    /// Colour of the bottom right corner.
    pub bottom_right: Color,
}

impl ColourRect {
    /// Creates a colour rect with the same colour in every corner.
    pub const fn uniform(colour: Color) -> Self {
        Self {
            top_left: colour,
            top_right: colour,
            bottom_left: colour,
            bottom_right: colour,
        }
    }

    /// Returns `true` if all four corners have the same colour.
    pub fn is_uniform(&self) -> bool {
        let c = self.top_left.components;
        self.top_right.components == c
            && self.bottom_left.components == c
            && self.bottom_right.components == c
    }

    /// Multiplies every corner component-wise with the matching corner of
    /// `other`.
    #[must_use]
    pub fn modulate(&self, other: &Self) -> Self {
        Self {
            top_left: modulate(self.top_left, other.top_left),
            top_right: modulate(self.top_right, other.top_right),
            bottom_left: modulate(self.bottom_left, other.bottom_left),
            bottom_right: modulate(self.bottom_right, other.bottom_right),
        }
    }
}

impl Default for ColourRect {
    fn default() -> Self {
        Self::uniform(Color::WHITE)
    }
}

impl PartialEq for ColourRect {
    fn eq(&self, other: &Self) -> bool {
        self.top_left.components == other.top_left.components
            && self.top_right.components == other.top_right.components
            && self.bottom_left.components == other.bottom_left.components
            && self.bottom_right.components == other.bottom_right.components
    }
}

fn modulate(a: Color, b: Color) -> Color {
    let [r0, g0, b0, a0] = a.components;
    let [r1, g1, b1, a1] = b.components;
    Color::new([r0 * r1, g0 * g1, b0 * b1, a0 * a1])
}

/// Parses a colour in `AARRGGBB` hexadecimal notation.
///
/// Up to eight hex digits are accepted; missing leading digits are zero, so
/// `"FF0000"` is a fully transparent red. Returns `None` for anything that is
/// not hexadecimal.
pub fn parse_argb(value: &str) -> Option<Color> {
    let value = value.trim();
    if value.is_empty() || value.len() > 8 {
        return None;
    }
    let argb = u32::from_str_radix(value, 16).ok()?;
    let [a, r, g, b] = argb.to_be_bytes();
    Some(Color::from_rgba8(r, g, b, a))
}
