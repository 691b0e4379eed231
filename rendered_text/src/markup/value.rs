// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing of tag values.
//!
//! Every parser returns `None` for malformed input; an empty value parses to
//! zero.

use peniko::kurbo::{Insets, Size};
use smallvec::SmallVec;

/// Parses a single number. An empty value is zero.
pub(crate) fn parse_float(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0.);
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a list of exactly `N` comma separated numbers.
///
/// Braces and whitespace around the numbers are ignored, so both `1,2` and
/// `{1, 2}` are accepted. An empty value yields all zeros.
fn parse_list<const N: usize>(value: &str) -> Option<[f64; N]> {
    let stripped = value.trim().trim_start_matches('{').trim_end_matches('}');
    if stripped.trim().is_empty() {
        return Some([0.; N]);
    }
    let parts: SmallVec<[f64; 4]> = stripped
        .split(',')
        .map(|part| {
            part.trim()
                .trim_matches(|c: char| c == '{' || c == '}')
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
        })
        .collect::<Option<_>>()?;
    parts.as_slice().try_into().ok()
}

/// Parses padding given as `left,top,right,bottom`.
pub(crate) fn parse_padding(value: &str) -> Option<Insets> {
    let [left, top, right, bottom] = parse_list::<4>(value)?;
    Some(Insets::new(left, top, right, bottom))
}

/// Parses a size given as `width,height`.
pub(crate) fn parse_size(value: &str) -> Option<Size> {
    let [width, height] = parse_list::<2>(value)?;
    Some(Size::new(width, height))
}
