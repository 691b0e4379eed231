// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced to callers of [`RenderedText`](crate::RenderedText).

use thiserror::Error;

/// Errors reported by rendered text operations.
///
/// Problems that only degrade fidelity (unknown tags, missing glyphs, bidi
/// failures) are logged and recovered from locally; they never show up here.
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested line does not exist.
    #[error("line index {index} is out of range for {count} lines")]
    InvalidLine {
        /// The line index provided by the caller.
        index: usize,
        /// The number of lines at the time of the request.
        count: usize,
    },

    /// A split point was negative or not a number.
    #[error("invalid split point {0}")]
    InvalidSplitPoint(f32),

    /// A format width was negative or not a number.
    #[error("invalid area width {0}")]
    InvalidAreaWidth(f32),

    /// A character needs a font and neither its style nor the caller
    /// provided one.
    #[error("no font available for the character at index {index}")]
    MissingFont {
        /// Index of the offending character in the plain text.
        index: usize,
    },

    /// Fonts or embedded objects changed since the last `format`.
    #[error("layout is outdated, `format` must run before this request")]
    LayoutOutdated,
}

/// Result type used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
