// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `rendered_text`.
//!
//! - The `util` module contains shared fixtures: fonts, images, a recording
//!   embedded object, a fake shaping engine and the `TestEnv` that ties them
//!   together.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests. The reason we chose this design is that it makes it
//!   easier to define shared utility functions needed by different tests.
//! - If you want to add new tests, try to follow these guidelines:
//!   - If your test can be classified to a clear "topic" (e.g. split, selection, etc.), put
//!     it into the corresponding module, or create a new one in case it doesn't exist yet.
//!   - If it cannot be classified cleanly, put it into `basic.rs`.
//!   - For test naming, try to put the "topic" of the test at the start of the name instead of
//!     the end. For example, if your test case is about splitting, `split_inside_word` is
//!     better than `inside_word_split`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod shaping;
#[macro_use]
mod util;
