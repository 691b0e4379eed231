// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use peniko::kurbo::Size;
use rendered_text::{
    Alignment, ComplexShaper, FontRef, FormatOptions, HostContext, LegacyTextParser,
    ParagraphDirection, RenderedText, TextContext,
};

use super::fixtures::{default_font, resources, RecordingObject};

/// Size of the host area given to `format`.
pub(crate) const HOST_SIZE: Size = Size::new(640., 480.);

pub(crate) struct TestEnv {
    test_name: String,
    pub(crate) cx: TextContext,
    pub(crate) default_font: FontRef,
    pub(crate) button: Arc<RecordingObject>,
    parser: LegacyTextParser,
}

impl TestEnv {
    pub(crate) fn new(test_name: &str) -> Self {
        let button = Arc::new(RecordingObject::new("button", Size::new(30., 24.)));
        Self {
            test_name: test_name.to_string(),
            cx: TextContext::new(resources(button.clone())),
            default_font: default_font(),
            button,
            parser: LegacyTextParser::new(),
        }
    }

    /// Creates an environment with a complex shaping engine installed.
    pub(crate) fn with_shaper(test_name: &str, shaper: impl ComplexShaper + 'static) -> Self {
        let mut env = Self::new(test_name);
        env.cx = TextContext::new(resources(env.button.clone())).with_complex_shaper(shaper);
        env
    }

    pub(crate) fn host(&self) -> HostContext {
        HostContext::new(HOST_SIZE)
    }

    /// Renders left to right markup without formatting it.
    pub(crate) fn render(&mut self, markup: &str) -> RenderedText {
        self.render_with_direction(markup, ParagraphDirection::LeftToRight)
    }

    pub(crate) fn render_with_direction(
        &mut self,
        markup: &str,
        direction: ParagraphDirection,
    ) -> RenderedText {
        let mut text = RenderedText::new();
        if let Err(err) = text.render_text(
            &mut self.cx,
            markup,
            Some(&self.parser),
            Some(self.default_font.clone()),
            direction,
        ) {
            panic!("{}: rendering {markup:?} failed: {err}", self.test_name);
        }
        text
    }

    /// Renders markup and formats it into `width`.
    pub(crate) fn render_formatted(
        &mut self,
        markup: &str,
        width: f32,
        alignment: Alignment,
    ) -> RenderedText {
        let mut text = self.render(markup);
        self.format(&mut text, width, alignment);
        text
    }

    /// Formats `text` with word wrapping. Returns whether every line fits.
    pub(crate) fn format(&self, text: &mut RenderedText, width: f32, alignment: Alignment) -> bool {
        let options = FormatOptions {
            word_wrap: true,
            alignment,
        };
        match text.format(width, options, &self.host()) {
            Ok(fits) => fits,
            Err(err) => panic!("{}: formatting at {width} failed: {err}", self.test_name),
        }
    }
}
