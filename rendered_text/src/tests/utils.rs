// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use hashbrown::HashMap;
use peniko::kurbo::{Rect, Size};

use crate::{
    EmbeddedObject, Font, FontGlyph, FontRef, GeometryBatch, HostContext, Image, ImageRef,
    LegacyTextParser, ParagraphDirection, RenderedText, ResourceMap, TextContext,
};

pub(crate) const ADVANCE: f32 = 10.0;
pub(crate) const HEIGHT: f32 = 20.0;
pub(crate) const BASELINE: f32 = 16.0;

#[derive(Debug)]
pub(crate) struct TestImage {
    pub(crate) size: Size,
    pub(crate) source: u64,
}

impl Image for TestImage {
    fn size(&self) -> Size {
        self.size
    }

    fn source_id(&self) -> u64 {
        self.source
    }
}

/// A font where every glyph has the same advance.
#[derive(Debug)]
pub(crate) struct MonoFont {
    name: String,
    glyphs: HashMap<char, FontGlyph>,
    height: f32,
}

impl MonoFont {
    pub(crate) fn new(name: &str, advance: f32, height: f32) -> Self {
        let atlas: ImageRef = Arc::new(TestImage {
            size: Size::new(advance.into(), height.into()),
            source: 1,
        });
        let chars = (' '..='~')
            .chain('\u{5D0}'..='\u{5EA}')
            .chain(['\u{A0}', '\t', '\r', char::REPLACEMENT_CHARACTER]);
        let glyphs = chars
            .map(|ch| {
                let image = (!ch.is_whitespace()).then(|| atlas.clone());
                (ch, FontGlyph::new(ch as u32, image, advance))
            })
            .collect();
        Self {
            name: name.to_string(),
            glyphs,
            height,
        }
    }
}

impl Font for MonoFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn glyph_for_codepoint(&self, codepoint: char) -> Option<&FontGlyph> {
        self.glyphs.get(&codepoint)
    }

    fn baseline(&self) -> f32 {
        BASELINE
    }

    fn font_height(&self) -> f32 {
        self.height
    }
}

#[derive(Debug)]
pub(crate) struct TestObject {
    pub(crate) name: String,
    pub(crate) size: Size,
}

impl EmbeddedObject for TestObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn pixel_size(&self, _host: &HostContext) -> Size {
        self.size
    }

    fn create_render_geometry(&self, _rect: Rect, _clip: Option<Rect>, _out: &mut Vec<GeometryBatch>) {}
}

pub(crate) fn default_font() -> FontRef {
    Arc::new(MonoFont::new("default", ADVANCE, HEIGHT))
}

pub(crate) fn resources() -> ResourceMap {
    let mut resources = ResourceMap::new();
    resources
        .insert_font(Arc::new(MonoFont::new("big", 2.0 * ADVANCE, 2.0 * HEIGHT)))
        .insert_image(
            "set:icon",
            Arc::new(TestImage {
                size: Size::new(16.0, 16.0),
                source: 2,
            }),
        )
        .insert_object(Arc::new(TestObject {
            name: "button".to_string(),
            size: Size::new(30.0, 24.0),
        }));
    resources
}

/// Renders `markup` with the legacy parser and the default font.
pub(crate) fn render(markup: &str) -> RenderedText {
    let mut cx = TextContext::new(resources());
    let mut text = RenderedText::new();
    text.render_text(
        &mut cx,
        markup,
        Some(&LegacyTextParser::new()),
        Some(default_font()),
        ParagraphDirection::LeftToRight,
    )
    .unwrap();
    text
}
