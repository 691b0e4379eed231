// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fonts, images, embedded objects and a shaping engine for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use hashbrown::HashMap;
use peniko::kurbo::{Rect, Size, Vec2};
use rendered_text::shape::{GlyphDirection, ShapeError, ShapeOutput, ShapeRequest, ShapedGlyph};
use rendered_text::{
    ColourRect, ComplexShaper, EmbeddedObject, Font, FontGlyph, FontRef, GeometryBatch,
    HostContext, Image, ImageRef, Quad, ResourceMap, TextDirection,
};

/// Advance of every glyph of the default font.
pub(crate) const ADVANCE: f32 = 10.0;
/// Height of the default font.
pub(crate) const HEIGHT: f32 = 20.0;
/// Baseline of every test font.
pub(crate) const BASELINE: f32 = 16.0;

/// Image source id of the default font's glyph atlas.
pub(crate) const DEFAULT_ATLAS: u64 = 1;
/// Image source id of the `set:icon` image.
pub(crate) const ICON_SOURCE: u64 = 10;

/// Codepoint standing in for the `fi` ligature.
pub(crate) const FI_LIGATURE: char = '\u{FB01}';

#[derive(Debug)]
pub(crate) struct TestImage {
    pub(crate) size: Size,
    pub(crate) offset: Vec2,
    pub(crate) source: u64,
}

impl Image for TestImage {
    fn size(&self) -> Size {
        self.size
    }

    fn offset(&self) -> Vec2 {
        self.offset
    }

    fn source_id(&self) -> u64 {
        self.source
    }
}

/// A monospaced font covering ASCII, Hebrew and a few special characters.
///
/// Glyph indices are codepoints. Glyph images sit on the baseline, so a glyph
/// drawn at the baseline offset covers exactly its cell.
#[derive(Debug)]
pub(crate) struct MonoFont {
    name: String,
    glyphs: HashMap<char, FontGlyph>,
    height: f32,
    kerning: HashMap<(u32, u32), f32>,
    complex: bool,
}

impl MonoFont {
    pub(crate) fn new(name: &str, advance: f32, height: f32, source: u64) -> Self {
        let atlas: ImageRef = Arc::new(TestImage {
            size: Size::new(advance.into(), height.into()),
            offset: Vec2::new(0., -f64::from(BASELINE)),
            source,
        });
        let chars = (' '..='~')
            .chain('\u{5D0}'..='\u{5EA}')
            .chain(['\u{A0}', '\t', '\r', FI_LIGATURE, char::REPLACEMENT_CHARACTER]);
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
            kerning: HashMap::new(),
            complex: false,
        }
    }

    /// Adds a kerning adjustment between two characters.
    pub(crate) fn with_kerning(mut self, left: char, right: char, adjust: f32) -> Self {
        self.kerning.insert((left as u32, right as u32), adjust);
        self
    }

    /// Marks the font as supported by complex shaping engines.
    pub(crate) fn with_complex_shaping(mut self) -> Self {
        self.complex = true;
        self
    }
}

impl Font for MonoFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn glyph_for_codepoint(&self, codepoint: char) -> Option<&FontGlyph> {
        self.glyphs.get(&codepoint)
    }

    fn glyph_by_index(&self, index: u32) -> Option<&FontGlyph> {
        self.glyphs.get(&char::from_u32(index)?)
    }

    fn kerning(&self, prev: Option<&FontGlyph>, curr: &FontGlyph) -> f32 {
        prev.and_then(|prev| self.kerning.get(&(prev.index(), curr.index())))
            .copied()
            .unwrap_or(0.)
    }

    fn baseline(&self) -> f32 {
        BASELINE
    }

    fn font_height(&self) -> f32 {
        self.height
    }

    fn supports_complex_shaping(&self) -> bool {
        self.complex
    }
}

/// An embedded object that draws a single solid quad and records every call.
#[derive(Debug)]
pub(crate) struct RecordingObject {
    name: String,
    size: Mutex<Size>,
    pub(crate) drawn: Mutex<Vec<Rect>>,
    pub(crate) display_sizes: Mutex<Vec<Size>>,
}

impl RecordingObject {
    pub(crate) fn new(name: &str, size: Size) -> Self {
        Self {
            name: name.to_string(),
            size: Mutex::new(size),
            drawn: Mutex::new(Vec::new()),
            display_sizes: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn resize(&self, size: Size) {
        *self.size.lock().unwrap() = size;
    }
}

impl EmbeddedObject for RecordingObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn pixel_size(&self, _host: &HostContext) -> Size {
        *self.size.lock().unwrap()
    }

    fn create_render_geometry(&self, rect: Rect, clip: Option<Rect>, out: &mut Vec<GeometryBatch>) {
        self.drawn.lock().unwrap().push(rect);
        GeometryBatch::push_quad(
            out,
            Quad {
                rect,
                image: None,
                colours: ColourRect::default(),
            },
            clip,
        );
    }

    fn notify_display_size_changed(&self, size: Size) {
        self.display_sizes.lock().unwrap().push(size);
    }
}

/// A shaping engine that emits one glyph per character, except for `fi`
/// which becomes a single ligature glyph.
///
/// Only handles left to right text. With `fail` set every request errors.
#[derive(Debug, Default)]
pub(crate) struct LigatureShaper {
    pub(crate) fail: bool,
    pub(crate) calls: Arc<AtomicUsize>,
}

impl LigatureShaper {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl ComplexShaper for LigatureShaper {
    fn shape(&mut self, request: &ShapeRequest<'_>) -> Result<ShapeOutput, ShapeError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.fail {
            return Err(ShapeError::Backend("engine unavailable".into()));
        }

        let font_at = |index: usize| {
            let mut end = 0;
            request.font_ranges.iter().find_map(|range| {
                end += range.len;
                (index < end).then(|| range.font.clone())
            })
        };
        let mut glyphs = Vec::new();
        let mut index = 0;
        while index < request.text.len() {
            let ch = request.text[index];
            let ligature = ch == 'f' && request.text.get(index + 1) == Some(&'i');
            let ch = if ligature { FI_LIGATURE } else { ch };
            let font: Option<FontRef> = font_at(index);
            let advance = font
                .as_ref()
                .and_then(|font| font.glyph_for_codepoint(ch))
                .map_or(0., FontGlyph::advance);
            glyphs.push(ShapedGlyph {
                glyph_index: ch as u32,
                cluster: index as u32,
                x_advance: (advance * 64.) as i32,
                direction: GlyphDirection::LeftToRight,
                ..ShapedGlyph::default()
            });
            index += if ligature { 2 } else { 1 };
        }
        Ok(ShapeOutput {
            direction: TextDirection::Ltr,
            glyphs,
        })
    }
}

/// Resources shared by the integration tests.
///
/// | Name | Resource |
/// | --- | --- |
/// | `big` | font with twice the default advance and height |
/// | `kern` | default metrics, `A` followed by `V` is kerned by -3 |
/// | `complex` | default metrics, supported by complex shaping |
/// | `set:icon` | 16x16 image |
/// | `button` | 30x24 recording object |
pub(crate) fn resources(button: Arc<RecordingObject>) -> ResourceMap {
    let mut resources = ResourceMap::new();
    resources
        .insert_font(Arc::new(MonoFont::new("big", 2. * ADVANCE, 2. * HEIGHT, 2)))
        .insert_font(Arc::new(
            MonoFont::new("kern", ADVANCE, HEIGHT, 3).with_kerning('A', 'V', -3.),
        ))
        .insert_font(Arc::new(
            MonoFont::new("complex", ADVANCE, HEIGHT, 4).with_complex_shaping(),
        ))
        .insert_image(
            "set:icon",
            Arc::new(TestImage {
                size: Size::new(16., 16.),
                offset: Vec2::ZERO,
                source: ICON_SOURCE,
            }),
        )
        .insert_object(button);
    resources
}

pub(crate) fn default_font() -> FontRef {
    Arc::new(MonoFont::new("default", ADVANCE, HEIGHT, DEFAULT_ATLAS))
}
