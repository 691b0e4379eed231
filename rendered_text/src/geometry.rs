// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render output.
//!
//! Geometry is emitted as a list of batches of textured quads. Consecutive
//! quads sampling the same image source under the same clip rect share a
//! batch; draw order inside a line does not matter since glyphs never overlap.

use peniko::kurbo::Rect;

use crate::resource::ImageRef;
use crate::style::ColourRect;

/// A single quad to draw.
#[derive(Clone, Debug)]
pub struct Quad {
    /// Destination rect in the caller's coordinate space.
    pub rect: Rect,
    /// Image sampled by the quad, `None` for a solid fill.
    pub image: Option<ImageRef>,
    /// Corner colours.
    pub colours: ColourRect,
}

impl Quad {
    fn source(&self) -> Option<u64> {
        self.image.as_ref().map(|image| image.source_id())
    }
}

/// A run of quads that can be drawn with one draw call.
#[derive(Clone, Debug, Default)]
pub struct GeometryBatch {
    /// Image source shared by every quad, `None` for solid fills.
    pub source: Option<u64>,
    /// Clip rect applied to the batch.
    pub clip: Option<Rect>,
    /// The quads of the batch.
    pub quads: Vec<Quad>,
}

impl GeometryBatch {
    /// Appends `quad` to `batches`, merging it into the last batch when its
    /// source and clip match.
    ///
    /// Quads that lie entirely outside `clip` are dropped.
    pub fn push_quad(batches: &mut Vec<Self>, quad: Quad, clip: Option<Rect>) {
        if let Some(clip) = clip {
            if quad.rect.intersect(clip).is_zero_area() {
                return;
            }
        }
        let source = quad.source();
        if let Some(last) = batches.last_mut() {
            if last.source == source && last.clip == clip {
                last.quads.push(quad);
                return;
            }
        }
        batches.push(Self {
            source,
            clip,
            quads: vec![quad],
        });
    }
}
