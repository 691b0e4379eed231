// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Images, embedded objects and the lookup that resolves markup names.

use std::sync::Arc;

use hashbrown::HashMap;
use peniko::kurbo::{Rect, Size, Vec2};

use crate::font::FontRef;
use crate::geometry::GeometryBatch;

/// A renderable image, either a glyph image of a font or an image embedded
/// with the `image` tag.
pub trait Image: core::fmt::Debug + Send + Sync {
    /// Native size of the image in pixels.
    fn size(&self) -> Size;

    /// Offset of the image relative to the position it is drawn at.
    fn offset(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Identity of the underlying texture.
    ///
    /// Adjacent quads with the same source are merged into one batch.
    fn source_id(&self) -> u64;
}

/// A shared reference to an image.
pub type ImageRef = Arc<dyn Image>;

/// Information about the host an embedded object is laid out in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HostContext {
    /// Size of the area the text is laid out in.
    pub size: Size,
}

impl HostContext {
    /// Creates a host context for an area of the given size.
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

/// An external object (usually a widget) embedded in the text with the
/// `window` tag.
///
/// Its size is queried again on every `format`, since it may depend on the
/// host.
pub trait EmbeddedObject: core::fmt::Debug {
    /// Name the object is registered under.
    fn name(&self) -> &str;

    /// Size of the object within the given host.
    fn pixel_size(&self, host: &HostContext) -> Size;

    /// Appends the geometry for drawing the object into `rect`.
    fn create_render_geometry(&self, rect: Rect, clip: Option<Rect>, out: &mut Vec<GeometryBatch>);

    /// Called when the display the text is shown on changes size.
    fn notify_display_size_changed(&self, _size: Size) {}
}

/// A shared reference to an embedded object.
pub type ObjectRef = Arc<dyn EmbeddedObject>;

/// Resolves the names used in markup tags.
pub trait Resources: core::fmt::Debug {
    /// Font registered under `name`.
    fn font(&self, name: &str) -> Option<FontRef>;

    /// Image registered under `name`, usually of the form `set:image`.
    fn image(&self, name: &str) -> Option<ImageRef>;

    /// Embedded object registered under `name`.
    fn embedded_object(&self, name: &str) -> Option<ObjectRef>;
}

/// A [`Resources`] implementation backed by hash maps.
#[derive(Clone, Debug, Default)]
pub struct ResourceMap {
    fonts: HashMap<String, FontRef>,
    images: HashMap<String, ImageRef>,
    objects: HashMap<String, ObjectRef>,
}

impl ResourceMap {
    /// Creates an empty resource map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a font under its own name, replacing any previous font of
    /// that name.
    pub fn insert_font(&mut self, font: FontRef) -> &mut Self {
        self.fonts.insert(font.name().into(), font);
        self
    }

    /// Registers an image under `name`.
    pub fn insert_image(&mut self, name: impl Into<String>, image: ImageRef) -> &mut Self {
        self.images.insert(name.into(), image);
        self
    }

    /// Registers an embedded object under its own name.
    pub fn insert_object(&mut self, object: ObjectRef) -> &mut Self {
        self.objects.insert(object.name().into(), object);
        self
    }
}

impl Resources for ResourceMap {
    fn font(&self, name: &str) -> Option<FontRef> {
        self.fonts.get(name).cloned()
    }

    fn image(&self, name: &str) -> Option<ImageRef> {
        self.images.get(name).cloned()
    }

    fn embedded_object(&self, name: &str) -> Option<ObjectRef> {
        self.objects.get(name).cloned()
    }
}
