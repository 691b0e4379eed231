// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style elements produced by markup parsing.
//!
//! A [`RenderedText`](crate::RenderedText) owns its elements in an arena and
//! glyphs refer to them by [`ElementIndex`].

mod colour;

pub use colour::{parse_argb, ColourRect};

use peniko::kurbo::{Insets, Size};

use crate::font::FontRef;
use crate::resource::{HostContext, ImageRef, ObjectRef};
use crate::util::to_f32;

/// Index of a [`StyleElement`] in the arena of a rendered text.
pub type ElementIndex = usize;

/// Vertical placement of a component within its line.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub enum VerticalAlignment {
    /// Align the top edge of the component with the top of the line.
    Top,
    /// Align the bottom edge of the component with the bottom of the line.
    #[default]
    Bottom,
    /// Center the component vertically within the line.
    Centre,
    /// Stretch the component to the height of the line.
    Stretch,
}

impl VerticalAlignment {
    /// Parses an alignment name as used by the `vert-formatting` tag.
    ///
    /// Both the short names (`top`, `bottom`, `centre`, `stretch`) and the
    /// long names (`TopAligned`, `BottomAligned`, `CentreAligned`,
    /// `Stretched`) are accepted.
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name.trim() {
            "top" | "TopAligned" => Self::Top,
            "bottom" | "BottomAligned" => Self::Bottom,
            "centre" | "center" | "CentreAligned" => Self::Centre,
            "stretch" | "Stretched" => Self::Stretch,
            _ => return None,
        })
    }

    /// Returns the vertical offset and the drawn height of a component of
    /// `height` within a line of `line_height`.
    pub fn place(self, height: f32, line_height: f32) -> (f32, f32) {
        match self {
            Self::Top => (0., height),
            Self::Bottom => (line_height - height, height),
            Self::Centre => ((line_height - height) * 0.5, height),
            Self::Stretch => (0., line_height),
        }
    }
}

/// Style of a run of text.
#[derive(Clone, Debug, Default)]
pub struct TextStyle {
    /// Font of the run, the default font of the string when `None`.
    pub font: Option<FontRef>,
    /// Colours applied to every glyph quad.
    pub colours: ColourRect,
    /// Padding around the run.
    pub padding: Insets,
    /// Vertical placement of the run within its line.
    pub vertical_alignment: VerticalAlignment,
}

/// An image embedded in the text.
#[derive(Clone, Debug)]
pub struct ImageStyle {
    /// The image to draw.
    pub image: ImageRef,
    /// Explicit size; a zero component uses the image's native size.
    pub size: Size,
    /// Colours the image is modulated with.
    pub colours: ColourRect,
    /// Padding around the image.
    pub padding: Insets,
    /// Vertical placement of the image within its line.
    pub vertical_alignment: VerticalAlignment,
}

impl ImageStyle {
    /// Returns the size the image is drawn at.
    pub fn image_size(&self) -> Size {
        let native = self.image.size();
        Size::new(
            if self.size.width > 0. {
                self.size.width
            } else {
                native.width
            },
            if self.size.height > 0. {
                self.size.height
            } else {
                native.height
            },
        )
    }
}

/// An external object embedded in the text.
#[derive(Clone, Debug)]
pub struct WidgetStyle {
    /// Name from the `window` tag.
    pub name: String,
    /// The resolved object, `None` if the name could not be resolved.
    pub object: Option<ObjectRef>,
    /// Padding around the object.
    pub padding: Insets,
    /// Vertical placement of the object within its line.
    pub vertical_alignment: VerticalAlignment,
}

/// One entry of the style element arena.
#[derive(Clone, Debug)]
pub enum StyleElement {
    /// A run of text.
    Text(TextStyle),
    /// An embedded image.
    Image(ImageStyle),
    /// An embedded external object.
    Widget(WidgetStyle),
}

impl StyleElement {
    /// Padding around the component.
    pub fn padding(&self) -> Insets {
        match self {
            Self::Text(style) => style.padding,
            Self::Image(style) => style.padding,
            Self::Widget(style) => style.padding,
        }
    }

    /// Vertical placement of the component within its line.
    pub fn vertical_alignment(&self) -> VerticalAlignment {
        match self {
            Self::Text(style) => style.vertical_alignment,
            Self::Image(style) => style.vertical_alignment,
            Self::Widget(style) => style.vertical_alignment,
        }
    }

    /// Explicit font of a text element.
    pub fn font(&self) -> Option<&FontRef> {
        match self {
            Self::Text(style) => style.font.as_ref(),
            _ => None,
        }
    }

    /// Colours of a text or image element.
    pub fn colours(&self) -> Option<&ColourRect> {
        match self {
            Self::Text(style) => Some(&style.colours),
            Self::Image(style) => Some(&style.colours),
            Self::Widget(_) => None,
        }
    }

    /// Returns `true` for images and external objects.
    pub fn is_embedded_object(&self) -> bool {
        !matches!(self, Self::Text(_))
    }

    /// Size of an embedded object without padding, zero for text.
    pub fn object_size(&self, host: &HostContext) -> Size {
        match self {
            Self::Text(_) => Size::ZERO,
            Self::Image(style) => style.image_size(),
            Self::Widget(style) => style
                .object
                .as_ref()
                .map_or(Size::ZERO, |object| object.pixel_size(host)),
        }
    }

    pub(crate) fn horizontal_padding(&self) -> f32 {
        let padding = self.padding();
        to_f32(padding.x0 + padding.x1)
    }

    pub(crate) fn vertical_padding(&self) -> f32 {
        let padding = self.padding();
        to_f32(padding.y0 + padding.y1)
    }
}
