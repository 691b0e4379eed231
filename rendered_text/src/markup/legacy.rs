// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;
use peniko::kurbo::{Insets, Size};

use super::value::{parse_float, parse_padding, parse_size};
use super::{ParsedText, ParserOptions, TextParser, OBJECT_REPLACEMENT};
use crate::font::FontRef;
use crate::resource::Resources;
use crate::style::{
    parse_argb, ColourRect, ElementIndex, ImageStyle, StyleElement, TextStyle, VerticalAlignment,
    WidgetStyle,
};

type TagHandler = fn(&mut ParseState<'_>, &str);

/// Parser for the `[key='value']` tag syntax.
///
/// Recognized tags:
///
/// | Tag | Effect |
/// | --- | --- |
/// | `colour='AARRGGBB'` | colour of following text and images, empty resets |
/// | `font='name'` | font of following text, empty selects the default font |
/// | `image='set:name'` | embeds an image |
/// | `window='name'` | embeds an external object |
/// | `vert-formatting='top\|bottom\|centre\|stretch'` | vertical alignment of following components |
/// | `padding='l,t,r,b'` | padding of following components |
/// | `top-padding`, `bottom-padding`, `left-padding`, `right-padding` | one side of the padding |
/// | `image-size='w,h'`, `image-width`, `image-height` | size of following images |
///
/// `vert-image-formatting` and `vert-text-formatting` are aliases of
/// `vert-formatting`.
///
/// Outside of tags a backslash escapes the next character: `\n`, `\r`, `\t`
/// and `\\` produce a newline, carriage return, tab and backslash, `\[`
/// produces a literal bracket. Other escaped characters are kept together
/// with their backslash.
pub struct LegacyTextParser {
    handlers: HashMap<&'static str, TagHandler>,
    options: ParserOptions,
}

impl LegacyTextParser {
    /// Creates a parser with the default formatting state.
    pub fn new() -> Self {
        Self::with_options(ParserOptions::default())
    }

    /// Creates a parser starting every parse from `options`.
    pub fn with_options(options: ParserOptions) -> Self {
        let mut handlers: HashMap<&'static str, TagHandler> = HashMap::new();
        handlers.insert("colour", handle_colour);
        handlers.insert("font", handle_font);
        handlers.insert("image", handle_image);
        handlers.insert("window", handle_window);
        handlers.insert("vert-formatting", handle_vert_formatting);
        handlers.insert("vert-image-formatting", handle_vert_formatting);
        handlers.insert("vert-text-formatting", handle_vert_formatting);
        handlers.insert("padding", handle_padding);
        handlers.insert("top-padding", handle_top_padding);
        handlers.insert("bottom-padding", handle_bottom_padding);
        handlers.insert("left-padding", handle_left_padding);
        handlers.insert("right-padding", handle_right_padding);
        handlers.insert("image-size", handle_image_size);
        handlers.insert("image-width", handle_image_width);
        handlers.insert("image-height", handle_image_height);
        Self { handlers, options }
    }

    /// Returns the formatting state every parse starts from.
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    fn process_tag(&self, state: &mut ParseState<'_>, tag: &str) {
        let Some((key, raw_value)) = tag.split_once('=') else {
            log::warn!("invalid tag `[{tag}]`, expected `[key='value']`; ignoring");
            return;
        };
        let Some(handler) = self.handlers.get(key) else {
            log::warn!("unknown tag `{key}` in `[{tag}]`; ignoring");
            return;
        };
        let value = raw_value
            .strip_prefix('\'')
            .and_then(|v| v.strip_suffix('\''))
            .unwrap_or("");
        handler(state, value);
    }
}

impl Default for LegacyTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for LegacyTextParser {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut tags: Vec<_> = self.handlers.keys().collect();
        tags.sort_unstable();
        f.debug_struct("LegacyTextParser")
            .field("handlers", &tags)
            .field("options", &self.options)
            .finish()
    }
}

impl TextParser for LegacyTextParser {
    fn parse(&self, input: &str, resources: &dyn Resources) -> ParsedText {
        let mut state = ParseState::new(resources, &self.options);
        let mut tag: Option<String> = None;
        let mut escaped = false;

        for ch in input.chars() {
            if let Some(tag_text) = tag.as_mut() {
                if ch == ']' {
                    self.process_tag(&mut state, tag_text);
                    tag = None;
                } else {
                    tag_text.push(ch);
                }
            } else if escaped {
                escaped = false;
                match ch {
                    'n' | '\n' => state.push_char('\n'),
                    'r' | '\r' => state.push_char('\r'),
                    't' => state.push_char('\t'),
                    '\\' => state.push_char('\\'),
                    '[' => state.push_char('['),
                    _ => {
                        state.push_char('\\');
                        state.push_char(ch);
                    }
                }
            } else if ch == '[' {
                tag = Some(String::new());
            } else if ch == '\\' {
                escaped = true;
            } else {
                state.push_char(ch);
            }
        }

        if let Some(tag_text) = tag {
            log::warn!("ignoring unterminated tag `[{tag_text}`");
        }

        log::trace!(
            "parsed {} characters into {} style elements",
            state.out.text.len(),
            state.out.elements.len()
        );
        state.out
    }
}

/// Formatting state while walking the input.
struct ParseState<'a> {
    resources: &'a dyn Resources,
    defaults: &'a ParserOptions,
    out: ParsedText,
    colours: ColourRect,
    font: Option<FontRef>,
    padding: Insets,
    image_size: Size,
    vertical_alignment: VerticalAlignment,
    /// Text element matching the current state, created on first use.
    current_text: Option<ElementIndex>,
}

impl<'a> ParseState<'a> {
    fn new(resources: &'a dyn Resources, defaults: &'a ParserOptions) -> Self {
        Self {
            resources,
            defaults,
            out: ParsedText::default(),
            colours: defaults.colours,
            font: None,
            padding: defaults.padding,
            image_size: Size::ZERO,
            vertical_alignment: defaults.vertical_alignment,
            current_text: None,
        }
    }

    fn push_char(&mut self, ch: char) {
        let index = match self.current_text {
            Some(index) => index,
            None => {
                let index = self.push_element(StyleElement::Text(TextStyle {
                    font: self.font.clone(),
                    colours: self.colours,
                    padding: self.padding,
                    vertical_alignment: self.vertical_alignment,
                }));
                self.current_text = Some(index);
                index
            }
        };
        self.out.text.push(ch);
        self.out.element_indices.push(index);
    }

    fn push_element(&mut self, element: StyleElement) -> ElementIndex {
        self.out.elements.push(element);
        self.out.elements.len() - 1
    }

    fn push_object(&mut self, element: StyleElement) {
        let index = self.push_element(element);
        self.out.text.push(OBJECT_REPLACEMENT);
        self.out.element_indices.push(index);
        self.current_text = None;
    }
}

fn parse_number(tag: &str, value: &str) -> f64 {
    parse_float(value).unwrap_or_else(|| {
        log::warn!("malformed number `{value}` for `{tag}`; using 0");
        0.
    })
}

fn handle_colour(state: &mut ParseState<'_>, value: &str) {
    state.colours = if value.is_empty() {
        state.defaults.colours
    } else if let Some(colour) = parse_argb(value) {
        ColourRect::uniform(colour)
    } else {
        log::warn!("malformed colour `{value}`; using the default colour");
        state.defaults.colours
    };
    state.current_text = None;
}

fn handle_font(state: &mut ParseState<'_>, value: &str) {
    if value.is_empty() {
        state.font = None;
    } else if let Some(font) = state.resources.font(value) {
        state.font = Some(font);
    } else {
        log::warn!("unknown font `{value}`; keeping the current font");
        return;
    }
    state.current_text = None;
}

fn handle_image(state: &mut ParseState<'_>, value: &str) {
    let Some(image) = state.resources.image(value) else {
        log::warn!("unknown image `{value}`; ignoring");
        return;
    };
    state.push_object(StyleElement::Image(ImageStyle {
        image,
        size: state.image_size,
        colours: state.colours,
        padding: state.padding,
        vertical_alignment: state.vertical_alignment,
    }));
}

fn handle_window(state: &mut ParseState<'_>, value: &str) {
    let object = state.resources.embedded_object(value);
    if object.is_none() {
        log::warn!("unknown window `{value}`; it will take up no space");
    }
    state.push_object(StyleElement::Widget(WidgetStyle {
        name: value.into(),
        object,
        padding: state.padding,
        vertical_alignment: state.vertical_alignment,
    }));
}

fn handle_vert_formatting(state: &mut ParseState<'_>, value: &str) {
    state.vertical_alignment = VerticalAlignment::parse(value).unwrap_or_else(|| {
        if !value.is_empty() {
            log::warn!("unknown vertical formatting `{value}`; using bottom alignment");
        }
        VerticalAlignment::Bottom
    });
    state.current_text = None;
}

fn handle_padding(state: &mut ParseState<'_>, value: &str) {
    state.padding = parse_padding(value).unwrap_or_else(|| {
        log::warn!("malformed padding `{value}`; using zero padding");
        Insets::ZERO
    });
    state.current_text = None;
}

fn handle_top_padding(state: &mut ParseState<'_>, value: &str) {
    state.padding.y0 = parse_number("top-padding", value);
    state.current_text = None;
}

fn handle_bottom_padding(state: &mut ParseState<'_>, value: &str) {
    state.padding.y1 = parse_number("bottom-padding", value);
    state.current_text = None;
}

fn handle_left_padding(state: &mut ParseState<'_>, value: &str) {
    state.padding.x0 = parse_number("left-padding", value);
    state.current_text = None;
}

fn handle_right_padding(state: &mut ParseState<'_>, value: &str) {
    state.padding.x1 = parse_number("right-padding", value);
    state.current_text = None;
}

fn handle_image_size(state: &mut ParseState<'_>, value: &str) {
    state.image_size = parse_size(value).unwrap_or_else(|| {
        log::warn!("malformed image size `{value}`; using the native size");
        Size::ZERO
    });
}

fn handle_image_width(state: &mut ParseState<'_>, value: &str) {
    state.image_size.width = parse_number("image-width", value);
}

fn handle_image_height(state: &mut ParseState<'_>, value: &str) {
    state.image_size.height = parse_number("image-height", value);
}
