// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Context for rendering text.

use crate::resource::{ResourceMap, Resources};
use crate::shape::ComplexShaper;

/// Shared state for building rendered text: the resources that markup names
/// resolve against and the optional complex shaping engine.
///
/// One context is usually shared by every string of an application.
#[derive(Debug)]
pub struct TextContext {
    resources: Box<dyn Resources>,
    complex_shaper: Option<Box<dyn ComplexShaper>>,
}

impl TextContext {
    /// Creates a context resolving names with `resources`.
    pub fn new(resources: impl Resources + 'static) -> Self {
        Self {
            resources: Box::new(resources),
            complex_shaper: None,
        }
    }

    /// Installs a complex shaping engine.
    #[must_use]
    pub fn with_complex_shaper(mut self, shaper: impl ComplexShaper + 'static) -> Self {
        self.complex_shaper = Some(Box::new(shaper));
        self
    }

    /// Returns the resources markup names resolve against.
    pub fn resources(&self) -> &dyn Resources {
        &*self.resources
    }

    /// Returns `true` if a complex shaping engine is installed.
    pub fn has_complex_shaper(&self) -> bool {
        self.complex_shaper.is_some()
    }

    pub(crate) fn parts(&mut self) -> (&dyn Resources, Option<&mut (dyn ComplexShaper + 'static)>) {
        (&*self.resources, self.complex_shaper.as_deref_mut())
    }
}

impl Default for TextContext {
    fn default() -> Self {
        Self::new(ResourceMap::new())
    }
}
