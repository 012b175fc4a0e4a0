//! Slide descriptors.
//!
//! DESIGN
//! ======
//! `Slide<C>` carries a content payload of any type. The controller only
//! reads `id`, `title` and `is_final`; rendering the payload belongs to the
//! host UI.

#[cfg(test)]
#[path = "slide_test.rs"]
mod slide_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Optional slide backdrop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Background {
    /// Any CSS color value.
    Solid(String),
    /// Any CSS gradient expression, e.g. `linear-gradient(...)`.
    Gradient(String),
}

impl Background {
    /// Inline style declaration for the slide container.
    #[must_use]
    pub fn style(&self) -> String {
        match self {
            Self::Solid(color) => format!("background-color: {color};"),
            Self::Gradient(gradient) => format!("background-image: {gradient};"),
        }
    }
}

/// One unit of carousel content.
#[derive(Clone, Debug, PartialEq)]
pub struct Slide<C> {
    pub id: String,
    pub title: String,
    pub content: C,
    pub background: Option<Background>,
    /// Completion is offered once the user reaches this slide.
    pub is_final: bool,
}

impl<C> Slide<C> {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: C) -> Self {
        Self { id: id.into(), title: title.into(), content, background: None, is_final: false }
    }

    #[must_use]
    pub fn with_background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    #[must_use]
    pub fn as_final(mut self) -> Self {
        self.is_final = true;
        self
    }
}

/// Check that a slide list can back a carousel: non-empty, unique ids.
///
/// # Errors
///
/// Returns [`CarouselError::EmptySlides`] for an empty list and
/// [`CarouselError::DuplicateSlideId`] naming the first repeated id.
pub fn validate<C>(slides: &[Slide<C>]) -> Result<(), CarouselError> {
    if slides.is_empty() {
        return Err(CarouselError::EmptySlides);
    }
    let mut seen = HashSet::with_capacity(slides.len());
    for slide in slides {
        if !seen.insert(slide.id.as_str()) {
            return Err(CarouselError::DuplicateSlideId(slide.id.clone()));
        }
    }
    Ok(())
}
