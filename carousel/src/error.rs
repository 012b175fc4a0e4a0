//! Carousel construction errors.
//!
//! Navigation never fails: guard violations come back as
//! [`crate::Outcome::Ignored`]. Only a malformed slide list is an error.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    EmptySlides,
    #[error("duplicate slide id: {0}")]
    DuplicateSlideId(String),
}
