//! Paint model handed to drawing contexts.
//!
//! Scope:
//! - color representation (premultiplied alpha) and CSS color parsing
//! - paint sources (solid, linear gradient, pattern)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod pattern;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient};
pub use pattern::Pattern;

/// Paint source bound as the stroke or fill style of a drawing context.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    /// Image pattern, referenced by its resource URL.
    Pattern(Pattern),
}

impl Paint {
    #[inline]
    pub fn transparent() -> Self {
        Paint::Solid(Color::transparent())
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    #[inline]
    fn from(gradient: LinearGradient) -> Self {
        Paint::LinearGradient(gradient)
    }
}
