use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1] and stops are expected in non-decreasing `t`
/// order. Neither is enforced here; drawing contexts clamp as they see fit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient in device pixel space.
///
/// Semantics:
/// - `start` and `end` span the gradient axis, in the same space as geometry.
/// - stops are kept in insertion order.
/// - outside the axis the edge stops are padded, as canvas gradients do.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Creates a gradient along `start -> end` with no stops yet.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Appends a stop after the existing ones.
    #[inline]
    pub fn add_color_stop(&mut self, t: f32, color: Color) {
        self.stops.push(ColorStop::new(t, color));
    }
}
