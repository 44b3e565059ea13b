//! Map-side collaborator contracts.

use strata_engine::coords::{Coordinate, Extent, Vec2};

use crate::geometry::PaintParams;

/// Projected space to device space.
pub trait Projection {
    fn prj_to_point(&self, coordinate: &Coordinate) -> Vec2;
}

/// Per-geometry painter owned by the host's render pipeline.
pub trait Painter {
    /// Device-space points for this frame, shifted by `(dx, dy)` pixels.
    ///
    /// `None` when nothing is currently drawable (e.g. clipped away).
    fn paint_params(&self, dx: f32, dy: f32) -> Option<PaintParams>;

    /// Viewport-sized extent of the drawing surface.
    fn container_extent(&self) -> Extent;

    fn projection(&self) -> &dyn Projection;
}
