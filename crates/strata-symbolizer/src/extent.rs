//! Device-space extent of a stroked geometry.

use strata_engine::coords::{Coordinate, Extent, ProjectedExtent};

use crate::painter::Projection;

/// Scratch state for repeated extent queries.
///
/// Extent queries run once per visible feature per frame, so the two corner
/// buffers and the result box live here and are overwritten in place by
/// [`recompute`](Self::recompute); nothing is allocated per call.
///
/// The reference returned by `recompute` aliases this scratch and is
/// invalidated by the next call. The scratch belongs to exactly one
/// symbolizer and is not meant to be shared across threads.
#[derive(Debug, Default)]
pub struct ExtentScratch {
    min: Coordinate,
    max: Coordinate,
    px: Extent,
}

impl ExtentScratch {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects `extent` to device space, normalizes it and grows it by half
    /// the stroke width on every side.
    pub fn recompute(&mut self, extent: &ProjectedExtent, projection: &dyn Projection, line_width: f32) -> &Extent {
        self.min.set(extent.xmin, extent.ymin);
        self.max.set(extent.xmax, extent.ymax);
        let a = projection.prj_to_point(&self.min);
        let b = projection.prj_to_point(&self.max);
        self.px.set_corners(a, b);
        self.px.expand(line_width / 2.0);
        &self.px
    }
}
