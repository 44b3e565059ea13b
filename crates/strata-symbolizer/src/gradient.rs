//! Linear gradients built from a [`GradientSpec`].

use strata_engine::coords::{Extent, Vec2};
use strata_engine::paint::{LinearGradient, Paint};

use crate::canvas::DrawContext;
use crate::geometry::PointSet;
use crate::symbol::GradientSpec;

/// Axis used for map-placed gradients without explicit `places`:
/// the horizontal mid-line of the extent, left to right.
const DEFAULT_PLACES: [f32; 4] = [0.0, 0.5, 1.0, 0.5];

fn build(start: Vec2, end: Vec2, spec: &GradientSpec) -> LinearGradient {
    let mut gradient = LinearGradient::new(start, end);
    for stop in &spec.stops {
        gradient.add_color_stop(stop.t, stop.color);
    }
    gradient
}

/// Binds a gradient running from the first to the last of `points` as the
/// stroke paint.
///
/// Nested or empty point sets are ignored: split geometries must be passed
/// one part at a time.
pub fn apply_path_gradient(ctx: &mut dyn DrawContext, points: &PointSet, spec: &GradientSpec) {
    let Some((first, last)) = points.endpoints() else {
        log::trace!("path gradient skipped: points are not a flat sequence");
        return;
    };
    ctx.set_stroke_paint(Paint::LinearGradient(build(first, last, spec)));
}

/// Gradient laid out over `extent`, using the gradient's `places` fractions.
pub fn extent_gradient(extent: &Extent, spec: &GradientSpec) -> LinearGradient {
    let [x0, y0, x1, y1] = spec.places.map_or(DEFAULT_PLACES, |p| p.0);
    let at = |fx: f32, fy: f32| Vec2::new(extent.xmin + extent.width() * fx, extent.ymin + extent.height() * fy);
    build(at(x0, y0), at(x1, y1), spec)
}
