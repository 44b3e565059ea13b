//! Geometry-side collaborator contracts.

use strata_engine::coords::{ProjectedExtent, Vec2};

use crate::canvas::DrawContext;

/// Geometry type tag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl GeometryKind {
    /// Stroke & fill symbols never apply to single points.
    #[inline]
    pub fn is_point(self) -> bool {
        self == GeometryKind::Point
    }

    #[inline]
    pub fn is_polygon(self) -> bool {
        self == GeometryKind::Polygon
    }

    #[inline]
    pub fn is_line_string(self) -> bool {
        self == GeometryKind::LineString
    }

    /// Simple path shapes, whose gradients may run along the path itself.
    #[inline]
    pub fn is_path(self) -> bool {
        matches!(self, GeometryKind::Polygon | GeometryKind::LineString)
    }

    #[inline]
    pub fn is_polygonal(self) -> bool {
        matches!(self, GeometryKind::Polygon | GeometryKind::MultiPolygon)
    }
}

/// Device-space points for one frame.
///
/// A line string is `Flat`; a polygon is `Nested` rings; split geometries
/// (antimeridian-wrapped lines, multi-part polygons) nest one level deeper.
#[derive(Debug, Clone, PartialEq)]
pub enum PointSet {
    Flat(Vec<Vec2>),
    Nested(Vec<PointSet>),
}

impl PointSet {
    /// Number of points (`Flat`) or parts (`Nested`).
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            PointSet::Flat(points) => points.len(),
            PointSet::Nested(parts) => parts.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_nested(&self) -> bool {
        matches!(self, PointSet::Nested(_))
    }

    #[inline]
    pub fn as_flat(&self) -> Option<&[Vec2]> {
        match self {
            PointSet::Flat(points) => Some(points),
            PointSet::Nested(_) => None,
        }
    }

    #[inline]
    pub fn parts(&self) -> Option<&[PointSet]> {
        match self {
            PointSet::Flat(_) => None,
            PointSet::Nested(parts) => Some(parts),
        }
    }

    /// First and last point of a non-empty flat sequence.
    pub fn endpoints(&self) -> Option<(Vec2, Vec2)> {
        let points = self.as_flat()?;
        Some((*points.first()?, *points.last()?))
    }
}

/// What a painter hands back for one frame: the points plus any extra
/// geometry-specific draw parameters, forwarded untouched to
/// [`Geometry::paint_on`].
#[derive(Debug, Clone, PartialEq)]
pub struct PaintParams {
    pub points: PointSet,
    pub extras: Vec<f32>,
}

impl PaintParams {
    #[inline]
    pub fn new(points: PointSet) -> Self {
        Self { points, extras: Vec::new() }
    }

    pub fn with_extras(mut self, extras: Vec<f32>) -> Self {
        self.extras = extras;
        self
    }
}

/// The geometry being symbolized.
pub trait Geometry {
    fn kind(&self) -> GeometryKind;

    /// Current extent in projected space, `None` for an empty geometry.
    fn projected_extent(&self) -> Option<ProjectedExtent>;

    /// Builds the path for `points` and fills/strokes it.
    ///
    /// The context already carries the resolved paints, width, cap and join;
    /// opacities and the dash pattern are applied here by the geometry.
    fn paint_on(
        &self,
        ctx: &mut dyn DrawContext,
        points: &PointSet,
        extras: &[f32],
        line_opacity: f32,
        polygon_opacity: f32,
        dasharray: &[f32],
    );
}
