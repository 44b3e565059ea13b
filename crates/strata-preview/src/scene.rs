//! JSON scene: one geometry, one symbol, a viewport and the loaded patterns.
//!
//! ```json
//! {
//!   "viewport": [800, 600],
//!   "patterns": ["hatch.png"],
//!   "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [10, 0], [10, 10]]] },
//!   "symbol": { "polygonFill": "#8c6", "lineWidth": 2 }
//! }
//! ```
//!
//! Coordinates are projected map units with +Y up; the viewport maps them
//! 1:1 to device pixels with the Y axis flipped.

use std::collections::HashSet;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use strata_engine::coords::{Coordinate, Extent, ProjectedExtent, Vec2};
use strata_symbolizer::{DrawContext, Geometry, GeometryKind, PaintParams, Painter, PointSet, Projection, Symbol};

// ── map ───────────────────────────────────────────────────────────────────

/// Viewport in device pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneMap {
    pub width: f32,
    pub height: f32,
}

impl Projection for SceneMap {
    fn prj_to_point(&self, c: &Coordinate) -> Vec2 {
        Vec2::new(c.x as f32, self.height - c.y as f32)
    }
}

// ── geometry ──────────────────────────────────────────────────────────────

/// Projected coordinates, nested the same way the device points will be.
#[derive(Debug, Clone, PartialEq)]
pub enum Coords {
    Flat(Vec<Coordinate>),
    Nested(Vec<Coords>),
}

impl Coords {
    fn for_each(&self, f: &mut impl FnMut(Coordinate)) {
        match self {
            Coords::Flat(coords) => {
                for c in coords {
                    f(*c);
                }
            }
            Coords::Nested(parts) => {
                for part in parts {
                    part.for_each(f);
                }
            }
        }
    }

    fn project(&self, map: &SceneMap, dx: f32, dy: f32) -> PointSet {
        match self {
            Coords::Flat(coords) => {
                PointSet::Flat(coords.iter().map(|c| map.prj_to_point(c).offset(dx, dy)).collect())
            }
            Coords::Nested(parts) => PointSet::Nested(parts.iter().map(|p| p.project(map, dx, dy)).collect()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneGeometry {
    pub kind: GeometryKind,
    pub coords: Coords,
}

impl Geometry for SceneGeometry {
    fn kind(&self) -> GeometryKind {
        self.kind
    }

    fn projected_extent(&self) -> Option<ProjectedExtent> {
        let mut all = Vec::new();
        self.coords.for_each(&mut |c| all.push(c));
        ProjectedExtent::from_coordinates(all)
    }

    fn paint_on(
        &self,
        ctx: &mut dyn DrawContext,
        points: &PointSet,
        _extras: &[f32],
        line_opacity: f32,
        polygon_opacity: f32,
        dasharray: &[f32],
    ) {
        let closed = self.kind.is_polygonal();
        ctx.begin_path();
        trace_path(ctx, points, closed);
        if closed && polygon_opacity > 0.0 {
            ctx.set_global_alpha(polygon_opacity);
            ctx.fill();
        }
        if line_opacity > 0.0 {
            if ctx.supports_line_dash() && !dasharray.is_empty() {
                ctx.set_line_dash(dasharray);
            }
            ctx.set_global_alpha(line_opacity);
            ctx.stroke();
        }
        ctx.set_global_alpha(1.0);
    }
}

fn trace_path(ctx: &mut dyn DrawContext, points: &PointSet, close: bool) {
    match points {
        PointSet::Flat(pts) => {
            let Some((first, rest)) = pts.split_first() else {
                return;
            };
            ctx.move_to(*first);
            for p in rest {
                ctx.line_to(*p);
            }
            if close {
                ctx.close_path();
            }
        }
        PointSet::Nested(parts) => {
            for part in parts {
                trace_path(ctx, part, close);
            }
        }
    }
}

// ── painter ───────────────────────────────────────────────────────────────

pub struct ScenePainter<'a> {
    geometry: &'a SceneGeometry,
    map: &'a SceneMap,
}

impl Painter for ScenePainter<'_> {
    fn paint_params(&self, dx: f32, dy: f32) -> Option<PaintParams> {
        let points = self.geometry.coords.project(self.map, dx, dy);
        if points.is_empty() {
            return None;
        }
        Some(PaintParams::new(points))
    }

    fn container_extent(&self) -> Extent {
        Extent::new(0.0, 0.0, self.map.width, self.map.height)
    }

    fn projection(&self) -> &dyn Projection {
        self.map
    }
}

// ── scene ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Scene {
    pub map: SceneMap,
    pub geometry: SceneGeometry,
    pub symbol: Symbol,
    pub patterns: HashSet<String>,
}

impl Scene {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).context("scene is not valid JSON")?;
        Self::from_json(&value)
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        let map = match value.get("viewport") {
            None => SceneMap { width: 800.0, height: 600.0 },
            Some(v) => {
                let size = v
                    .as_array()
                    .filter(|a| a.len() == 2)
                    .and_then(|a| Some((a[0].as_f64()?, a[1].as_f64()?)))
                    .context("`viewport` must be [width, height]")?;
                SceneMap { width: size.0 as f32, height: size.1 as f32 }
            }
        };

        let geometry = value.get("geometry").context("scene has no `geometry`")?;
        let kind_name = geometry
            .get("type")
            .and_then(Value::as_str)
            .context("geometry has no `type`")?;
        let kind = kind_from_name(kind_name)?;
        let coords = coords_from_json(geometry.get("coordinates").context("geometry has no `coordinates`")?)?;

        let symbol = match value.get("symbol") {
            Some(s) => Symbol::from_json(s).context("invalid `symbol`")?,
            None => Symbol::new(),
        };

        let patterns: HashSet<String> = match value.get("patterns") {
            None => HashSet::new(),
            Some(p) => p
                .as_array()
                .and_then(|a| a.iter().map(|u| u.as_str().map(str::to_owned)).collect::<Option<_>>())
                .context("`patterns` must be a list of URLs")?,
        };

        Ok(Self { map, geometry: SceneGeometry { kind, coords }, symbol, patterns })
    }

    pub fn painter(&self) -> ScenePainter<'_> {
        ScenePainter { geometry: &self.geometry, map: &self.map }
    }
}

fn kind_from_name(name: &str) -> Result<GeometryKind> {
    Ok(match name {
        "Point" => GeometryKind::Point,
        "LineString" => GeometryKind::LineString,
        "Polygon" => GeometryKind::Polygon,
        "MultiPoint" => GeometryKind::MultiPoint,
        "MultiLineString" => GeometryKind::MultiLineString,
        "MultiPolygon" => GeometryKind::MultiPolygon,
        other => bail!("unknown geometry type `{other}`"),
    })
}

fn position(value: &Value) -> Result<Coordinate> {
    match value.as_array().map(Vec::as_slice) {
        Some([x, y, ..]) => Ok(Coordinate::new(
            x.as_f64().context("x must be a number")?,
            y.as_f64().context("y must be a number")?,
        )),
        _ => bail!("position must be [x, y]"),
    }
}

fn is_position(value: &Value) -> bool {
    value.as_array().and_then(|a| a.first()).is_some_and(Value::is_number)
}

fn coords_from_json(value: &Value) -> Result<Coords> {
    let items = value.as_array().context("coordinates must be an array")?;
    if is_position(value) {
        return Ok(Coords::Flat(vec![position(value)?]));
    }
    if items.first().is_some_and(is_position) {
        return items.iter().map(position).collect::<Result<_>>().map(Coords::Flat);
    }
    items.iter().map(coords_from_json).collect::<Result<_>>().map(Coords::Nested)
}
