//! The stroke & fill symbolizer: per-frame paint orchestration for one
//! (geometry, symbol) pair.

use strata_engine::coords::Extent;

use crate::canvas::{prepare_canvas, DrawContext, GradientExtents, Resources};
use crate::extent::ExtentScratch;
use crate::geometry::{Geometry, GeometryKind, PointSet};
use crate::gradient::apply_path_gradient;
use crate::painter::Painter;
use crate::style::ResolvedStyle;
use crate::symbol::{GradientSpec, KeyGroup, Symbol};

/// Returns true when a stroke & fill symbolizer should be built for `symbol`
/// on a geometry of `kind`.
///
/// Never true for points or an absent symbol; otherwise true iff the symbol
/// carries at least one `line*` or `poly*` property, recognized or not.
pub fn applies(symbol: Option<&Symbol>, kind: GeometryKind) -> bool {
    let Some(symbol) = symbol else {
        return false;
    };
    if kind.is_point() {
        return false;
    }
    symbol.has_group(KeyGroup::Stroke) || symbol.has_group(KeyGroup::Fill)
}

enum State {
    /// Point geometry: paints nothing, has no extent.
    Inert,
    Active { style: ResolvedStyle, scratch: ExtentScratch },
}

/// Turns a resolved stroke & fill style into draw calls, once per frame.
///
/// The style is resolved when the symbolizer is built; the geometry and
/// symbol pairing is assumed stable for its lifetime.
pub struct StrokeAndFillSymbolizer<'a, G: ?Sized, P: ?Sized> {
    geometry: &'a G,
    painter: &'a P,
    state: State,
}

/// Per-frame values shared by every part drawn in one `symbolize` call.
struct Pass<'f> {
    style: &'f ResolvedStyle,
    extents: GradientExtents,
    resources: Option<&'f dyn Resources>,
    path_gradient: Option<&'f GradientSpec>,
    extras: &'f [f32],
}

impl<'a, G, P> StrokeAndFillSymbolizer<'a, G, P>
where
    G: Geometry + ?Sized,
    P: Painter + ?Sized,
{
    pub fn new(symbol: &Symbol, geometry: &'a G, painter: &'a P) -> Self {
        let kind = geometry.kind();
        let state = if kind.is_point() {
            State::Inert
        } else {
            State::Active {
                style: ResolvedStyle::resolve(symbol, kind),
                scratch: ExtentScratch::new(),
            }
        };
        Self { geometry, painter, state }
    }

    /// Resolved style, `None` for point geometries.
    pub fn style(&self) -> Option<&ResolvedStyle> {
        match &self.state {
            State::Inert => None,
            State::Active { style, .. } => Some(style),
        }
    }

    /// Draws the geometry onto `ctx` for the current frame.
    ///
    /// Nothing is drawn when both opacities are zero or the painter has no
    /// points. The dash pattern is reset afterwards so later geometries on
    /// the same context start undashed.
    pub fn symbolize(&self, ctx: &mut dyn DrawContext, resources: Option<&dyn Resources>) {
        let State::Active { style, .. } = &self.state else {
            return;
        };
        if style.is_invisible() {
            log::trace!("symbolize skipped: stroke and fill are fully transparent");
            return;
        }
        let Some(params) = self.painter.paint_params(style.line_dx, style.line_dy) else {
            log::trace!("symbolize skipped: painter returned no points");
            return;
        };

        let kind = self.geometry.kind();
        let pass = Pass {
            style,
            extents: self.gradient_extents(style, kind),
            resources,
            path_gradient: style.line_gradient().filter(|g| kind.is_path() && !g.is_map_placed()),
            extras: &params.extras,
        };

        match split_parts(kind, &params.points) {
            Some(parts) => {
                for part in parts {
                    self.paint_part(ctx, &pass, part);
                }
            }
            None => self.paint_part(ctx, &pass, &params.points),
        }

        if ctx.supports_line_dash() {
            ctx.set_line_dash(&[]);
        }
    }

    /// Device-space box covered by the stroke, or `None` for points and
    /// empty geometries.
    ///
    /// The box is recomputed in place on every call; the borrow ends before
    /// the next query.
    pub fn get_2d_extent(&mut self) -> Option<&Extent> {
        let State::Active { style, scratch } = &mut self.state else {
            return None;
        };
        let extent = self.geometry.projected_extent()?;
        Some(scratch.recompute(&extent, self.painter.projection(), style.line_width))
    }

    fn gradient_extents(&self, style: &ResolvedStyle, kind: GeometryKind) -> GradientExtents {
        let mut extents = GradientExtents::default();
        if let Some(gradient) = style.line_gradient() {
            if gradient.is_map_placed() || !kind.is_path() {
                extents.line = Some(self.painter.container_extent().expanded(style.line_width));
            }
        }
        if style.fill_gradient().is_some() {
            extents.fill = Some(self.painter.container_extent());
        }
        extents
    }

    fn paint_part(&self, ctx: &mut dyn DrawContext, pass: &Pass<'_>, points: &PointSet) {
        prepare_canvas(ctx, pass.style, &pass.extents, pass.resources);
        if let Some(gradient) = pass.path_gradient {
            apply_path_gradient(ctx, points, gradient);
        }
        self.geometry.paint_on(
            ctx,
            points,
            pass.extras,
            pass.style.line_opacity,
            pass.style.polygon_opacity,
            &pass.style.line_dasharray,
        );
    }
}

/// Parts to paint one by one, or `None` when the point set is drawn whole.
///
/// A polygon is split when its first part is itself a list of rings; a line
/// string whenever it arrives as several parts.
fn split_parts(kind: GeometryKind, points: &PointSet) -> Option<&[PointSet]> {
    let parts = points.parts().filter(|p| p.len() > 1)?;
    let split = if kind.is_polygon() { parts[0].is_nested() } else { kind.is_line_string() };
    split.then_some(parts)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use strata_engine::coords::{Coordinate, ProjectedExtent, Vec2};
    use strata_engine::paint::{Color, ColorStop, Paint};

    use super::*;
    use crate::canvas::{CanvasCmd, RecordingContext};
    use crate::geometry::PaintParams;
    use crate::painter::Projection;
    use crate::symbol::{StyleKey, SymbolValue};

    // ── fixtures ──────────────────────────────────────────────────────────

    #[derive(Debug, Clone, PartialEq)]
    struct PaintCall {
        points: PointSet,
        extras: Vec<f32>,
        line_opacity: f32,
        polygon_opacity: f32,
        dasharray: Vec<f32>,
    }

    struct TestGeometry {
        kind: GeometryKind,
        extent: Option<ProjectedExtent>,
        calls: RefCell<Vec<PaintCall>>,
    }

    impl TestGeometry {
        fn new(kind: GeometryKind) -> Self {
            Self {
                kind,
                extent: Some(ProjectedExtent::new(0.0, 0.0, 100.0, 50.0)),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Geometry for TestGeometry {
        fn kind(&self) -> GeometryKind {
            self.kind
        }

        fn projected_extent(&self) -> Option<ProjectedExtent> {
            self.extent
        }

        fn paint_on(
            &self,
            ctx: &mut dyn DrawContext,
            points: &PointSet,
            extras: &[f32],
            line_opacity: f32,
            polygon_opacity: f32,
            dasharray: &[f32],
        ) {
            self.calls.borrow_mut().push(PaintCall {
                points: points.clone(),
                extras: extras.to_vec(),
                line_opacity,
                polygon_opacity,
                dasharray: dasharray.to_vec(),
            });
            ctx.begin_path();
            if polygon_opacity > 0.0 && self.kind.is_polygonal() {
                ctx.fill();
            }
            if line_opacity > 0.0 {
                ctx.stroke();
            }
        }
    }

    /// Flips Y against a 600px tall viewport.
    struct FlipY;

    impl Projection for FlipY {
        fn prj_to_point(&self, c: &Coordinate) -> Vec2 {
            Vec2::new(c.x as f32, 600.0 - c.y as f32)
        }
    }

    struct TestPainter {
        params: Option<PaintParams>,
        requested: RefCell<Vec<(f32, f32)>>,
    }

    impl TestPainter {
        fn new(points: PointSet) -> Self {
            Self { params: Some(PaintParams::new(points)), requested: RefCell::new(Vec::new()) }
        }

        fn empty() -> Self {
            Self { params: None, requested: RefCell::new(Vec::new()) }
        }
    }

    impl Painter for TestPainter {
        fn paint_params(&self, dx: f32, dy: f32) -> Option<PaintParams> {
            self.requested.borrow_mut().push((dx, dy));
            self.params.clone()
        }

        fn container_extent(&self) -> Extent {
            Extent::new(0.0, 0.0, 800.0, 600.0)
        }

        fn projection(&self) -> &dyn Projection {
            &FlipY
        }
    }

    fn flat(pts: &[(f32, f32)]) -> PointSet {
        PointSet::Flat(pts.iter().map(|&(x, y)| Vec2::new(x, y)).collect())
    }

    fn red_to_blue() -> GradientSpec {
        GradientSpec::new(vec![
            ColorStop::new(0.0, Color::parse_css("red").unwrap()),
            ColorStop::new(1.0, Color::parse_css("blue").unwrap()),
        ])
    }

    fn stroke_gradients(ctx: &RecordingContext) -> Vec<(Vec2, Vec2)> {
        ctx.commands()
            .iter()
            .filter_map(|c| match c {
                CanvasCmd::StrokePaint(Paint::LinearGradient(g)) => Some((g.start, g.end)),
                _ => None,
            })
            .collect()
    }

    // ── applicability ─────────────────────────────────────────────────────

    #[test]
    fn never_applies_to_points() {
        let symbol = Symbol::new().with(StyleKey::LineColor, "red").with(StyleKey::PolygonFill, "blue");
        assert!(!applies(Some(&symbol), GeometryKind::Point));
    }

    #[test]
    fn absent_symbol_never_applies() {
        assert!(!applies(None, GeometryKind::LineString));
    }

    #[test]
    fn applies_with_any_stroke_or_fill_key() {
        let stroke = Symbol::new().with(StyleKey::LineDx, 1);
        let fill = Symbol::new().with(StyleKey::PolygonOpacity, 0.5);
        assert!(applies(Some(&stroke), GeometryKind::LineString));
        assert!(applies(Some(&fill), GeometryKind::MultiPolygon));
        assert!(applies(Some(&fill), GeometryKind::MultiPoint));
    }

    #[test]
    fn applies_with_unrecognized_prefixed_keys() {
        for key in ["lineSmoothness", "linePatternDx", "polygonPatternDx", "polyX"] {
            let symbol = Symbol::from_json(&serde_json::json!({ key: 1 })).unwrap();
            assert!(symbol.is_empty(), "{key} is not a resolvable style key");
            assert!(applies(Some(&symbol), GeometryKind::LineString), "{key} should select the symbolizer");
        }
    }

    #[test]
    fn unrelated_keys_do_not_apply() {
        let symbol = Symbol::from_json(&serde_json::json!({ "markerFile": "pin.png", "LineColor": "red" })).unwrap();
        assert!(!applies(Some(&symbol), GeometryKind::LineString));
    }

    #[test]
    fn empty_symbol_does_not_apply() {
        assert!(!applies(Some(&Symbol::new()), GeometryKind::Polygon));
    }

    // ── inert state ───────────────────────────────────────────────────────

    #[test]
    fn point_symbolizer_is_inert() {
        let geometry = TestGeometry::new(GeometryKind::Point);
        let painter = TestPainter::new(flat(&[(1.0, 1.0)]));
        let mut sym = StrokeAndFillSymbolizer::new(&Symbol::new().with(StyleKey::LineColor, "red"), &geometry, &painter);
        let mut ctx = RecordingContext::new();
        sym.symbolize(&mut ctx, None);
        assert!(sym.style().is_none());
        assert!(ctx.commands().is_empty());
        assert!(painter.requested.borrow().is_empty());
        assert!(sym.get_2d_extent().is_none());
    }

    // ── symbolize ─────────────────────────────────────────────────────────

    #[test]
    fn fully_transparent_line_draws_nothing() {
        let geometry = TestGeometry::new(GeometryKind::LineString);
        let painter = TestPainter::new(flat(&[(0.0, 0.0), (10.0, 10.0)]));
        let symbol = Symbol::new().with(StyleKey::LineOpacity, 0).with(StyleKey::PolygonOpacity, 0);
        let sym = StrokeAndFillSymbolizer::new(&symbol, &geometry, &painter);
        let mut ctx = RecordingContext::new();
        sym.symbolize(&mut ctx, None);
        assert_eq!(ctx.draw_call_count(), 0);
        assert!(ctx.commands().is_empty());
        assert!(painter.requested.borrow().is_empty());
    }

    #[test]
    fn pattern_fill_with_zero_opacities_draws_nothing() {
        let geometry = TestGeometry::new(GeometryKind::Polygon);
        let painter = TestPainter::new(PointSet::Nested(vec![flat(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)])]));
        let symbol = Symbol::new()
            .with(StyleKey::PolygonPatternFile, "hatch.png")
            .with(StyleKey::PolygonOpacity, 0)
            .with(StyleKey::LineWidth, 0);
        let sym = StrokeAndFillSymbolizer::new(&symbol, &geometry, &painter);
        let mut ctx = RecordingContext::new();
        sym.symbolize(&mut ctx, None);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn painter_without_points_aborts() {
        let geometry = TestGeometry::new(GeometryKind::LineString);
        let painter = TestPainter::empty();
        let sym = StrokeAndFillSymbolizer::new(&Symbol::new().with(StyleKey::LineColor, "red"), &geometry, &painter);
        let mut ctx = RecordingContext::new();
        sym.symbolize(&mut ctx, None);
        assert!(ctx.commands().is_empty());
        assert!(geometry.calls.borrow().is_empty());
    }

    #[test]
    fn requests_points_with_resolved_offset() {
        let geometry = TestGeometry::new(GeometryKind::LineString);
        let painter = TestPainter::new(flat(&[(0.0, 0.0), (10.0, 10.0)]));
        let symbol = Symbol::new().with(StyleKey::LineDx, 3).with(StyleKey::LineDy, -2);
        let sym = StrokeAndFillSymbolizer::new(&symbol, &geometry, &painter);
        sym.symbolize(&mut RecordingContext::new(), None);
        assert_eq!(*painter.requested.borrow(), vec![(3.0, -2.0)]);
    }

    #[test]
    fn single_line_is_painted_once_with_style_values() {
        let geometry = TestGeometry::new(GeometryKind::LineString);
        let points = flat(&[(0.0, 0.0), (10.0, 10.0)]);
        let mut painter = TestPainter::new(points.clone());
        painter.params = painter.params.take().map(|p| p.with_extras(vec![7.0]));
        let symbol = Symbol::new()
            .with(StyleKey::LineOpacity, 0.5)
            .with(StyleKey::PolygonOpacity, 0.25)
            .with(StyleKey::LineDasharray, vec![4.0, 2.0]);
        let sym = StrokeAndFillSymbolizer::new(&symbol, &geometry, &painter);
        let mut ctx = RecordingContext::new();
        sym.symbolize(&mut ctx, None);

        let calls = geometry.calls.borrow();
        assert_eq!(
            *calls,
            vec![PaintCall {
                points,
                extras: vec![7.0],
                line_opacity: 0.5,
                polygon_opacity: 0.25,
                dasharray: vec![4.0, 2.0],
            }]
        );
        assert_eq!(ctx.draw_call_count(), 1);
    }

    #[test]
    fn dash_is_reset_after_symbolize() {
        let geometry = TestGeometry::new(GeometryKind::LineString);
        let painter = TestPainter::new(flat(&[(0.0, 0.0), (10.0, 10.0)]));
        let symbol = Symbol::new().with(StyleKey::LineDasharray, vec![4.0, 2.0]);
        let sym = StrokeAndFillSymbolizer::new(&symbol, &geometry, &painter);
        let mut ctx = RecordingContext::new();
        sym.symbolize(&mut ctx, None);
        assert_eq!(ctx.commands().last(), Some(&CanvasCmd::LineDash(Vec::new())));
    }

    #[test]
    fn no_dash_calls_without_dash_support() {
        let geometry = TestGeometry::new(GeometryKind::LineString);
        let painter = TestPainter::new(flat(&[(0.0, 0.0), (10.0, 10.0)]));
        let symbol = Symbol::new().with(StyleKey::LineDasharray, vec![4.0, 2.0]);
        let sym = StrokeAndFillSymbolizer::new(&symbol, &geometry, &painter);
        let mut ctx = RecordingContext::without_line_dash();
        sym.symbolize(&mut ctx, None);
        assert!(!ctx.commands().iter().any(|c| matches!(c, CanvasCmd::LineDash(_))));
        assert_eq!(ctx.commands().last(), Some(&CanvasCmd::Stroke));
    }

    // ── split geometries ──────────────────────────────────────────────────

    #[test]
    fn polygon_with_nested_parts_is_split() {
        let geometry = TestGeometry::new(GeometryKind::Polygon);
        let part_a = PointSet::Nested(vec![flat(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)])]);
        let part_b = PointSet::Nested(vec![flat(&[(10.0, 0.0), (15.0, 0.0), (15.0, 5.0)])]);
        let painter = TestPainter::new(PointSet::Nested(vec![part_a.clone(), part_b.clone()]));
        let sym = StrokeAndFillSymbolizer::new(&Symbol::new().with(StyleKey::PolygonFill, "red"), &geometry, &painter);
        let mut ctx = RecordingContext::new();
        sym.symbolize(&mut ctx, None);

        let painted: Vec<PointSet> = geometry.calls.borrow().iter().map(|c| c.points.clone()).collect();
        assert_eq!(painted, vec![part_a, part_b]);
        // Style is re-applied before each part.
        let widths = ctx.commands().iter().filter(|c| matches!(c, CanvasCmd::LineWidth(_))).count();
        assert_eq!(widths, 2);
    }

    #[test]
    fn polygon_with_single_ring_is_not_split() {
        let geometry = TestGeometry::new(GeometryKind::Polygon);
        let rings = PointSet::Nested(vec![flat(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)])]);
        let painter = TestPainter::new(rings.clone());
        let sym = StrokeAndFillSymbolizer::new(&Symbol::new().with(StyleKey::PolygonFill, "red"), &geometry, &painter);
        sym.symbolize(&mut RecordingContext::new(), None);
        let calls = geometry.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].points, rings);
    }

    #[test]
    fn polygon_with_flat_rings_is_not_split() {
        let geometry = TestGeometry::new(GeometryKind::Polygon);
        let rings = PointSet::Nested(vec![
            flat(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)]),
            flat(&[(10.0, 10.0), (20.0, 10.0), (20.0, 20.0)]),
        ]);
        let painter = TestPainter::new(rings.clone());
        let sym = StrokeAndFillSymbolizer::new(&Symbol::new().with(StyleKey::PolygonFill, "red"), &geometry, &painter);
        sym.symbolize(&mut RecordingContext::new(), None);
        assert_eq!(geometry.calls.borrow().len(), 1);
    }

    #[test]
    fn line_with_several_segments_is_split() {
        let geometry = TestGeometry::new(GeometryKind::LineString);
        let seg_a = flat(&[(0.0, 0.0), (10.0, 0.0)]);
        let seg_b = flat(&[(20.0, 0.0), (30.0, 5.0)]);
        let painter = TestPainter::new(PointSet::Nested(vec![seg_a.clone(), seg_b.clone()]));
        let sym = StrokeAndFillSymbolizer::new(&Symbol::new().with(StyleKey::LineColor, "red"), &geometry, &painter);
        let mut ctx = RecordingContext::new();
        sym.symbolize(&mut ctx, None);
        let painted: Vec<PointSet> = geometry.calls.borrow().iter().map(|c| c.points.clone()).collect();
        assert_eq!(painted, vec![seg_a, seg_b]);
        assert_eq!(ctx.draw_call_count(), 2);
    }

    #[test]
    fn line_with_nested_first_part_is_split() {
        let geometry = TestGeometry::new(GeometryKind::LineString);
        let part_a = PointSet::Nested(vec![flat(&[(0.0, 0.0), (10.0, 0.0)])]);
        let part_b = flat(&[(20.0, 0.0), (30.0, 5.0)]);
        let painter = TestPainter::new(PointSet::Nested(vec![part_a.clone(), part_b.clone()]));
        let sym = StrokeAndFillSymbolizer::new(&Symbol::new().with(StyleKey::LineColor, "red"), &geometry, &painter);
        sym.symbolize(&mut RecordingContext::new(), None);
        let painted: Vec<PointSet> = geometry.calls.borrow().iter().map(|c| c.points.clone()).collect();
        assert_eq!(painted, vec![part_a, part_b]);
    }

    #[test]
    fn multi_line_string_is_painted_whole() {
        let geometry = TestGeometry::new(GeometryKind::MultiLineString);
        let lines = PointSet::Nested(vec![flat(&[(0.0, 0.0), (1.0, 0.0)]), flat(&[(2.0, 0.0), (3.0, 0.0)])]);
        let painter = TestPainter::new(lines);
        let sym = StrokeAndFillSymbolizer::new(&Symbol::new().with(StyleKey::LineColor, "red"), &geometry, &painter);
        sym.symbolize(&mut RecordingContext::new(), None);
        assert_eq!(geometry.calls.borrow().len(), 1);
    }

    // ── gradients ─────────────────────────────────────────────────────────

    #[test]
    fn path_gradient_is_rebuilt_per_part() {
        let geometry = TestGeometry::new(GeometryKind::LineString);
        let painter = TestPainter::new(PointSet::Nested(vec![
            flat(&[(0.0, 0.0), (10.0, 0.0)]),
            flat(&[(20.0, 5.0), (30.0, 5.0)]),
        ]));
        let sym = StrokeAndFillSymbolizer::new(&Symbol::new().with(StyleKey::LineColor, red_to_blue()), &geometry, &painter);
        let mut ctx = RecordingContext::new();
        sym.symbolize(&mut ctx, None);
        assert_eq!(
            stroke_gradients(&ctx),
            vec![
                (Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)),
                (Vec2::new(20.0, 5.0), Vec2::new(30.0, 5.0)),
            ]
        );
    }

    #[test]
    fn map_placed_line_gradient_spans_expanded_container() {
        let geometry = TestGeometry::new(GeometryKind::LineString);
        let painter = TestPainter::new(flat(&[(0.0, 0.0), (10.0, 0.0)]));
        let symbol = Symbol::new()
            .with(StyleKey::LineColor, red_to_blue().with_places([0.0, 0.0, 1.0, 0.0]))
            .with(StyleKey::LineWidth, 4);
        let sym = StrokeAndFillSymbolizer::new(&symbol, &geometry, &painter);
        let mut ctx = RecordingContext::new();
        sym.symbolize(&mut ctx, None);
        // Container (0, 0, 800, 600) grown by the line width on every side.
        assert_eq!(stroke_gradients(&ctx), vec![(Vec2::new(-4.0, -4.0), Vec2::new(804.0, -4.0))]);
    }

    #[test]
    fn non_path_geometry_gets_container_gradient() {
        let geometry = TestGeometry::new(GeometryKind::MultiLineString);
        let painter = TestPainter::new(PointSet::Nested(vec![flat(&[(0.0, 0.0), (10.0, 0.0)])]));
        let sym = StrokeAndFillSymbolizer::new(&Symbol::new().with(StyleKey::LineColor, red_to_blue()), &geometry, &painter);
        let mut ctx = RecordingContext::new();
        sym.symbolize(&mut ctx, None);
        // Default placement: horizontal mid-line of (-2, -2, 802, 602).
        assert_eq!(stroke_gradients(&ctx), vec![(Vec2::new(-2.0, 300.0), Vec2::new(802.0, 300.0))]);
    }

    #[test]
    fn fill_gradient_uses_raw_container_extent() {
        let geometry = TestGeometry::new(GeometryKind::Polygon);
        let painter = TestPainter::new(PointSet::Nested(vec![flat(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)])]));
        let symbol = Symbol::new().with(StyleKey::PolygonFill, red_to_blue().with_places([0.0, 0.0, 0.0, 1.0]));
        let sym = StrokeAndFillSymbolizer::new(&symbol, &geometry, &painter);
        let mut ctx = RecordingContext::new();
        sym.symbolize(&mut ctx, None);
        let fills: Vec<(Vec2, Vec2)> = ctx
            .commands()
            .iter()
            .filter_map(|c| match c {
                CanvasCmd::FillPaint(Paint::LinearGradient(g)) => Some((g.start, g.end)),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![(Vec2::new(0.0, 0.0), Vec2::new(0.0, 600.0))]);
    }

    // ── extent ────────────────────────────────────────────────────────────

    #[test]
    fn extent_is_projected_normalized_and_expanded() {
        let geometry = TestGeometry::new(GeometryKind::LineString);
        let painter = TestPainter::new(flat(&[]));
        let mut sym = StrokeAndFillSymbolizer::new(&Symbol::new().with(StyleKey::LineWidth, 4), &geometry, &painter);
        // Projected (0, 0)-(100, 50) lands at y 600 and 550 after the flip.
        assert_eq!(sym.get_2d_extent().copied(), Some(Extent::new(-2.0, 548.0, 102.0, 602.0)));
    }

    #[test]
    fn extent_reuses_the_same_box() {
        let geometry = TestGeometry::new(GeometryKind::Polygon);
        let painter = TestPainter::new(flat(&[]));
        let mut sym = StrokeAndFillSymbolizer::new(&Symbol::new().with(StyleKey::PolygonFill, "red"), &geometry, &painter);
        let (first, first_ptr) = sym.get_2d_extent().map(|e| (*e, e as *const Extent)).unwrap();
        let (second, second_ptr) = sym.get_2d_extent().map(|e| (*e, e as *const Extent)).unwrap();
        assert_eq!(first, second);
        assert!(std::ptr::eq(first_ptr, second_ptr));
    }

    #[test]
    fn empty_geometry_has_no_extent() {
        let mut geometry = TestGeometry::new(GeometryKind::LineString);
        geometry.extent = None;
        let painter = TestPainter::new(flat(&[]));
        let mut sym = StrokeAndFillSymbolizer::new(&Symbol::new().with(StyleKey::LineWidth, 1), &geometry, &painter);
        assert!(sym.get_2d_extent().is_none());
    }

    #[test]
    fn null_line_color_still_paints_fill() {
        let geometry = TestGeometry::new(GeometryKind::Polygon);
        let painter = TestPainter::new(PointSet::Nested(vec![flat(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)])]));
        let symbol = Symbol::new()
            .with(StyleKey::LineColor, SymbolValue::Null)
            .with(StyleKey::PolygonFill, "red");
        let sym = StrokeAndFillSymbolizer::new(&symbol, &geometry, &painter);
        let mut ctx = RecordingContext::new();
        sym.symbolize(&mut ctx, None);
        assert!(ctx.commands().contains(&CanvasCmd::StrokePaint(Paint::transparent())));
        assert!(ctx.commands().contains(&CanvasCmd::Fill));
    }
}
