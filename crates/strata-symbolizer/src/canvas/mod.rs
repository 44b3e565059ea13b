//! Drawing-context contract and the helper that loads a resolved style onto it.

mod recording;

use std::collections::HashSet;

use strata_engine::coords::{Extent, Vec2};
use strata_engine::paint::{Color, Paint, Pattern};

use crate::gradient::extent_gradient;
use crate::style::{LineCap, LineJoin, PaintSpec, ResolvedStyle};

pub use recording::{CanvasCmd, RecordingContext};

/// Mutable 2D drawing surface, in the shape of an HTML canvas context.
///
/// State set here (paints, width, dash) persists until overwritten, and is
/// shared by everything drawn on the same context.
pub trait DrawContext {
    fn set_stroke_paint(&mut self, paint: Paint);
    fn set_fill_paint(&mut self, paint: Paint);
    fn set_line_width(&mut self, width: f32);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);
    fn set_global_alpha(&mut self, alpha: f32);

    /// Some backends have no dash support; dash calls are skipped for them.
    fn supports_line_dash(&self) -> bool {
        true
    }
    fn set_line_dash(&mut self, segments: &[f32]);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);
}

/// Pattern images the host has already loaded.
pub trait Resources {
    fn has_pattern(&self, url: &str) -> bool;
}

impl Resources for HashSet<String> {
    fn has_pattern(&self, url: &str) -> bool {
        self.contains(url)
    }
}

/// Extents over which map-space gradients are laid out for one frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GradientExtents {
    pub line: Option<Extent>,
    pub fill: Option<Extent>,
}

/// Loads `style` onto `ctx` ahead of drawing one part.
///
/// Every paint is rebound on each call, so state left by a previous part
/// (a per-path gradient, say) never carries over. A stroke gradient without a
/// line extent is bound as its first stop color; the caller replaces it with
/// a per-path gradient.
pub fn prepare_canvas(
    ctx: &mut dyn DrawContext,
    style: &ResolvedStyle,
    extents: &GradientExtents,
    resources: Option<&dyn Resources>,
) {
    ctx.set_line_width(style.line_width);
    ctx.set_line_cap(style.line_cap);
    ctx.set_line_join(style.line_join);
    if ctx.supports_line_dash() {
        ctx.set_line_dash(&style.line_dasharray);
    }

    let stroke = pattern_file_paint(style.line_pattern_file.as_deref(), resources)
        .unwrap_or_else(|| spec_paint(style.line_color.as_ref(), extents.line.as_ref(), resources));
    ctx.set_stroke_paint(stroke);

    let fill = pattern_file_paint(style.polygon_pattern_file.as_deref(), resources)
        .unwrap_or_else(|| spec_paint(style.polygon_fill.as_ref(), extents.fill.as_ref(), resources));
    ctx.set_fill_paint(fill);
}

fn pattern_file_paint(file: Option<&str>, resources: Option<&dyn Resources>) -> Option<Paint> {
    let file = file?;
    if resources.is_some_and(|r| r.has_pattern(file)) {
        Some(Paint::Pattern(Pattern::new(file)))
    } else {
        log::debug!("pattern `{file}` is not loaded; using the color instead");
        None
    }
}

fn spec_paint(spec: Option<&PaintSpec>, extent: Option<&Extent>, resources: Option<&dyn Resources>) -> Paint {
    match spec {
        None => Paint::transparent(),
        Some(PaintSpec::Solid(color)) => Paint::Solid(*color),
        Some(PaintSpec::Gradient(gradient)) => match extent {
            Some(extent) => Paint::LinearGradient(extent_gradient(extent, gradient)),
            None => Paint::Solid(gradient.stops.first().map_or(Color::black(), |s| s.color)),
        },
        Some(PaintSpec::Pattern(pattern)) => {
            if resources.is_some_and(|r| r.has_pattern(&pattern.url)) {
                Paint::Pattern(pattern.clone())
            } else {
                log::debug!("pattern `{}` is not loaded; painting nothing", pattern.url);
                Paint::transparent()
            }
        }
    }
}
