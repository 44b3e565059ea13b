use strata_engine::coords::Vec2;
use strata_engine::paint::Paint;

use crate::style::{LineCap, LineJoin};

use super::DrawContext;

/// One recorded [`DrawContext`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCmd {
    StrokePaint(Paint),
    FillPaint(Paint),
    LineWidth(f32),
    LineCap(LineCap),
    LineJoin(LineJoin),
    GlobalAlpha(f32),
    LineDash(Vec<f32>),
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    ClosePath,
    Stroke,
    Fill,
}

/// Draw context that records every call instead of rasterizing.
///
/// Used by hosts to inspect or replay the paint instructions of a frame.
/// `clear()` keeps the allocation, so one recorder can be reused across frames.
#[derive(Debug)]
pub struct RecordingContext {
    cmds: Vec<CanvasCmd>,
    line_dash: bool,
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingContext {
    #[inline]
    pub fn new() -> Self {
        Self { cmds: Vec::new(), line_dash: true }
    }

    /// A recorder that reports no dash support, like some older backends.
    #[inline]
    pub fn without_line_dash() -> Self {
        Self { cmds: Vec::new(), line_dash: false }
    }

    #[inline]
    pub fn commands(&self) -> &[CanvasCmd] {
        &self.cmds
    }

    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Number of `stroke` and `fill` calls recorded.
    pub fn draw_call_count(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, CanvasCmd::Stroke | CanvasCmd::Fill))
            .count()
    }
}

impl DrawContext for RecordingContext {
    fn set_stroke_paint(&mut self, paint: Paint) {
        self.cmds.push(CanvasCmd::StrokePaint(paint));
    }

    fn set_fill_paint(&mut self, paint: Paint) {
        self.cmds.push(CanvasCmd::FillPaint(paint));
    }

    fn set_line_width(&mut self, width: f32) {
        self.cmds.push(CanvasCmd::LineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.cmds.push(CanvasCmd::LineCap(cap));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.cmds.push(CanvasCmd::LineJoin(join));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.cmds.push(CanvasCmd::GlobalAlpha(alpha));
    }

    fn supports_line_dash(&self) -> bool {
        self.line_dash
    }

    fn set_line_dash(&mut self, segments: &[f32]) {
        self.cmds.push(CanvasCmd::LineDash(segments.to_vec()));
    }

    fn begin_path(&mut self) {
        self.cmds.push(CanvasCmd::BeginPath);
    }

    fn move_to(&mut self, p: Vec2) {
        self.cmds.push(CanvasCmd::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.cmds.push(CanvasCmd::LineTo(p));
    }

    fn close_path(&mut self) {
        self.cmds.push(CanvasCmd::ClosePath);
    }

    fn stroke(&mut self) {
        self.cmds.push(CanvasCmd::Stroke);
    }

    fn fill(&mut self) {
        self.cmds.push(CanvasCmd::Fill);
    }
}
