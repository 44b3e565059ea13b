//! Style resolution: raw [`Symbol`] to a fully populated [`ResolvedStyle`].

use strata_engine::paint::{Color, Pattern};

use crate::geometry::GeometryKind;
use crate::symbol::{GradientSpec, StyleKey, Symbol, SymbolValue};

/// Stroke end cap.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "butt" => Some(LineCap::Butt),
            "round" => Some(LineCap::Round),
            "square" => Some(LineCap::Square),
            _ => None,
        }
    }
}

/// Stroke corner join.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "miter" => Some(LineJoin::Miter),
            "round" => Some(LineJoin::Round),
            "bevel" => Some(LineJoin::Bevel),
            _ => None,
        }
    }
}

/// Resolved color-like value of `lineColor` / `polygonFill`.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintSpec {
    Solid(Color),
    Gradient(GradientSpec),
    /// `url(...)` reference to a pattern image.
    Pattern(Pattern),
}

impl PaintSpec {
    #[inline]
    pub fn gradient(&self) -> Option<&GradientSpec> {
        match self {
            PaintSpec::Gradient(g) => Some(g),
            _ => None,
        }
    }

    fn parse_text(text: &str) -> Option<Self> {
        Pattern::parse_css_url(text)
            .map(PaintSpec::Pattern)
            .or_else(|| Color::parse_css(text).map(PaintSpec::Solid))
    }
}

/// Fully defaulted style for one (geometry, symbol) pair.
///
/// Built once by [`ResolvedStyle::resolve`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub line_color: Option<PaintSpec>,
    pub line_width: f32,
    pub line_opacity: f32,
    pub line_dasharray: Vec<f32>,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub line_pattern_file: Option<String>,
    pub line_dx: f32,
    pub line_dy: f32,
    pub polygon_fill: Option<PaintSpec>,
    pub polygon_opacity: f32,
    pub polygon_pattern_file: Option<String>,
}

impl ResolvedStyle {
    pub const DEFAULT_LINE_WIDTH: f32 = 2.0;
    pub const DEFAULT_OPACITY: f32 = 1.0;

    pub fn default_line_color() -> PaintSpec {
        PaintSpec::Solid(Color::black())
    }

    /// Applies defaults, then the derivation rules:
    ///
    /// 1. a zero-width stroke gets zero opacity;
    /// 2. a non-polygon geometry without a fill inherits the stroke color as
    ///    its fill (line decorations such as arrowheads are filled with it).
    ///
    /// Present keys are honored as given, including `0` and `null` on
    /// nullable fields. A `null` or wrongly typed value on a field that cannot
    /// be empty falls back to the default with a warning.
    pub fn resolve(symbol: &Symbol, kind: GeometryKind) -> Self {
        let mut style = Self {
            line_color: paint_spec(symbol, StyleKey::LineColor, Some(Self::default_line_color())),
            line_width: number(symbol, StyleKey::LineWidth, Self::DEFAULT_LINE_WIDTH),
            line_opacity: number(symbol, StyleKey::LineOpacity, Self::DEFAULT_OPACITY),
            line_dasharray: dasharray(symbol),
            line_cap: keyword(symbol, StyleKey::LineCap, LineCap::parse),
            line_join: keyword(symbol, StyleKey::LineJoin, LineJoin::parse),
            line_pattern_file: file(symbol, StyleKey::LinePatternFile),
            line_dx: number(symbol, StyleKey::LineDx, 0.0),
            line_dy: number(symbol, StyleKey::LineDy, 0.0),
            polygon_fill: paint_spec(symbol, StyleKey::PolygonFill, None),
            polygon_opacity: number(symbol, StyleKey::PolygonOpacity, Self::DEFAULT_OPACITY),
            polygon_pattern_file: file(symbol, StyleKey::PolygonPatternFile),
        };

        if style.line_width == 0.0 {
            style.line_opacity = 0.0;
        }
        if !kind.is_polygonal() && style.polygon_fill.is_none() {
            style.polygon_fill = style.line_color.clone();
        }
        style
    }

    #[inline]
    pub fn line_gradient(&self) -> Option<&GradientSpec> {
        self.line_color.as_ref().and_then(PaintSpec::gradient)
    }

    #[inline]
    pub fn fill_gradient(&self) -> Option<&GradientSpec> {
        self.polygon_fill.as_ref().and_then(PaintSpec::gradient)
    }

    /// Both stroke and fill are fully transparent.
    ///
    /// Pattern fills count as invisible too when `polygon_opacity` is zero.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        self.polygon_opacity == 0.0 && self.line_opacity == 0.0
    }
}

// ── field readers ─────────────────────────────────────────────────────────

fn coerced(key: StyleKey, value: &SymbolValue) {
    log::warn!("symbol `{key}`: cannot use {value:?}, falling back to the default");
}

fn number(symbol: &Symbol, key: StyleKey, default: f32) -> f32 {
    match symbol.get(key) {
        None => default,
        Some(SymbolValue::Number(n)) => *n as f32,
        Some(other) => {
            coerced(key, other);
            default
        }
    }
}

fn paint_spec(symbol: &Symbol, key: StyleKey, default: Option<PaintSpec>) -> Option<PaintSpec> {
    match symbol.get(key) {
        None => default,
        Some(SymbolValue::Null) => None,
        Some(SymbolValue::Gradient(g)) => Some(PaintSpec::Gradient(g.clone())),
        Some(value @ SymbolValue::Text(text)) => match PaintSpec::parse_text(text) {
            Some(spec) => Some(spec),
            None => {
                coerced(key, value);
                default
            }
        },
        Some(other) => {
            coerced(key, other);
            default
        }
    }
}

fn dasharray(symbol: &Symbol) -> Vec<f32> {
    match symbol.get(StyleKey::LineDasharray) {
        None => Vec::new(),
        Some(SymbolValue::Numbers(segments)) => segments.iter().map(|&s| s as f32).collect(),
        Some(other) => {
            coerced(StyleKey::LineDasharray, other);
            Vec::new()
        }
    }
}

fn keyword<T: Default>(symbol: &Symbol, key: StyleKey, parse: fn(&str) -> Option<T>) -> T {
    match symbol.get(key) {
        None => T::default(),
        Some(value) => {
            let parsed = match value {
                SymbolValue::Text(text) => parse(text),
                _ => None,
            };
            parsed.unwrap_or_else(|| {
                coerced(key, value);
                T::default()
            })
        }
    }
}

fn file(symbol: &Symbol, key: StyleKey) -> Option<String> {
    match symbol.get(key) {
        None | Some(SymbolValue::Null) => None,
        Some(SymbolValue::Text(url)) => Some(url.clone()),
        Some(other) => {
            coerced(key, other);
            None
        }
    }
}
