//! Raw symbol descriptions.
//!
//! A [`Symbol`] is the partially specified style a host attaches to a
//! geometry. Only the keys listed in [`StyleKey`] are kept; values stay raw
//! until [`ResolvedStyle::resolve`](crate::style::ResolvedStyle::resolve)
//! applies defaults and derivations. Other `line*` / `poly*` properties are
//! only remembered by group, so they still select the symbolizer.

mod json;
mod key;

use std::collections::BTreeMap;

use strata_engine::paint::ColorStop;

pub use key::{KeyGroup, StyleKey};

/// Placement of a map-space gradient, as fractions of its gradient extent:
/// `[x0, y0, x1, y1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientPlaces(pub [f32; 4]);

/// Gradient description carried by `lineColor` or `polygonFill`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    /// Stops in the order they are added to the gradient.
    pub stops: Vec<ColorStop>,
    /// `Some` when the gradient is laid out over the map rather than along each path.
    pub places: Option<GradientPlaces>,
}

impl GradientSpec {
    pub fn new(stops: Vec<ColorStop>) -> Self {
        Self { stops, places: None }
    }

    pub fn with_places(mut self, places: [f32; 4]) -> Self {
        self.places = Some(GradientPlaces(places));
        self
    }

    #[inline]
    pub fn is_map_placed(&self) -> bool {
        self.places.is_some()
    }
}

/// Raw value of a symbol property.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolValue {
    /// Explicit `null`.
    Null,
    Number(f64),
    /// Colors, cap/join names, pattern file URLs.
    Text(String),
    /// Dash arrays.
    Numbers(Vec<f64>),
    Gradient(GradientSpec),
}

impl From<f64> for SymbolValue {
    fn from(v: f64) -> Self {
        SymbolValue::Number(v)
    }
}

impl From<i32> for SymbolValue {
    fn from(v: i32) -> Self {
        SymbolValue::Number(v.into())
    }
}

impl From<&str> for SymbolValue {
    fn from(v: &str) -> Self {
        SymbolValue::Text(v.to_owned())
    }
}

impl From<String> for SymbolValue {
    fn from(v: String) -> Self {
        SymbolValue::Text(v)
    }
}

impl From<Vec<f64>> for SymbolValue {
    fn from(v: Vec<f64>) -> Self {
        SymbolValue::Numbers(v)
    }
}

impl From<GradientSpec> for SymbolValue {
    fn from(v: GradientSpec) -> Self {
        SymbolValue::Gradient(v)
    }
}

/// Style keys mapped to raw values. Absent keys are distinct from explicit `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Symbol {
    entries: BTreeMap<StyleKey, SymbolValue>,
    unrecognized_stroke: bool,
    unrecognized_fill: bool,
}

impl Symbol {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: StyleKey, value: impl Into<SymbolValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: StyleKey, value: impl Into<SymbolValue>) {
        self.entries.insert(key, value.into());
    }

    /// `None` when the key is absent; `Some(&SymbolValue::Null)` for explicit null.
    #[inline]
    pub fn get(&self, key: StyleKey) -> Option<&SymbolValue> {
        self.entries.get(&key)
    }

    /// Records a property outside [`StyleKey`] whose name places it in `group`.
    pub fn mark_unrecognized(&mut self, group: KeyGroup) {
        match group {
            KeyGroup::Stroke => self.unrecognized_stroke = true,
            KeyGroup::Fill => self.unrecognized_fill = true,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = StyleKey> + '_ {
        self.entries.keys().copied()
    }

    /// Returns true if any present key, recognized or not, belongs to `group`.
    pub fn has_group(&self, group: KeyGroup) -> bool {
        let unrecognized = match group {
            KeyGroup::Stroke => self.unrecognized_stroke,
            KeyGroup::Fill => self.unrecognized_fill,
        };
        unrecognized || self.keys().any(|k| k.group() == group)
    }
}
