use serde_json::{Map, Value};
use strata_engine::paint::{Color, ColorStop};

use crate::error::SymbolError;

use super::{GradientPlaces, GradientSpec, KeyGroup, StyleKey, Symbol, SymbolValue};

impl Symbol {
    /// Builds a symbol from a JSON object such as
    /// `{"lineColor": "#f00", "lineWidth": 3, "lineDasharray": [4, 2]}`.
    ///
    /// Properties outside [`StyleKey`] are skipped. A skipped `line*` or
    /// `poly*` property is still remembered by its [`KeyGroup`].
    pub fn from_json(value: &Value) -> Result<Self, SymbolError> {
        let object = value.as_object().ok_or(SymbolError::NotAnObject)?;
        let mut symbol = Symbol::new();
        for (name, raw) in object {
            let Some(key) = StyleKey::from_name(name) else {
                if let Some(group) = KeyGroup::of_name(name) {
                    symbol.mark_unrecognized(group);
                }
                log::trace!("skipping symbol property `{name}`");
                continue;
            };
            symbol.set(key, value_from_json(key, raw)?);
        }
        Ok(symbol)
    }

    /// Parses `text` as JSON, then defers to [`from_json`](Self::from_json).
    pub fn from_json_str(text: &str) -> Result<Self, SymbolError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }
}

fn value_from_json(key: StyleKey, raw: &Value) -> Result<SymbolValue, SymbolError> {
    match raw {
        Value::Null => Ok(SymbolValue::Null),
        Value::Number(n) => n
            .as_f64()
            .map(SymbolValue::Number)
            .ok_or(SymbolError::UnsupportedValue { key }),
        Value::String(s) => Ok(SymbolValue::Text(s.clone())),
        Value::Array(items) => items
            .iter()
            .map(Value::as_f64)
            .collect::<Option<Vec<_>>>()
            .map(SymbolValue::Numbers)
            .ok_or(SymbolError::UnsupportedValue { key }),
        Value::Object(object) if object.contains_key("colorStops") => {
            gradient_from_json(key, object).map(SymbolValue::Gradient)
        }
        _ => Err(SymbolError::UnsupportedValue { key }),
    }
}

fn gradient_from_json(key: StyleKey, object: &Map<String, Value>) -> Result<GradientSpec, SymbolError> {
    let invalid = |reason: String| SymbolError::InvalidGradient { key, reason };

    let stops = object
        .get("colorStops")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("`colorStops` must be an array".into()))?;

    let mut parsed = Vec::with_capacity(stops.len());
    for stop in stops {
        let pair = stop
            .as_array()
            .filter(|p| p.len() == 2)
            .ok_or_else(|| invalid("each color stop must be [offset, color]".into()))?;
        let t = pair[0]
            .as_f64()
            .ok_or_else(|| invalid("color stop offset must be a number".into()))?;
        let text = pair[1]
            .as_str()
            .ok_or_else(|| invalid("color stop color must be a string".into()))?;
        let color = Color::parse_css(text).ok_or_else(|| invalid(format!("unrecognized color `{text}`")))?;
        parsed.push(ColorStop::new(t as f32, color));
    }

    let places = match object.get("places") {
        None | Some(Value::Null) => None,
        Some(Value::Array(p)) if p.len() == 4 => {
            let mut out = [0.0f32; 4];
            for (slot, v) in out.iter_mut().zip(p) {
                *slot = v
                    .as_f64()
                    .ok_or_else(|| invalid("`places` must hold four numbers".into()))? as f32;
            }
            Some(GradientPlaces(out))
        }
        Some(_) => return Err(invalid("`places` must hold four numbers".into())),
    };

    Ok(GradientSpec { stops: parsed, places })
}
