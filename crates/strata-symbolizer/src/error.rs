use thiserror::Error;

use crate::symbol::StyleKey;

/// Errors raised while building a [`Symbol`](crate::symbol::Symbol) from JSON.
///
/// Symbolizing itself never fails; only malformed input descriptions do.
#[derive(Debug, Error)]
pub enum SymbolError {
    /// The symbol JSON was not an object.
    #[error("symbol must be a JSON object")]
    NotAnObject,
    /// A style value had a JSON shape no symbol value can take.
    #[error("unsupported value for `{key}`")]
    UnsupportedValue { key: StyleKey },
    /// A gradient object was malformed.
    #[error("invalid gradient for `{key}`: {reason}")]
    InvalidGradient { key: StyleKey, reason: String },
    /// The input was not valid JSON.
    #[error("malformed symbol JSON")]
    Json(#[from] serde_json::Error),
}
