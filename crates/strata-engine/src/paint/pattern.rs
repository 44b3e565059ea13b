/// Reference to an image pattern resource.
///
/// Holds the resource URL only; decoding and caching belong to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    pub url: String,
}

impl Pattern {
    #[inline]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Parses the CSS `url(...)` form, with or without quotes.
    ///
    /// Returns `None` when `text` is not a `url(...)` reference.
    pub fn parse_css_url(text: &str) -> Option<Self> {
        let inner = text.trim().strip_prefix("url(")?.strip_suffix(')')?;
        let url = inner.trim().trim_matches(|c| c == '"' || c == '\'');
        if url.is_empty() {
            return None;
        }
        Some(Self::new(url))
    }
}
