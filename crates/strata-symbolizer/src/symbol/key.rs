use std::fmt;

/// Which half of the symbolizer a style key configures.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KeyGroup {
    /// `line*` keys.
    Stroke,
    /// `poly*` keys.
    Fill,
}

impl KeyGroup {
    /// Group claimed by a property name through its prefix, recognized or not.
    pub fn of_name(name: &str) -> Option<Self> {
        if name.starts_with("line") {
            Some(KeyGroup::Stroke)
        } else if name.starts_with("poly") {
            Some(KeyGroup::Fill)
        } else {
            None
        }
    }
}

/// The closed set of style keys the stroke & fill symbolizer recognizes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum StyleKey {
    LineColor,
    LineWidth,
    LineOpacity,
    LineDasharray,
    LineCap,
    LineJoin,
    LinePatternFile,
    LineDx,
    LineDy,
    PolygonFill,
    PolygonOpacity,
    PolygonPatternFile,
}

impl StyleKey {
    pub const ALL: [StyleKey; 12] = [
        StyleKey::LineColor,
        StyleKey::LineWidth,
        StyleKey::LineOpacity,
        StyleKey::LineDasharray,
        StyleKey::LineCap,
        StyleKey::LineJoin,
        StyleKey::LinePatternFile,
        StyleKey::LineDx,
        StyleKey::LineDy,
        StyleKey::PolygonFill,
        StyleKey::PolygonOpacity,
        StyleKey::PolygonPatternFile,
    ];

    /// Symbol property name, as written in JSON symbols.
    pub const fn name(self) -> &'static str {
        match self {
            StyleKey::LineColor => "lineColor",
            StyleKey::LineWidth => "lineWidth",
            StyleKey::LineOpacity => "lineOpacity",
            StyleKey::LineDasharray => "lineDasharray",
            StyleKey::LineCap => "lineCap",
            StyleKey::LineJoin => "lineJoin",
            StyleKey::LinePatternFile => "linePatternFile",
            StyleKey::LineDx => "lineDx",
            StyleKey::LineDy => "lineDy",
            StyleKey::PolygonFill => "polygonFill",
            StyleKey::PolygonOpacity => "polygonOpacity",
            StyleKey::PolygonPatternFile => "polygonPatternFile",
        }
    }

    /// Case-sensitive lookup by property name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    pub const fn group(self) -> KeyGroup {
        match self {
            StyleKey::PolygonFill | StyleKey::PolygonOpacity | StyleKey::PolygonPatternFile => {
                KeyGroup::Fill
            }
            _ => KeyGroup::Stroke,
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
