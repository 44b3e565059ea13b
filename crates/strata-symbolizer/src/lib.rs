//! Strata symbolizer: stroke & fill styling for line and polygon geometries.
//!
//! A host render pipeline checks [`applies`] for each (geometry, symbol)
//! pair, builds a [`StrokeAndFillSymbolizer`] for the pairs that match, then
//! every frame calls [`StrokeAndFillSymbolizer::symbolize`] and, for culling,
//! [`StrokeAndFillSymbolizer::get_2d_extent`].
//!
//! ```rust,ignore
//! use strata_symbolizer::prelude::*;
//!
//! let symbol = Symbol::from_json_str(r#"{ "lineColor": "#36c", "lineWidth": 3 }"#)?;
//! if applies(Some(&symbol), geometry.kind()) {
//!     let mut symbolizer = StrokeAndFillSymbolizer::new(&symbol, &geometry, &painter);
//!     symbolizer.symbolize(&mut ctx, Some(&resources));
//!     let dirty = symbolizer.get_2d_extent().copied();
//! }
//! ```
//!
//! The collaborators are traits: [`Geometry`] builds paths, [`Painter`]
//! supplies device-space points and the container extent, [`DrawContext`]
//! is the canvas being drawn on. [`RecordingContext`] records draw calls
//! instead of rasterizing them.

pub mod canvas;
pub mod error;
pub mod extent;
pub mod geometry;
pub mod gradient;
pub mod painter;
pub mod style;
pub mod symbol;
pub mod symbolizer;

pub use canvas::{CanvasCmd, DrawContext, RecordingContext, Resources};
pub use error::SymbolError;
pub use geometry::{Geometry, GeometryKind, PaintParams, PointSet};
pub use painter::{Painter, Projection};
pub use style::{LineCap, LineJoin, PaintSpec, ResolvedStyle};
pub use symbol::{GradientSpec, StyleKey, Symbol, SymbolValue};
pub use symbolizer::{applies, StrokeAndFillSymbolizer};

/// Everything a host needs to drive the symbolizer.
pub mod prelude {
    pub use crate::canvas::{CanvasCmd, DrawContext, RecordingContext, Resources};
    pub use crate::geometry::{Geometry, GeometryKind, PaintParams, PointSet};
    pub use crate::painter::{Painter, Projection};
    pub use crate::symbol::{GradientSpec, StyleKey, Symbol, SymbolValue};
    pub use crate::symbolizer::{applies, StrokeAndFillSymbolizer};
    pub use strata_engine::coords::{Coordinate, Extent, ProjectedExtent, Vec2};
    pub use strata_engine::paint::{Color, ColorStop, Paint};
}
