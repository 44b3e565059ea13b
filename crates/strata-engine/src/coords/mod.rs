//! Coordinate and extent types.
//!
//! Two spaces are in play:
//! - projected space (`Coordinate`, `ProjectedExtent`): map units, `f64`
//! - device space (`Vec2`, `Extent`): pixels of the drawing surface,
//!   origin top-left, +X right, +Y down
//!
//! Conversion between the two belongs to the host's map projection.

mod coordinate;
mod extent;
mod vec2;

pub use coordinate::{Coordinate, ProjectedExtent};
pub use extent::Extent;
pub use vec2::Vec2;
