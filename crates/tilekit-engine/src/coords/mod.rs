//! Coordinate and geometry types shared by the grid layout and render targets.
//!
//! Canonical pixel space:
//! - Origin top-left
//! - +X right, +Y down
//!
//! `Vector2<T>` is used both for tile coordinates (integers) and for fractional
//! pixel geometry (floats). Its relational comparisons are conjunctive: they hold
//! only when they hold for both components.

mod error;
mod range;
mod rect;
mod scalar;
mod vec2;

pub use error::ComponentIndexError;
pub use range::VecRange;
pub use rect::PixelRect;
pub use scalar::Scalar;
pub use vec2::Vector2;

/// Tile coordinate within a grid (column, row).
pub type TilePoint = Vector2<i32>;
/// Integer pixel position or extent on a surface.
pub type PixelPoint = Vector2<i32>;
