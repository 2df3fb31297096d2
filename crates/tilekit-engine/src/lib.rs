//! tilekit engine crate.
//!
//! Geometry, layout and pacing primitives for drawing tile grids on a 2D
//! surface: a generic `Vector2`, the `TileGrid` layout, a `FrameTimer` and a
//! CPU render target.

pub mod coords;
pub mod grid;
pub mod logging;
pub mod paint;
pub mod render;
pub mod time;
