//! Tile-grid layout.
//!
//! A `TileGrid` is computed once from a surface size, a grid shape and padding
//! options. It maps tile coordinates to integer pixel rectangles so that
//! neighbouring tiles share edges exactly: a tile's extent is the distance to
//! the next tile's origin, never an independently rounded tile size.

mod error;
mod tile_grid;

pub use error::TileGridError;
pub use tile_grid::{TileGrid, TileGridOptions};
