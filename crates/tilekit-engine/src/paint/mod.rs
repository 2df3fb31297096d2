//! Paint model shared between the grid and render targets.
//!
//! Colors are straight-alpha sRGB bytes, the format CPU surfaces store.

pub mod color;

pub use color::Color;
