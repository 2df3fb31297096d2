//! Render targets.
//!
//! The grid never touches pixels itself; it hands filled rectangles to a
//! `DrawTarget`. `ImageTarget` is the CPU implementation backed by an RGBA8
//! image buffer.
//!
//! Convention:
//! - Pixel coordinates are integers, top-left origin, +Y down.
//! - Rectangles that fall partly outside the surface are clipped by the target.

mod image_target;
mod target;

pub use image_target::ImageTarget;
pub use target::DrawTarget;
