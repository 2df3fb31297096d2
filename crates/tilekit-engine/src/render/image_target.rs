use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

use crate::coords::{PixelRect, Vector2};
use crate::paint::Color;

use super::DrawTarget;

/// CPU surface backed by an RGBA8 image.
#[derive(Debug, Clone)]
pub struct ImageTarget {
    image: RgbaImage,
}

impl ImageTarget {
    /// Creates a `width` x `height` surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(background.to_rgba8())),
        }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn clear(&mut self, color: Color) {
        let px = Rgba(color.to_rgba8());
        self.image.pixels_mut().for_each(|p| *p = px);
    }

    /// Color at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Color::from_rgba8(p.0))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn bounds(&self) -> PixelRect {
        let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        PixelRect::new(0, 0, clamp(self.image.width()), clamp(self.image.height()))
    }

    /// Writes the surface to `path`; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image
            .save(path)
            .with_context(|| format!("failed to write surface to {}", path.display()))?;
        log::debug!(
            "saved {}x{} surface to {}",
            self.image.width(),
            self.image.height(),
            path.display()
        );
        Ok(())
    }
}

impl DrawTarget for ImageTarget {
    fn surface_size(&self) -> Vector2<u32> {
        Vector2::new(self.image.width(), self.image.height())
    }

    fn draw_filled_rect(&mut self, color: Color, rect: PixelRect) {
        let Some(clip) = rect.intersect(self.bounds()) else {
            return;
        };
        let px = Rgba(color.to_rgba8());
        // clip lies inside the image, so every coordinate is non-negative
        for p in clip.pixels() {
            self.image.put_pixel(p.x as u32, p.y as u32, px);
        }
    }
}
