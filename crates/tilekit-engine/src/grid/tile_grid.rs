use crate::coords::{PixelPoint, PixelRect, TilePoint, VecRange, Vector2};
use crate::paint::Color;
use crate::render::DrawTarget;

use super::TileGridError;

/// Layout options for [`TileGrid`].
///
/// Defaults: no padding, no offset, free aspect ratio, fractional tile sizes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TileGridOptions {
    /// Pixels left empty on every side of the surface.
    pub border_pad: Vector2<i32>,
    /// Pixels added to the centered grid origin.
    pub anchor_offset: Vector2<i32>,
    /// Use the smaller of the two tile dimensions for both.
    pub force_square: bool,
    /// Truncate the tile size to whole pixels, so every tile has the same size.
    pub force_integer_size: bool,
}

impl Default for TileGridOptions {
    fn default() -> Self {
        Self {
            border_pad: Vector2::ZERO,
            anchor_offset: Vector2::ZERO,
            force_square: false,
            force_integer_size: false,
        }
    }
}

impl TileGridOptions {
    pub fn border_pad(mut self, pad: Vector2<i32>) -> Self {
        self.border_pad = pad;
        self
    }

    pub fn anchor_offset(mut self, offset: Vector2<i32>) -> Self {
        self.anchor_offset = offset;
        self
    }

    pub fn force_square(mut self, b: bool) -> Self {
        self.force_square = b;
        self
    }

    pub fn force_integer_size(mut self, b: bool) -> Self {
        self.force_integer_size = b;
        self
    }
}

/// Fixed mapping from tile coordinates to pixel rectangles on a surface.
///
/// The grid is centered on the surface (after padding) and never re-laid out;
/// build a new one when the surface size changes.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    surface_size: Vector2<u32>,
    shape: TilePoint,
    /// Fractional tile size in pixels.
    tile_size: Vector2<f64>,
    /// Pixel position of tile (0, 0)'s upper-left corner.
    draw_anchor: Vector2<f64>,
}

impl TileGrid {
    /// Lays out a `shape` grid over the whole of `target`.
    pub fn new<D: DrawTarget + ?Sized>(
        target: &D,
        shape: TilePoint,
        options: TileGridOptions,
    ) -> Result<Self, TileGridError> {
        Self::with_surface_size(target.surface_size(), shape, options)
    }

    pub fn with_surface_size(
        surface_size: Vector2<u32>,
        shape: TilePoint,
        options: TileGridOptions,
    ) -> Result<Self, TileGridError> {
        let TileGridOptions {
            border_pad,
            anchor_offset,
            force_square,
            force_integer_size,
        } = options;

        if !border_pad.all_ge(0i32) {
            return Err(TileGridError::NegativeBorderPad { border_pad });
        }
        if !shape.all_gt(0i32) {
            return Err(TileGridError::NonPositiveShape { shape });
        }

        let surface_px = surface_size.astype::<i64>();
        let draw_px = surface_px - border_pad.astype::<i64>() * 2;
        if !draw_px.all_gt(0i64) {
            return Err(TileGridError::PaddingOccludesSurface {
                border_pad,
                surface_size,
            });
        }

        let mut tile_size = draw_px.astype::<f64>() / shape.astype::<f64>();
        if force_square {
            tile_size = Vector2::splat(tile_size.min());
        }
        if force_integer_size {
            tile_size = tile_size.map(f64::trunc);
        }

        let center = surface_px.floor_div(2i64).astype::<f64>();
        let draw_anchor =
            center - shape.astype::<f64>() * tile_size / 2.0 + anchor_offset.astype::<f64>();

        log::debug!(
            "tile grid {shape} over {surface_size} px: tile size {tile_size}, anchor {draw_anchor}"
        );

        Ok(Self {
            surface_size,
            shape,
            tile_size,
            draw_anchor,
        })
    }

    #[inline]
    pub fn shape(&self) -> TilePoint {
        self.shape
    }

    #[inline]
    pub fn tile_size(&self) -> Vector2<f64> {
        self.tile_size
    }

    #[inline]
    pub fn draw_anchor(&self) -> Vector2<f64> {
        self.draw_anchor
    }

    #[inline]
    pub fn surface_size(&self) -> Vector2<u32> {
        self.surface_size
    }

    /// Whether `pos` is one of the grid's tiles.
    #[inline]
    pub fn contains_tile(&self, pos: TilePoint) -> bool {
        pos.all_ge(0i32) && pos.all_lt(self.shape)
    }

    /// Every tile position, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = TilePoint> + use<> {
        let cols = self.shape.x as usize;
        let rows = self.shape.y as usize;
        VecRange::new(TilePoint::ZERO, TilePoint::DOWN, rows)
            .flat_map(move |row| VecRange::new(row, TilePoint::RIGHT, cols))
    }

    /// Upper-left pixel of tile `pos`.
    ///
    /// Positions outside the grid are not rejected; they extrapolate the layout.
    #[inline]
    pub fn tile_origin_px(&self, pos: TilePoint) -> PixelPoint {
        self.floored_origin(pos.astype::<f64>()).astype::<i32>()
    }

    fn floored_origin(&self, pos: Vector2<f64>) -> Vector2<f64> {
        (self.draw_anchor + self.tile_size * pos).floor()
    }

    /// Pixel size of tile `pos`: the distance to the next tile's origin.
    ///
    /// Sizes may differ by one pixel across the grid, but adjacent tiles never
    /// gap or overlap.
    #[inline]
    pub fn tile_extent_px(&self, pos: TilePoint) -> PixelPoint {
        self.tile_origin_and_extent_px(pos).1
    }

    pub fn tile_origin_and_extent_px(&self, pos: TilePoint) -> (PixelPoint, PixelPoint) {
        // Stepping in f64 keeps positions at the edge of `i32` from overflowing.
        let pos = pos.astype::<f64>();
        let origin = self.floored_origin(pos);
        let next = self.floored_origin(pos + 1.0);
        (origin.astype::<i32>(), (next - origin).astype::<i32>())
    }

    #[inline]
    pub fn tile_rect_px(&self, pos: TilePoint) -> PixelRect {
        let (origin, extent) = self.tile_origin_and_extent_px(pos);
        PixelRect::from_origin_size(origin, extent)
    }

    /// Tile whose rectangle contains pixel `px`, if it is inside the grid.
    pub fn tile_at_px(&self, px: PixelPoint) -> Option<TilePoint> {
        // Zero-width tiles cover no pixels.
        if !self.tile_size.all_gt(0.0f64) {
            return None;
        }

        let estimate = ((px.astype::<f64>() - self.draw_anchor) / self.tile_size)
            .floor()
            .astype::<i32>();
        // One tile past either edge is already a miss.
        let mut tile = estimate.bound(Some(-1i32), Some(self.shape));

        // The estimate ignores the per-tile rounding and can be off by one.
        for _ in 0..2 {
            let rect = self.tile_rect_px(tile);
            let step = Vector2::new(
                axis_step(px.x, rect.min().x, rect.max().x),
                axis_step(px.y, rect.min().y, rect.max().y),
            );
            if step == TilePoint::ZERO {
                break;
            }
            tile += step;
        }

        (self.contains_tile(tile) && self.tile_rect_px(tile).contains(px)).then_some(tile)
    }

    /// Paints tile `pos` on `target`.
    pub fn fill_tile<D: DrawTarget + ?Sized>(&self, target: &mut D, pos: TilePoint, color: Color) {
        target.draw_filled_rect(color, self.tile_rect_px(pos));
    }

    /// Paints every tile of the grid on `target`.
    pub fn fill_all<D: DrawTarget + ?Sized>(&self, target: &mut D, color: Color) {
        for pos in self.tiles() {
            self.fill_tile(target, pos, color);
        }
    }
}

fn axis_step(p: i32, start: i32, end: i32) -> i32 {
    if p < start {
        -1
    } else if p >= end {
        1
    } else {
        0
    }
}
