use tilekit_engine::coords::{TilePoint, VecRange};
use tilekit_engine::grid::TileGrid;
use tilekit_engine::paint::Color;
use tilekit_engine::render::DrawTarget;

/// Tile colors of the demo scene.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub light: Color,
    pub dark: Color,
    pub marker: Color,
    pub trail: Color,
}

/// Checkerboard with a marker that sweeps the grid row by row, alternating
/// direction, and leaves a fading trail.
pub struct Scene {
    grid: TileGrid,
    path: Vec<TilePoint>,
    palette: Palette,
    trail_len: usize,
}

impl Scene {
    pub fn new(grid: TileGrid, palette: Palette, trail_len: usize) -> Self {
        let path = serpentine_path(grid.shape());
        // a trail as long as the path would paint over the marker
        let trail_len = trail_len.min(path.len().saturating_sub(1));
        Self {
            grid,
            path,
            palette,
            trail_len,
        }
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Marker tile on `frame`; the path loops forever.
    pub fn marker_at(&self, frame: usize) -> TilePoint {
        self.path[frame % self.path.len()]
    }

    pub fn draw<D: DrawTarget + ?Sized>(&self, target: &mut D, frame: usize) {
        let Palette {
            light,
            dark,
            marker,
            trail,
        } = self.palette;
        let pos = self.marker_at(frame);

        // tint the marker's 3x3 neighbourhood, clipped to the grid
        let lo = (pos - 1i32).bound_min(0i32);
        let hi = (pos + 1i32).bound_max(self.grid.shape() - 1i32);

        for tile in self.grid.tiles() {
            let mut color = if (tile.x + tile.y) % 2 == 0 { light } else { dark };
            if tile.in_rect(lo, hi) {
                color = color.lerp(marker, 0.25);
            }
            self.grid.fill_tile(target, tile, color);
        }

        let visible = self.trail_len.min(frame);
        for age in (1..=visible).rev() {
            let fade = age as f32 / (self.trail_len + 1) as f32;
            let color = trail.lerp(light, fade);
            self.grid.fill_tile(target, self.marker_at(frame - age), color);
        }

        self.grid.fill_tile(target, pos, marker);
    }
}

/// Visits every tile once: left to right on even rows, right to left on odd rows.
pub fn serpentine_path(shape: TilePoint) -> Vec<TilePoint> {
    let cols = shape.x.max(0) as usize;
    let rows = shape.y.max(0) as usize;
    let last_col = TilePoint::RIGHT * (shape.x - 1);

    VecRange::new(TilePoint::ZERO, TilePoint::DOWN, rows)
        .flat_map(|row_start| {
            if row_start.y % 2 == 0 {
                VecRange::new(row_start, TilePoint::RIGHT, cols)
            } else {
                VecRange::new(row_start + last_col, TilePoint::LEFT, cols)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tilekit_engine::coords::Vector2;
    use tilekit_engine::grid::TileGridOptions;
    use tilekit_engine::render::ImageTarget;

    use super::*;

    fn palette() -> Palette {
        Palette {
            light: Color::WHITE,
            dark: Color::BLACK,
            marker: Color::RED,
            trail: Color::BLUE,
        }
    }

    fn scene(trail_len: usize) -> (Scene, ImageTarget) {
        let target = ImageTarget::new(80, 40, Color::TRANSPARENT);
        let grid = TileGrid::new(&target, Vector2::new(8, 4), TileGridOptions::default()).unwrap();
        (Scene::new(grid, palette(), trail_len), target)
    }

    fn color_at_tile(scene: &Scene, target: &ImageTarget, tile: TilePoint) -> Option<Color> {
        let origin = scene.grid().tile_origin_px(tile);
        target.pixel(origin.x as u32, origin.y as u32)
    }

    #[test]
    fn serpentine_path_visits_every_tile_once() {
        let path = serpentine_path(Vector2::new(5, 3));
        assert_eq!(path.len(), 15);
        let unique: HashSet<_> = path.iter().copied().collect();
        assert_eq!(unique.len(), 15);
        assert_eq!(path[4], Vector2::new(4, 0));
        assert_eq!(path[5], Vector2::new(4, 1));
        assert_eq!(path[9], Vector2::new(0, 1));
    }

    #[test]
    fn serpentine_path_moves_one_tile_per_step() {
        let path = serpentine_path(Vector2::new(4, 4));
        for pair in path.windows(2) {
            let step = (pair[1] - pair[0]).abs();
            assert_eq!(step.x + step.y, 1, "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn marker_loops_over_the_path() {
        let (scene, _) = scene(0);
        assert_eq!(scene.marker_at(0), Vector2::new(0, 0));
        assert_eq!(scene.marker_at(32), Vector2::new(0, 0));
        assert_eq!(scene.marker_at(8), Vector2::new(7, 1));
    }

    #[test]
    fn draw_paints_marker_and_trail() {
        let (scene, mut target) = scene(2);
        scene.draw(&mut target, 3);

        assert_eq!(color_at_tile(&scene, &target, Vector2::new(3, 0)), Some(Color::RED));
        let trail = color_at_tile(&scene, &target, Vector2::new(2, 0)).unwrap();
        assert_ne!(trail, Color::WHITE);
        assert_ne!(trail, Color::BLACK);
        // far from the marker: plain checkerboard
        assert_eq!(color_at_tile(&scene, &target, Vector2::new(7, 3)), Some(Color::WHITE));
        assert_eq!(color_at_tile(&scene, &target, Vector2::new(6, 3)), Some(Color::BLACK));
    }

    #[test]
    fn neighbourhood_is_tinted() {
        let (scene, mut target) = scene(0);
        scene.draw(&mut target, 0);
        let tinted = color_at_tile(&scene, &target, Vector2::new(1, 1)).unwrap();
        assert_eq!(tinted, Color::WHITE.lerp(Color::RED, 0.25));
    }

    #[test]
    fn trail_is_capped_below_path_length() {
        let target = ImageTarget::new(10, 10, Color::BLACK);
        let grid = TileGrid::new(&target, Vector2::new(1, 2), TileGridOptions::default()).unwrap();
        let scene = Scene::new(grid, palette(), 10);
        assert_eq!(scene.trail_len, 1);
    }
}
