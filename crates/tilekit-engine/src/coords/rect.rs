use super::{PixelPoint, Vector2};

/// Axis-aligned integer rectangle in pixels (top-left origin).
///
/// This is the shape handed to render targets when a tile is filled.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub origin: PixelPoint,
    pub size: PixelPoint,
}

impl PixelRect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            origin: Vector2::new(x, y),
            size: Vector2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: PixelPoint, size: PixelPoint) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> PixelPoint {
        self.origin
    }

    /// Exclusive bottom-right corner.
    #[inline]
    pub fn max(self) -> PixelPoint {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    #[inline]
    pub fn area(self) -> i64 {
        if self.is_empty() {
            0
        } else {
            i64::from(self.size.x) * i64::from(self.size.y)
        }
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0 {
            x += w;
            w = -w;
        }
        if h < 0 {
            y += h;
            h = -h;
        }

        PixelRect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: PixelPoint) -> bool {
        let r = self.normalized();
        p.all_ge(r.min()) && p.all_lt(r.max())
    }

    #[inline]
    pub fn intersect(self, other: PixelRect) -> Option<PixelRect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = a.max().x.min(b.max().x);
        let y1 = a.max().y.min(b.max().y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0 || h <= 0 {
            None
        } else {
            Some(PixelRect::new(x0, y0, w, h))
        }
    }

    /// Iterates every pixel position inside the rectangle, row by row.
    pub fn pixels(self) -> impl Iterator<Item = PixelPoint> {
        let r = self.normalized();
        (r.origin.y..r.max().y)
            .flat_map(move |y| (r.origin.x..r.max().x).map(move |x| Vector2::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: i32, h: i32) -> PixelRect {
        PixelRect::new(x, y, w, h)
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1, 2, 10, 20);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_extent() {
        let n = r(10, 10, -4, -3).normalized();
        assert_eq!(n, r(6, 7, 4, 3));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0, 0, 10, 10).contains(Vector2::new(0, 0)));
        assert!(r(0, 0, 10, 10).contains(Vector2::new(9, 9)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0, 0, 10, 10).contains(Vector2::new(10, 10)));
        assert!(!r(0, 0, 10, 10).contains(Vector2::new(10, 5)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        assert!(!r(3, 3, 0, 5).contains(Vector2::new(3, 3)));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let a = r(0, 0, 10, 10);
        let b = r(5, 5, 10, 10);
        assert_eq!(a.intersect(b), Some(r(5, 5, 5, 5)));
    }

    #[test]
    fn intersect_clips_to_bounds() {
        let bounds = r(0, 0, 100, 50);
        assert_eq!(r(-5, 40, 20, 20).intersect(bounds), Some(r(0, 40, 15, 10)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0, 0, 10, 10);
        let b = r(10, 0, 10, 10);
        assert!(a.intersect(b).is_none());
    }

    // ── pixels ────────────────────────────────────────────────────────────

    #[test]
    fn pixels_cover_area_row_major() {
        let rect = r(2, 3, 2, 2);
        let px: Vec<_> = rect.pixels().collect();
        assert_eq!(px.len() as i64, rect.area());
        assert_eq!(px[0], Vector2::new(2, 3));
        assert_eq!(px[1], Vector2::new(3, 3));
        assert_eq!(px[3], Vector2::new(3, 4));
    }
}
