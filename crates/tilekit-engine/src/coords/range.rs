use core::iter::FusedIterator;
use core::ops::Add;

use super::Vector2;

/// Arithmetic progression of vectors: `start, start + delta, start + 2 * delta, ...`
/// with exactly `max_iters` items.
///
/// Like `std::ops::Range`, the range is its own iterator. Consuming it advances
/// its position for good; iterate a clone to walk the same progression again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecRange<T> {
    pos: Vector2<T>,
    delta: Vector2<T>,
    remaining: usize,
}

impl<T> VecRange<T> {
    #[inline]
    pub const fn new(start: Vector2<T>, delta: Vector2<T>, max_iters: usize) -> Self {
        Self {
            pos: start,
            delta,
            remaining: max_iters,
        }
    }

    #[inline]
    pub fn delta(&self) -> &Vector2<T> {
        &self.delta
    }
}

impl<T: Copy + Add<Output = T>> Iterator for VecRange<T> {
    type Item = Vector2<T>;

    fn next(&mut self) -> Option<Vector2<T>> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.pos;
        self.remaining -= 1;
        // Skip the step past the last item; it could overflow integer components.
        if self.remaining > 0 {
            self.pos = self.pos + self.delta;
        }
        Some(current)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Copy + Add<Output = T>> ExactSizeIterator for VecRange<T> {}

impl<T: Copy + Add<Output = T>> FusedIterator for VecRange<T> {}
