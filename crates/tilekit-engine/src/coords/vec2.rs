use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use std::fmt;

use num_traits::{AsPrimitive, One, Zero};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ComponentIndexError, Scalar};

/// 2-component vector used for tile coordinates, pixel positions and sizes.
///
/// Arithmetic is component-wise and accepts either another vector or a scalar,
/// which is broadcast to both components. The relational comparisons
/// (`all_lt`, `all_le`, `all_gt`, `all_ge`) are conjunctive: `a.all_lt(b)` holds
/// only when `a.x < b.x` and `a.y < b.y`. That is not a total or lexicographic
/// order, which is why `Vector2` does not implement `PartialOrd`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn splat(v: T) -> Self
    where
        T: Copy,
    {
        Self { x: v, y: v }
    }

    #[inline]
    pub fn into_tuple(self) -> (T, T) {
        (self.x, self.y)
    }

    #[inline]
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Returns component `index` (0 is x, 1 is y).
    pub fn get(&self, index: usize) -> Result<T, ComponentIndexError>
    where
        T: Copy,
    {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(ComponentIndexError { index }),
        }
    }

    /// Overwrites component `index` in place.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ComponentIndexError> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(ComponentIndexError { index }),
        }
        Ok(())
    }

    /// Yields x then y. Each call starts a fresh pass.
    #[inline]
    pub fn iter(&self) -> core::array::IntoIter<T, 2>
    where
        T: Copy,
    {
        [self.x, self.y].into_iter()
    }

    #[inline]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Vector2<U> {
        Vector2::new(f(self.x), f(self.y))
    }

    #[inline]
    pub fn zip_map<U, R>(self, other: Vector2<U>, mut f: impl FnMut(T, U) -> R) -> Vector2<R> {
        Vector2::new(f(self.x, other.x), f(self.y, other.y))
    }
}

impl<T: Zero> Vector2<T> {
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T: One> Vector2<T> {
    #[inline]
    pub fn one() -> Self {
        Self::new(T::one(), T::one())
    }
}

impl Vector2<i32> {
    pub const ZERO: Self = Self::new(0, 0);
    pub const ONE: Self = Self::new(1, 1);

    pub const DOWN: Self = Self::new(0, 1);
    pub const UP: Self = Self::new(0, -1);
    pub const LEFT: Self = Self::new(-1, 0);
    pub const RIGHT: Self = Self::new(1, 0);
}

// ── comparisons ───────────────────────────────────────────────────────────

impl<T: PartialOrd> Vector2<T> {
    #[inline]
    pub fn all_lt(&self, rhs: impl Into<Vector2<T>>) -> bool {
        let rhs: Vector2<T> = rhs.into();
        self.x < rhs.x && self.y < rhs.y
    }

    #[inline]
    pub fn all_le(&self, rhs: impl Into<Vector2<T>>) -> bool {
        let rhs: Vector2<T> = rhs.into();
        self.x <= rhs.x && self.y <= rhs.y
    }

    #[inline]
    pub fn all_gt(&self, rhs: impl Into<Vector2<T>>) -> bool {
        let rhs: Vector2<T> = rhs.into();
        self.x > rhs.x && self.y > rhs.y
    }

    #[inline]
    pub fn all_ge(&self, rhs: impl Into<Vector2<T>>) -> bool {
        let rhs: Vector2<T> = rhs.into();
        self.x >= rhs.x && self.y >= rhs.y
    }

    /// Smaller component. Ties return `x`.
    #[inline]
    pub fn min(self) -> T {
        if self.x <= self.y { self.x } else { self.y }
    }

    /// Larger component. Ties return `x`; `y` wins only when strictly larger.
    #[inline]
    pub fn max(self) -> T {
        if self.x < self.y { self.y } else { self.x }
    }
}

#[inline]
fn lesser<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline]
fn greater<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

impl<T: PartialOrd + Copy> Vector2<T> {
    /// Component-wise `(min, max)` of two vectors.
    #[inline]
    pub fn minmax(a: Vector2<T>, b: Vector2<T>) -> (Vector2<T>, Vector2<T>) {
        (
            Vector2::new(lesser(a.x, b.x), lesser(a.y, b.y)),
            Vector2::new(greater(a.x, b.x), greater(a.y, b.y)),
        )
    }

    /// Whether `self` lies in the closed box spanned by two opposite corners,
    /// given in either order.
    pub fn in_rect(&self, corner_1: Vector2<T>, corner_2: Vector2<T>) -> bool {
        let (lo, hi) = Vector2::minmax(corner_1, corner_2);
        self.all_ge(lo) && self.all_le(hi)
    }

    /// Clamps each component against optional lower and upper bounds.
    ///
    /// Either bound may be a vector or a scalar. The lower bound is applied
    /// first, so an inverted pair resolves to `max`.
    pub fn bound<L, U>(self, min: Option<L>, max: Option<U>) -> Self
    where
        L: Into<Vector2<T>>,
        U: Into<Vector2<T>>,
    {
        let mut ret = self;
        if let Some(min) = min {
            ret = ret.bound_min(min);
        }
        if let Some(max) = max {
            ret = ret.bound_max(max);
        }
        ret
    }

    #[inline]
    pub fn bound_min(self, min: impl Into<Vector2<T>>) -> Self {
        let min: Vector2<T> = min.into();
        Vector2::new(greater(self.x, min.x), greater(self.y, min.y))
    }

    #[inline]
    pub fn bound_max(self, max: impl Into<Vector2<T>>) -> Self {
        let max: Vector2<T> = max.into();
        Vector2::new(lesser(self.x, max.x), lesser(self.y, max.y))
    }
}

// ── rounding and conversion ───────────────────────────────────────────────

impl<T: Scalar> Vector2<T> {
    #[inline]
    pub fn abs(self) -> Self {
        self.map(Scalar::abs)
    }

    #[inline]
    pub fn floor(self) -> Self {
        self.map(Scalar::floor)
    }

    #[inline]
    pub fn ceil(self) -> Self {
        self.map(Scalar::ceil)
    }

    /// Component-wise division rounded toward negative infinity.
    #[inline]
    pub fn floor_div(self, rhs: impl Into<Vector2<T>>) -> Self {
        let rhs: Vector2<T> = rhs.into();
        self.zip_map(rhs, Scalar::floor_div)
    }
}

impl<T: Copy + 'static> Vector2<T> {
    /// Converts both components with `as` semantics: float to integer truncates
    /// toward zero and saturates at the target's range.
    #[inline]
    pub fn astype<U>(self) -> Vector2<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Vector2::new(self.x.as_(), self.y.as_())
    }
}

// ── conversions ───────────────────────────────────────────────────────────

impl<T: Copy> From<T> for Vector2<T> {
    #[inline]
    fn from(v: T) -> Self {
        Self::splat(v)
    }
}

impl<T> From<(T, T)> for Vector2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> IntoIterator for Vector2<T> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, 2>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        [self.x, self.y].into_iter()
    }
}

impl<T> Index<usize> for Vector2<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("{}", ComponentIndexError { index }),
        }
    }
}

impl<T> IndexMut<usize> for Vector2<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("{}", ComponentIndexError { index }),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── arithmetic ────────────────────────────────────────────────────────────

macro_rules! impl_binary_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: $Op<Output = T>> $Op for Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op(self, rhs: Vector2<T>) -> Vector2<T> {
                Vector2::new(self.x.$op(rhs.x), self.y.$op(rhs.y))
            }
        }

        impl<T: $Op<Output = T> + Copy> $Op<T> for Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op(self, rhs: T) -> Vector2<T> {
                Vector2::new(self.x.$op(rhs), self.y.$op(rhs))
            }
        }

        impl<T: $OpAssign> $OpAssign for Vector2<T> {
            #[inline]
            fn $op_assign(&mut self, rhs: Vector2<T>) {
                self.x.$op_assign(rhs.x);
                self.y.$op_assign(rhs.y);
            }
        }

        impl<T: $OpAssign + Copy> $OpAssign<T> for Vector2<T> {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                self.x.$op_assign(rhs);
                self.y.$op_assign(rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);
impl_binary_op!(Div, div, DivAssign, div_assign);

impl<T: Neg<Output = T>> Neg for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn neg(self) -> Vector2<T> {
        Vector2::new(-self.x, -self.y)
    }
}
