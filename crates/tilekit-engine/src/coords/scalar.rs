use num_traits::Num;

/// Numeric component type of a [`Vector2`](super::Vector2).
///
/// Integers round to themselves. `floor_div` rounds the quotient toward negative
/// infinity for every type, so `-7.floor_div(2) == -4`.
pub trait Scalar: Copy + PartialOrd + Num {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn abs(self) -> Self;
    fn floor_div(self, rhs: Self) -> Self;
}

macro_rules! impl_scalar_signed {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn floor(self) -> Self {
                self
            }

            #[inline]
            fn ceil(self) -> Self {
                self
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn floor_div(self, rhs: Self) -> Self {
                let q = self / rhs;
                if self % rhs != 0 && ((self < 0) != (rhs < 0)) {
                    q - 1
                } else {
                    q
                }
            }
        }
    )*};
}

macro_rules! impl_scalar_unsigned {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn floor(self) -> Self {
                self
            }

            #[inline]
            fn ceil(self) -> Self {
                self
            }

            #[inline]
            fn abs(self) -> Self {
                self
            }

            #[inline]
            fn floor_div(self, rhs: Self) -> Self {
                self / rhs
            }
        }
    )*};
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn floor(self) -> Self {
                <$t>::floor(self)
            }

            #[inline]
            fn ceil(self) -> Self {
                <$t>::ceil(self)
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn floor_div(self, rhs: Self) -> Self {
                <$t>::floor(self / rhs)
            }
        }
    )*};
}

impl_scalar_signed!(i8, i16, i32, i64, isize);
impl_scalar_unsigned!(u8, u16, u32, u64, usize);
impl_scalar_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn floor_div_rounds_toward_negative_infinity() {
        assert_eq!(Scalar::floor_div(7i32, 2), 3);
        assert_eq!(Scalar::floor_div(-7i32, 2), -4);
        assert_eq!(Scalar::floor_div(7i32, -2), -4);
        assert_eq!(Scalar::floor_div(-7i32, -2), 3);
        assert_eq!(Scalar::floor_div(-6i32, 2), -3);
    }

    #[test]
    fn floor_div_on_floats_floors_the_quotient() {
        assert_eq!(Scalar::floor_div(7.5f64, 2.0), 3.0);
        assert_eq!(Scalar::floor_div(-7.5f64, 2.0), -4.0);
    }

    #[test]
    fn integer_rounding_is_identity() {
        assert_eq!(Scalar::floor(5u8), 5);
        assert_eq!(Scalar::ceil(-5i64), -5);
        assert_eq!(Scalar::abs(-5i16), 5);
    }
}
