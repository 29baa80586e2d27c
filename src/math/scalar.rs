use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Numeric component type usable inside [`Vec2`](super::vec2::Vec2) and [`Vec4`](super::vec4::Vec4).
///
/// `div_from_f32` divides in the wider of `f32` and `Self`, then casts with `as`: integer
/// results truncate toward zero and saturate at the type bounds (NaN becomes zero).
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Computes `f / c`.
    fn div_from_f32(f: f32, c: Self) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn div_from_f32(f: f32, c: Self) -> Self {
                    (f / c as f32) as $t
                }
            }
        )*
    };
}

impl_scalar!(f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Scalar for f64 {
    #[inline]
    fn div_from_f32(f: f32, c: Self) -> Self {
        f as f64 / c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_quotient_truncates() {
        assert_eq!(i32::div_from_f32(5.8, 2), 2);
        assert_eq!(i32::div_from_f32(-5.8, 2), -2);
        assert_eq!(usize::div_from_f32(1.0, 2), 0);
    }

    #[test]
    fn integer_quotient_saturates() {
        assert_eq!(i32::div_from_f32(1.0, 0), i32::MAX);
        assert_eq!(i32::div_from_f32(-1.0, 0), i32::MIN);
        assert_eq!(usize::div_from_f32(-1.0, 1), 0);
        assert_eq!(i32::div_from_f32(0.0, 0), 0);
    }

    #[test]
    fn float_quotient_keeps_precision() {
        assert_eq!(f32::div_from_f32(1.0, 4.0), 0.25);
        assert_eq!(f64::div_from_f32(1.0, 3.0), 1.0 / 3.0);
        assert_ne!(f64::div_from_f32(1.0, 3.0), (1.0f32 / 3.0) as f64);
    }
}
