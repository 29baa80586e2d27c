use serde::{Deserialize, Serialize};

use super::scalar::Scalar;

pub type Float2 = Vec2<f32>;
pub type Int2 = Vec2<i32>;
pub type SizeT2 = Vec2<usize>;

/// A pair of components, used as a point or as an extent.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vec2<T: Scalar> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vec2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> From<[T; 2]> for Vec2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> From<Vec2<T>> for (T, T) {
    fn from(v: Vec2<T>) -> (T, T) {
        (v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(Int2::default(), Int2::new(0, 0));
    }

    #[test]
    fn from_tuple_and_array() {
        assert_eq!(Float2::from((1.0, 2.0)), Float2::new(1.0, 2.0));
        assert_eq!(SizeT2::from([3, 4]), SizeT2::new(3, 4));
        assert_eq!(<(i32, i32)>::from(Int2::new(5, 6)), (5, 6));
    }

    #[test]
    fn integer_pairs_are_eq() {
        fn is_eq<T: Eq>(a: &T, b: &T) -> bool {
            a == b
        }

        assert!(is_eq(&Int2::new(1, 2), &Int2::new(1, 2)));
        assert!(!is_eq(&SizeT2::new(1, 2), &SizeT2::new(2, 1)));
    }
}
