use std::{
    fmt,
    ops::{Add, AddAssign, Deref, DerefMut, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};

use super::{scalar::Scalar, vec2::Vec2};
use crate::error::{Result, Vec4Error};

pub type Float4 = Vec4<f32>;
pub type Int4 = Vec4<i32>;
pub type SizeT4 = Vec4<usize>;

/// Four components read as a vector, as a rectangle or as an origin/size pair.
///
/// All three readings share one `[T; 4]`. The axis view is reachable through `Deref`, so
/// `v.x` and `v.w` work directly; the rectangle and origin/size views are borrowed with
/// [`Vec4::as_rect`] and [`Vec4::as_origin_size`]. `z`/`w` double as `width`/`height`.
#[repr(transparent)]
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vec4<T: Scalar> {
    data: [T; 4],
}

/// Axis view: `x, y, z, w`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyzw<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// Rectangle view: `left, bottom, right, top`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ltrb<T: Scalar> {
    pub left: T,
    pub bottom: T,
    pub right: T,
    pub top: T,
}

/// Composite view: `origin` over `x, y` and `size` over `z, w`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OriginSize<T: Scalar> {
    pub origin: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T: Scalar> Vec4<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Self { data: [x, y, width, height] }
    }

    /// Sets every component to `s`.
    pub fn splat(s: T) -> Self {
        Self { data: [s; 4] }
    }

    pub fn from_origin_size(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// Exact pairwise comparison of all four components.
    pub fn equals(&self, other: &Self) -> bool {
        self.data[0] == other.data[0]
            && self.data[1] == other.data[1]
            && self.data[2] == other.data[2]
            && self.data[3] == other.data[3]
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.data.get_mut(i)
    }

    pub fn as_array(&self) -> &[T; 4] {
        &self.data
    }

    pub fn as_array_mut(&mut self) -> &mut [T; 4] {
        &mut self.data
    }

    pub fn to_array(self) -> [T; 4] {
        self.data
    }
}

// Views. `Xyzw`, `Ltrb` and `OriginSize` are `repr(C)` over four `T` (or two `repr(C)` pairs of
// `T`), so they share size, alignment and field offsets with `[T; 4]`.
impl<T: Scalar> Vec4<T> {
    pub fn as_xyzw(&self) -> &Xyzw<T> {
        unsafe { &*(self as *const Self).cast::<Xyzw<T>>() }
    }

    pub fn as_xyzw_mut(&mut self) -> &mut Xyzw<T> {
        unsafe { &mut *(self as *mut Self).cast::<Xyzw<T>>() }
    }

    pub fn as_rect(&self) -> &Ltrb<T> {
        unsafe { &*(self as *const Self).cast::<Ltrb<T>>() }
    }

    pub fn as_rect_mut(&mut self) -> &mut Ltrb<T> {
        unsafe { &mut *(self as *mut Self).cast::<Ltrb<T>>() }
    }

    pub fn as_origin_size(&self) -> &OriginSize<T> {
        unsafe { &*(self as *const Self).cast::<OriginSize<T>>() }
    }

    pub fn as_origin_size_mut(&mut self) -> &mut OriginSize<T> {
        unsafe { &mut *(self as *mut Self).cast::<OriginSize<T>>() }
    }

    pub fn origin(&self) -> Vec2<T> {
        self.as_origin_size().origin
    }

    pub fn size(&self) -> Vec2<T> {
        self.as_origin_size().size
    }

    pub fn set_origin(&mut self, origin: Vec2<T>) {
        self.as_origin_size_mut().origin = origin;
    }

    pub fn set_size(&mut self, size: Vec2<T>) {
        self.as_origin_size_mut().size = size;
    }

    pub fn width(&self) -> T {
        self.data[2]
    }

    pub fn height(&self) -> T {
        self.data[3]
    }

    pub fn width_mut(&mut self) -> &mut T {
        &mut self.data[2]
    }

    pub fn height_mut(&mut self) -> &mut T {
        &mut self.data[3]
    }
}

// Rectangle operations. None of these reorder the edges: callers keep `left <= right` and
// `bottom <= top` for `merge` and `contains` to be meaningful.
impl<T: Scalar> Vec4<T> {
    #[inline]
    pub fn min_x(&self) -> T {
        self.as_rect().left
    }

    #[inline]
    pub fn max_x(&self) -> T {
        self.as_rect().right
    }

    #[inline]
    pub fn min_y(&self) -> T {
        self.as_rect().bottom
    }

    #[inline]
    pub fn max_y(&self) -> T {
        self.as_rect().top
    }

    /// Grows this rectangle in place to the smallest one covering both `self` and `other`.
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        let other = *other.as_rect();
        let rect = self.as_rect_mut();

        rect.left = partial_min(rect.left, other.left);
        rect.bottom = partial_min(rect.bottom, other.bottom);
        rect.right = partial_max(rect.right, other.right);
        rect.top = partial_max(rect.top, other.top);

        self
    }

    /// Checks if a point lies within the rectangle, edges included.
    pub fn contains(&self, point: Vec2<T>) -> bool {
        let rect = self.as_rect();
        let within_x = point.x >= rect.left && point.x <= rect.right;
        let within_y = point.y >= rect.bottom && point.y <= rect.top;
        within_x && within_y
    }
}

#[inline]
fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline]
fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

impl<T: Scalar> Deref for Vec4<T> {
    type Target = Xyzw<T>;

    fn deref(&self) -> &Xyzw<T> {
        self.as_xyzw()
    }
}

impl<T: Scalar> DerefMut for Vec4<T> {
    fn deref_mut(&mut self) -> &mut Xyzw<T> {
        self.as_xyzw_mut()
    }
}

impl<T: Scalar> PartialEq for Vec4<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Scalar + Eq> Eq for Vec4<T> {}

impl<T: Scalar + fmt::Debug> fmt::Debug for Vec4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec4")
            .field("x", &self.data[0])
            .field("y", &self.data[1])
            .field("z", &self.data[2])
            .field("w", &self.data[3])
            .finish()
    }
}

/// Panics when `i >= 4`; use [`Vec4::get`] for a checked lookup.
impl<T: Scalar> Index<usize> for Vec4<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Scalar> IndexMut<usize> for Vec4<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Scalar> From<[T; 4]> for Vec4<T> {
    fn from(data: [T; 4]) -> Self {
        Self { data }
    }
}

impl<T: Scalar> From<(T, T, T, T)> for Vec4<T> {
    fn from((x, y, z, w): (T, T, T, T)) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T: Scalar> From<Vec4<T>> for [T; 4] {
    fn from(v: Vec4<T>) -> [T; 4] {
        v.data
    }
}

impl<T: Scalar> TryFrom<&[T]> for Vec4<T> {
    type Error = Vec4Error;

    fn try_from(slice: &[T]) -> Result<Self> {
        let data = <[T; 4]>::try_from(slice).map_err(|_| Vec4Error::LengthMismatch {
            expected: 4,
            found: slice.len(),
        })?;

        Ok(Self { data })
    }
}

macro_rules! impl_vec4_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Scalar> $OpAssign for Vec4<T> {
            fn $op_assign(&mut self, other: Vec4<T>) {
                for (a, b) in self.data.iter_mut().zip(other.data) {
                    a.$op_assign(b);
                }
            }
        }

        impl<T: Scalar> $OpAssign<T> for Vec4<T> {
            fn $op_assign(&mut self, s: T) {
                for a in self.data.iter_mut() {
                    a.$op_assign(s);
                }
            }
        }

        impl<T: Scalar> $Op for Vec4<T> {
            type Output = Vec4<T>;

            fn $op(mut self, other: Vec4<T>) -> Vec4<T> {
                self.$op_assign(other);
                self
            }
        }

        impl<T: Scalar> $Op<T> for Vec4<T> {
            type Output = Vec4<T>;

            fn $op(mut self, s: T) -> Vec4<T> {
                self.$op_assign(s);
                self
            }
        }
    };
}

impl_vec4_op!(Add, add, AddAssign, add_assign);
impl_vec4_op!(Sub, sub, SubAssign, sub_assign);
impl_vec4_op!(Mul, mul, MulAssign, mul_assign);
impl_vec4_op!(Div, div, DivAssign, div_assign);

/// `f / v` per component, see [`Scalar::div_from_f32`].
///
/// `f64` components divide in `f64`. For integer `T` the quotient is computed in `f32` and
/// truncates toward zero, and a zero component produces a saturated value instead of a
/// division fault.
impl<T: Scalar> Div<Vec4<T>> for f32 {
    type Output = Vec4<T>;

    fn div(self, v: Vec4<T>) -> Vec4<T> {
        Vec4 {
            data: v.data.map(|c| T::div_from_f32(self, c)),
        }
    }
}
