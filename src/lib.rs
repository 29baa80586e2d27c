pub mod error;
pub mod math;

pub use error::Vec4Error;
pub use math::{
    scalar::Scalar,
    vec2::{Float2, Int2, SizeT2, Vec2},
    vec4::{Float4, Int4, Ltrb, OriginSize, SizeT4, Vec4, Xyzw},
};
