//! Linear algebra and other useful mathematics.
//!
//! Includes generic [vectors][self::vec], a single-precision 4x4
//! [matrix][mat] with the usual transform constructors, strongly typed
//! [angles][angle], as well as utilities such as approximate equality
//! comparisons.
//!
//! Vectors are generic over their element type, which may be any signed
//! integer or floating-point primitive (see [`Scalar`]). Operations that
//! only make sense for real numbers, such as normalization, are restricted
//! to floating-point elements at compile time (see [`Real`]).
//!
//! Matrices are stored in column-major order, matching what OpenGL-style
//! uniform upload expects, but are *constructed* from rows so that literals
//! in the source read like matrices written on paper.

pub use {
    angle::{Angle, deg_to_rad, degs, rads, turns},
    approx::ApproxEq,
    mat::{Mat4, frustum, scale, translate, transpose, uniform_scale},
    scalar::{Real, Scalar},
    vec::{Vec2, Vec2f, Vec2i, Vec3, Vec3f, Vec3i, Vec4, Vec4f, vec2, vec3, vec4},
};
#[cfg(feature = "fp")]
pub use mat::{perspective, rotate, rotate_x, rotate_y, rotate_z};

pub mod angle;
pub mod approx;
pub mod float;
pub mod mat;
pub mod scalar;
pub mod vec;
