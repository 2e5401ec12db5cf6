//! Core functionality of the `glimmer` project.
//!
//! A small math library with generic 2D/3D vectors and a column-major 4x4
//! matrix, with the transforms needed to draw a rotating cube through a
//! programmable graphics pipeline: translation, scaling, axis and
//! axis-angle rotation, and frustum/perspective projection. The [`render`]
//! module adds backend-agnostic glue on top: a camera projection that
//! follows the window size, a model transform, a vertex layout, and a
//! uniform-upload seam.
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available any floating-point functions not included in `core`.
//!   In particular this means trigonometric functions, which are needed by
//!   the rotation and projection constructors. Enabled by default.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! * `bytemuck`:
//!   Implements [`Pod`](https://docs.rs/bytemuck) for matrices, vectors, and
//!   vertices, so they can be handed to a graphics API as raw bytes.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
extern crate alloc;

pub mod math;
pub mod render;

pub mod prelude {
    #[cfg(feature = "fp")]
    pub use crate::math::mat::{perspective, rotate, rotate_x, rotate_y, rotate_z};
    pub use crate::math::{
        angle::{Angle, deg_to_rad, degs, rads, turns},
        mat::{Mat4, frustum, scale, translate, transpose, uniform_scale},
        scalar::{Real, Scalar},
        vec::{
            Vec2, Vec2f, Vec2i, Vec3, Vec3f, Vec3i, Vec4, Vec4f, vec2, vec3,
            vec4,
        },
    };

    pub use crate::render::{
        FrameUniforms, Transform,
        cam::{Fov, Projection},
        model::{Model, Spin},
        uniform::{Uniform, UniformSink},
        vertex::{Vertex, vertex},
    };
}
