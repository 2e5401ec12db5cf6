//! Backend-agnostic glue between the math library and a graphics API.
//!
//! This module contains the pieces a frame loop needs on the CPU side:
//! a [camera projection][cam] that follows the window size, [model
//! transforms][model], the [vertex layout][vertex] of the built-in meshes,
//! and the [uniform upload][uniform] seam through which matrices reach the
//! shaders. Creating windows, compiling shaders, and owning GPU resources
//! is left to the caller.

use crate::math::{Mat4, Vec2i};

use cam::Projection;
use uniform::{Uniform, UniformSink};

pub mod cam;
pub mod model;
pub mod uniform;
pub mod vertex;

/// Trait for values that can be turned into a transform matrix.
pub trait Transform {
    /// Returns the matrix corresponding to `self`.
    fn to_matrix(&self) -> Mat4;
}

/// The transform matrices of one frame, as sent to the shaders.
///
/// A vertex in model space is transformed to clip space by
/// `projection * view * model`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameUniforms {
    /// View-to-clip transform.
    pub projection: Mat4,
    /// World-to-view transform.
    pub view: Mat4,
    /// Model-to-world transform.
    pub model: Mat4,
}

impl FrameUniforms {
    /// The uniform name of the projection matrix.
    pub const PROJECTION: &'static str = "projection";
    /// The uniform name of the view matrix.
    pub const VIEW: &'static str = "view";
    /// The uniform name of the model matrix.
    pub const MODEL: &'static str = "model";

    /// Creates frame uniforms from the three transforms.
    pub fn new(projection: Mat4, view: Mat4, model: Mat4) -> Self {
        Self { projection, view, model }
    }

    /// Creates frame uniforms for drawing `model` with a camera at the
    /// origin looking down the negative z axis, into a viewport of size
    /// `dims`.
    pub fn frame(
        proj: &Projection,
        dims: Vec2i,
        model: &impl Transform,
    ) -> Self {
        Self::new(proj.matrix(dims), Mat4::IDENTITY, model.to_matrix())
    }

    /// Returns `self` with the world-to-view transform set to `view`.
    #[must_use]
    pub fn with_view(self, view: &impl Transform) -> Self {
        Self { view: view.to_matrix(), ..self }
    }

    /// Returns the composite model-to-clip transform.
    pub fn mvp(&self) -> Mat4 {
        self.projection * self.view * self.model
    }

    /// Uploads the three matrices to `sink` under the names
    /// [`PROJECTION`][Self::PROJECTION], [`VIEW`][Self::VIEW],
    /// and [`MODEL`][Self::MODEL].
    pub fn upload(&self, sink: &mut impl UniformSink) {
        self.projection.upload(Self::PROJECTION, sink);
        self.view.upload(Self::VIEW, sink);
        self.model.upload(Self::MODEL, sink);
    }
}

impl Transform for Mat4 {
    fn to_matrix(&self) -> Mat4 {
        *self
    }
}

#[cfg(feature = "fp")]
impl Transform for model::Model {
    fn to_matrix(&self) -> Mat4 {
        self.matrix()
    }
}

#[cfg(test)]
mod tests {
    use crate::math::{scale, translate, vec2, vec3};

    use super::cam::Fov;
    use super::uniform::tests::{Recorder, Value};
    use super::*;

    #[test]
    fn default_is_identity() {
        let u = FrameUniforms::default();
        assert_eq!(u.mvp(), Mat4::IDENTITY);
    }

    #[test]
    fn mvp_applies_model_first() {
        let u = FrameUniforms::new(
            scale(vec3(2.0, 2.0, 2.0)),
            translate(vec3(0.0, 0.0, -1.0)),
            translate(vec3(1.0, 0.0, 0.0)),
        );
        let p = u.mvp().apply_pt(vec3(0.0, 0.0, 0.0));
        assert_eq!(p, vec3(2.0, 0.0, -2.0));
    }

    #[test]
    fn upload_sends_all_matrices() {
        let u = FrameUniforms::new(
            scale(vec3(1.0, 2.0, 3.0)),
            Mat4::IDENTITY,
            translate(vec3(4.0, 5.0, 6.0)),
        );
        let mut rec = Recorder::default();
        u.upload(&mut rec);

        let names: alloc::vec::Vec<_> =
            rec.0.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["projection", "view", "model"]);
        assert_eq!(rec.0[0].1, Value::Mat4(u.projection.to_cols_array()));
        assert_eq!(rec.0[2].1, Value::Mat4(u.model.to_cols_array()));
    }

    #[test]
    fn frame_uses_projection_and_model() {
        let proj = Projection::new(Fov::FocalRatio(1.0), 1.0..10.0);
        let model = translate(vec3(0.0, 0.0, -2.5));
        let u = FrameUniforms::frame(&proj, vec2(200, 100), &model);

        assert_eq!(u.projection, proj.matrix(vec2(200, 100)));
        assert_eq!(u.view, Mat4::IDENTITY);
        assert_eq!(u.model, model);

        let view = translate(vec3(0.0, -1.0, 0.0));
        assert_eq!(u.with_view(&view).view, view);
    }
}
