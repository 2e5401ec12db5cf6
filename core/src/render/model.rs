//! Model transforms.

use crate::math::{Angle, Vec3, Vec3f, vec3};
#[cfg(feature = "fp")]
use crate::math::{Mat4, rotate, scale, translate};

/// Rotation about a fixed axis at a constant rate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spin {
    /// The axis of rotation. Need not be of unit length.
    pub axis: Vec3f,
    /// The angle rotated per second.
    pub rate: Angle,
}

/// Placement of a mesh in the world.
///
/// The model transform scales the mesh first, then rotates it about
/// `axis` by `angle`, and finally moves it to `position`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Model {
    /// The position of the model origin in the world.
    pub position: Vec3f,
    /// The axis of rotation. Need not be of unit length.
    pub axis: Vec3f,
    /// The angle of rotation about `axis`.
    pub angle: Angle,
    /// The scale factors along each model axis.
    pub scale: Vec3f,
}

impl Spin {
    /// Creates a spin about `axis` at the rate of `rate` per second.
    pub fn new(axis: Vec3f, rate: Angle) -> Self {
        Self { axis, rate }
    }

    /// Returns the angle rotated by time `t_secs`, starting from zero.
    pub fn angle_at(&self, t_secs: f32) -> Angle {
        self.rate * t_secs
    }
}

impl Model {
    /// Returns a model at `position` rotated by `spin` for `t_secs` seconds.
    ///
    /// # Examples
    /// ```
    /// use glimmer_core::assert_approx_eq;
    /// use glimmer_core::math::{degs, rotate_y, translate, vec3};
    /// use glimmer_core::render::model::{Model, Spin};
    ///
    /// let spin = Spin::new(vec3(0.0, 1.0, 0.0), degs(90.0));
    /// let pos = vec3(0.0, 0.0, -2.5);
    /// let model = Model::spinning(pos, spin, 2.0);
    ///
    /// assert_approx_eq!(model.matrix(), translate(pos) * rotate_y(degs(180.0)));
    /// ```
    pub fn spinning(position: Vec3f, spin: Spin, t_secs: f32) -> Self {
        Self {
            position,
            axis: spin.axis,
            angle: spin.angle_at(t_secs),
            ..Self::default()
        }
    }

    /// Returns `self` moved to `position`.
    #[must_use]
    pub fn at(self, position: Vec3f) -> Self {
        Self { position, ..self }
    }

    /// Returns `self` with its rotation set to `angle` about `axis`.
    #[must_use]
    pub fn rotated(self, axis: Vec3f, angle: Angle) -> Self {
        Self { axis, angle, ..self }
    }

    /// Returns `self` with its scale factors set to `scale`.
    #[must_use]
    pub fn scaled(self, scale: Vec3f) -> Self {
        Self { scale, ..self }
    }

    /// Returns the model-to-world matrix of `self`.
    #[cfg(feature = "fp")]
    pub fn matrix(&self) -> Mat4 {
        let Self { position, axis, angle, scale: s } = *self;
        translate(position) * rotate(axis, angle) * scale(s)
    }
}

impl Default for Model {
    /// Returns an unrotated, unscaled model at the origin, with the y axis
    /// as the axis of rotation.
    fn default() -> Self {
        Self {
            position: Vec3::default(),
            axis: vec3(0.0, 1.0, 0.0),
            angle: Angle::ZERO,
            scale: Vec3::splat(1.0),
        }
    }
}
