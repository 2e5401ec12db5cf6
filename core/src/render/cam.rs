//! Camera projection.
//!
//! A [`Projection`] holds the window-size independent parameters of a
//! perspective projection, and produces the projection matrix for the
//! current viewport size on demand. Recomputing the matrix every frame
//! keeps the image undistorted when the window is resized.

use core::ops::Range;

#[cfg(feature = "fp")]
use crate::math::{Angle, degs};
use crate::math::{Mat4, Vec2, Vec2i, frustum};

/// Camera field of view.
///
/// Specifies how wide or narrow the *angle of view* of the camera is.
/// The smaller the angle, the more "zoomed in" the image is.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Fov {
    /// Ratio of focal length to aperture size.
    ///
    /// This value is also called the 𝑓-number. The value of 1.0 corresponds
    /// to a horizontal angle of view of 90°. Values less than 1.0 correspond
    /// to wider and values greater than 1.0 to narrower angles of view.
    FocalRatio(f32),
    /// Focal length in [35mm-equivalent millimeters.][1]
    ///
    /// For instance, the value of 28.0 corresponds to the moderate wide-angle
    /// view of a 28mm "full-frame" lens.
    ///
    /// [1]: https://en.wikipedia.org/wiki/35_mm_equivalent_focal_length
    Equiv35mm(f32),
    /// Angle of view as measured from the left to the right edge of the image.
    #[cfg(feature = "fp")]
    Horizontal(Angle),
    /// Angle of view as measured from the top to the bottom edge of the image.
    #[cfg(feature = "fp")]
    Vertical(Angle),
    /// Angle of view as measured between two opposite corners of the image.
    #[cfg(feature = "fp")]
    Diagonal(Angle),
}

/// Parameters of a perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    /// The field of view.
    pub fov: Fov,
    /// The distances of the near and far clipping planes from the camera.
    pub near_far: Range<f32>,
}

/// Returns the aspect ratio, width divided by height, of a viewport
/// with dimensions `dims`.
///
/// Both dimensions are clamped to at least 1, so that a minimized window
/// with a zero width or height still yields a finite, nonzero ratio.
///
/// # Examples
/// ```
/// use glimmer_core::math::vec2;
/// use glimmer_core::render::cam::aspect_ratio;
///
/// assert_eq!(aspect_ratio(vec2(1280, 720)), 16.0 / 9.0);
/// assert_eq!(aspect_ratio(vec2(640, 0)), 640.0);
/// assert_eq!(aspect_ratio(vec2(0, 0)), 1.0);
/// ```
pub fn aspect_ratio(dims: Vec2i) -> f32 {
    let Vec2 { x, y } = dims.map(|c| c.max(1));
    x as f32 / y as f32
}

//
// Inherent impls
//

impl Fov {
    /// Returns the horizontal focal ratio corresponding to `self`, given
    /// the aspect ratio of the viewport.
    ///
    /// The focal ratio is the cotangent of half the horizontal angle of view.
    pub fn focal_ratio(self, aspect_ratio: f32) -> f32 {
        use Fov::*;
        #[cfg(feature = "fp")]
        fn ratio(a: Angle) -> f32 {
            1.0 / (a / 2.0).tan()
        }
        match self {
            FocalRatio(r) => r,
            Equiv35mm(mm) => mm / (36.0 / 2.0), // half frame width

            #[cfg(feature = "fp")]
            Horizontal(a) => ratio(a),

            #[cfg(feature = "fp")]
            Vertical(a) => ratio(a) / aspect_ratio,

            #[cfg(feature = "fp")]
            Diagonal(a) => {
                use crate::math::float::f32;
                let diag = f32::sqrt(1.0 + 1.0 / aspect_ratio / aspect_ratio);
                ratio(a) * diag
            }
        }
    }
}

impl Projection {
    /// Creates a projection with the given field of view and near–far range.
    ///
    /// The endpoints of `near_far` denote the distances of the near and far
    /// clipping planes.
    ///
    /// # Panics
    /// In debug builds, if the near distance is not positive or if
    /// `near_far` is an empty range.
    pub fn new(fov: Fov, near_far: Range<f32>) -> Self {
        debug_assert!(near_far.start > 0.0, "near distance must be positive");
        debug_assert!(
            near_far.start < near_far.end,
            "near distance must be less than far distance"
        );
        Self { fov, near_far }
    }

    /// Returns the projection matrix for a viewport of size `dims`.
    ///
    /// The result equals [`perspective`][crate::math::perspective] with the
    /// vertical angle of view corresponding to `self.fov` and the aspect
    /// ratio of `dims`.
    pub fn matrix(&self, dims: Vec2i) -> Mat4 {
        let aspect = aspect_ratio(dims);
        let n = self.near_far.start;
        // Half extents of the near plane
        let right = n / self.fov.focal_ratio(aspect);
        let top = right / aspect;
        frustum(-right, right, -top, top, self.near_far.clone())
    }
}

//
// Foreign trait impls
//

#[cfg(feature = "fp")]
impl Default for Projection {
    /// Returns a projection with a 50° vertical field of view and
    /// the near–far range `0.125..1024.0`.
    fn default() -> Self {
        Self::new(Fov::Vertical(degs(50.0)), 0.125..1024.0)
    }
}
