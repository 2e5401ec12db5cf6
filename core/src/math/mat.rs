//! Matrices and linear transforms.
//!
//! [`Mat4`] is a 4x4 single-precision matrix acting on homogeneous column
//! vectors. Its storage is column-major, which is also the layout expected
//! by the uniform upload path: [`Mat4::as_array`] can be handed to a
//! graphics API as-is.
//!
//! Transforms are composed by multiplication, `lhs * rhs` meaning "apply
//! `rhs` first, then `lhs`". A model matrix built as
//! `translate(t) * rotate_y(a)` thus rotates a point first and translates
//! it afterwards.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Mul, MulAssign, Range};

use crate::math::approx::ApproxEq;
#[cfg(feature = "fp")]
use crate::math::angle::Angle;
use crate::math::vec::{Vec3, Vec3f, Vec4f, vec4};

/// A 4x4 `f32` matrix, stored in column-major order.
///
/// The entry at row `r` and column `c` is at index `4 * c + r` of the
/// backing array. The [`new`][Self::new] constructor takes the entries
/// in *row-major* reading order, so that a matrix literal looks the same
/// in code as it does on paper.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Mat4([f32; 16]);

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Returns a matrix with the given rows.
    ///
    /// The rows are transposed into the column-major backing array.
    ///
    /// # Examples
    /// ```
    /// use glimmer_core::math::Mat4;
    ///
    /// let m = Mat4::new([
    ///     [1.0, 2.0, 3.0, 4.0],
    ///     [5.0, 6.0, 7.0, 8.0],
    ///     [9.0, 10.0, 11.0, 12.0],
    ///     [13.0, 14.0, 15.0, 16.0],
    /// ]);
    /// assert_eq!(m.get(0, 1), 2.0);
    /// assert_eq!(m.as_array()[..4], [1.0, 5.0, 9.0, 13.0]);
    /// ```
    pub const fn new(rows: [[f32; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        #[rustfmt::skip]
        let cols = [
            r0[0], r1[0], r2[0], r3[0],
            r0[1], r1[1], r2[1], r3[1],
            r0[2], r1[2], r2[2], r3[2],
            r0[3], r1[3], r2[3], r3[3],
        ];
        Self(cols)
    }

    /// Returns a matrix with the given columns.
    pub fn from_cols(cols: [Vec4f; 4]) -> Self {
        let mut vals = [0.0; 16];
        for (c, col) in cols.into_iter().enumerate() {
            vals[4 * c..4 * c + 4].copy_from_slice(&col.to_array());
        }
        Self(vals)
    }

    /// Returns a matrix with the given entries in column-major order.
    pub const fn from_cols_array(vals: [f32; 16]) -> Self {
        Self(vals)
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the entries of `self` in column-major order.
    ///
    /// This is the layout expected by matrix uniform uploads that do not
    /// request transposition.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.0
    }

    /// Returns the entries of `self` in column-major order as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Returns a pointer to the first of the 16 contiguous column-major
    /// entries of `self`.
    ///
    /// The pointer is valid for as long as `self` is borrowed.
    #[inline]
    pub const fn as_ptr(&self) -> *const f32 {
        self.0.as_ptr()
    }

    /// Returns the entries of `self` in column-major order.
    #[inline]
    pub const fn to_cols_array(self) -> [f32; 16] {
        self.0
    }

    /// Returns the entry at `row` and `col`.
    ///
    /// # Panics
    /// If `row` or `col` is greater than 3.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < 4 && col < 4, "index ({row}, {col}) out of bounds");
        self.0[4 * col + row]
    }

    /// Returns the row with index `i`.
    ///
    /// # Panics
    /// If `i` is greater than 3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4f {
        let m = &self.0;
        vec4(m[i], m[4 + i], m[8 + i], m[12 + i])
    }

    /// Returns the column with index `i`.
    ///
    /// # Panics
    /// If `i` is greater than 3.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4f {
        let m = &self.0;
        vec4(m[4 * i], m[4 * i + 1], m[4 * i + 2], m[4 * i + 3])
    }

    /// Returns `self` with its rows and columns swapped.
    ///
    /// The result is `self` viewed as row-major, for consumers that
    /// expect that convention.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_cols([self.row(0), self.row(1), self.row(2), self.row(3)])
    }

    /// Returns the composite transform that applies `self` first and
    /// `other` second.
    ///
    /// `a.then(&b)` is equal to `b * a`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        *other * *self
    }

    /// Applies `self` to the homogeneous column vector `v`.
    #[inline]
    pub fn apply(&self, v: Vec4f) -> Vec4f {
        vec4(
            self.row(0).dot(&v),
            self.row(1).dot(&v),
            self.row(2).dot(&v),
            self.row(3).dot(&v),
        )
    }

    /// Applies `self` to the point `p`, that is, to `(p.x, p.y, p.z, 1)`.
    ///
    /// The `w` component of the result is discarded without dividing;
    /// use [`apply`][Self::apply] for projective transforms.
    #[inline]
    pub fn apply_pt(&self, p: Vec3f) -> Vec3f {
        self.apply(p.extend(1.0)).truncate()
    }

    /// Applies `self` to the direction `d`, that is, to `(d.x, d.y, d.z, 0)`.
    ///
    /// Translations have no effect on directions.
    #[inline]
    pub fn apply_dir(&self, d: Vec3f) -> Vec3f {
        self.apply(d.extend(0.0)).truncate()
    }
}

//
// Free fns
//

/// Returns the transpose of `m`.
pub fn transpose(m: &Mat4) -> Mat4 {
    m.transpose()
}

/// Returns a matrix applying a translation by `t`.
///
/// # Examples
/// ```
/// use glimmer_core::math::{translate, vec3};
///
/// let m = translate(vec3(1.0, 2.0, 3.0));
/// assert_eq!(m.apply_pt(vec3(0.0, 5.0, -3.0)), vec3(1.0, 7.0, 0.0));
/// assert_eq!(m.as_array()[12..], [1.0, 2.0, 3.0, 1.0]);
/// ```
pub fn translate(t: Vec3f) -> Mat4 {
    [
        [1.0, 0.0, 0.0, t.x],
        [0.0, 1.0, 0.0, t.y],
        [0.0, 0.0, 1.0, t.z],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into()
}

/// Returns a matrix applying a scaling by `s` along each axis.
pub fn scale(s: Vec3f) -> Mat4 {
    [
        [s.x, 0.0, 0.0, 0.0],
        [0.0, s.y, 0.0, 0.0],
        [0.0, 0.0, s.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into()
}

/// Returns a matrix applying a scaling by `s` uniformly along all axes.
pub fn uniform_scale(s: f32) -> Mat4 {
    scale(Vec3::splat(s))
}

/// Returns a matrix applying a rotation by `a` about the x axis.
///
/// Positive angles rotate +y towards +z.
#[cfg(feature = "fp")]
pub fn rotate_x(a: Angle) -> Mat4 {
    let (s, c) = a.sin_cos();
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into()
}

/// Returns a matrix applying a rotation by `a` about the y axis.
///
/// Positive angles rotate +z towards +x.
#[cfg(feature = "fp")]
pub fn rotate_y(a: Angle) -> Mat4 {
    let (s, c) = a.sin_cos();
    [
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into()
}

/// Returns a matrix applying a rotation by `a` about the z axis.
///
/// Positive angles rotate +x towards +y.
#[cfg(feature = "fp")]
pub fn rotate_z(a: Angle) -> Mat4 {
    let (s, c) = a.sin_cos();
    [
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into()
}

/// Returns a matrix applying a rotation by `a` about an arbitrary `axis`.
///
/// The axis need not be of unit length; it is normalized first. If it is
/// the zero vector, the result has non-finite entries. Positive angles
/// rotate counter-clockwise when looking from the tip of the axis towards
/// the origin.
///
/// # Examples
/// ```
/// use glimmer_core::assert_approx_eq;
/// use glimmer_core::math::{degs, rotate, rotate_z, vec3};
///
/// let m = rotate(vec3(0.0, 0.0, 5.0), degs(30.0));
/// assert_approx_eq!(m, rotate_z(degs(30.0)));
/// ```
#[cfg(feature = "fp")]
pub fn rotate(axis: Vec3f, a: Angle) -> Mat4 {
    let Vec3 { x, y, z } = axis.normalize();
    let (s, c) = a.sin_cos();
    let omc = 1.0 - c;

    let (xy, xz, yz) = (x * y * omc, x * z * omc, y * z * omc);
    let (xs, ys, zs) = (x * s, y * s, z * s);

    [
        [x * x * omc + c, xy - zs, xz + ys, 0.0],
        [xy + zs, y * y * omc + c, yz - xs, 0.0],
        [xz - ys, yz + xs, z * z * omc + c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into()
}

/// Returns a perspective projection matrix for an off-center frustum.
///
/// The frustum apex is at the origin, looking down the negative z axis.
/// Its sides pass through the edges `left`, `right`, `bottom`, and `top`
/// of the near plane at z = -`near_far.start`. The far plane is at
/// z = -`near_far.end`.
///
/// The matrix maps the frustum to the clip-space cube [-1, 1]³, near
/// plane to z = -1 and far plane to z = 1, with the clip-space w equal
/// to the negated view-space z.
///
/// If `left == right`, `bottom == top`, or the near-far range is empty,
/// the result has non-finite entries.
pub fn frustum(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near_far: Range<f32>,
) -> Mat4 {
    let Range { start: n, end: f } = near_far;
    let (w, h, d) = (right - left, top - bottom, f - n);
    [
        [2.0 * n / w, 0.0, (right + left) / w, 0.0],
        [0.0, 2.0 * n / h, (top + bottom) / h, 0.0],
        [0.0, 0.0, -(f + n) / d, -2.0 * f * n / d],
        [0.0, 0.0, -1.0, 0.0],
    ]
    .into()
}

/// Returns a symmetric perspective projection matrix.
///
/// `fov_y` is the vertical field of view, and `aspect` the ratio of the
/// viewport width to its height.
///
/// # Examples
/// ```
/// use glimmer_core::assert_approx_eq;
/// use glimmer_core::math::{degs, perspective};
///
/// let m = perspective(degs(90.0), 2.0, 0.1..100.0);
/// assert_approx_eq!(m.get(0, 0), 0.5);
/// assert_approx_eq!(m.get(1, 1), 1.0);
/// assert_eq!(m.get(3, 2), -1.0);
/// ```
#[cfg(feature = "fp")]
pub fn perspective(fov_y: Angle, aspect: f32, near_far: Range<f32>) -> Mat4 {
    let top = near_far.start * (fov_y / 2.0).tan();
    let right = aspect * top;
    frustum(-right, right, -top, top, near_far)
}

//
// Local trait impls
//

impl ApproxEq<Self, f32> for Mat4 {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

//
// Foreign trait impls
//

impl Default for Mat4 {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Debug for Mat4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat4[")?;
        for i in 0..4 {
            writeln!(f, "    {:6.2?}", self.row(i).to_array())?;
        }
        write!(f, "]")
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    /// Returns a matrix with the given rows.
    fn from(rows: [[f32; 4]; 4]) -> Self {
        Self::new(rows)
    }
}

impl Mul for Mat4 {
    type Output = Self;

    /// Returns the matrix product `self · rhs`.
    fn mul(self, rhs: Self) -> Self {
        let mut vals = [0.0; 16];
        for c in 0..4 {
            let col = rhs.col(c);
            for r in 0..4 {
                vals[4 * c + r] = self.row(r).dot(&col);
            }
        }
        Self(vals)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec4f> for Mat4 {
    type Output = Vec4f;

    fn mul(self, v: Vec4f) -> Vec4f {
        self.apply(v)
    }
}
