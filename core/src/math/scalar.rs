//! Numeric element types of vectors.
//!
//! Vectors are generic over a [`Scalar`] element type, which is one of the
//! signed integer or floating-point primitives. The floating-point ones are
//! additionally [`Real`], which unlocks operations such as normalization
//! that have no sensible meaning for integers.

use core::fmt::Debug;
use core::ops::Neg;

use num_traits::NumAssign;

/// Trait for types that can be used as vector components.
///
/// Implemented for `i16`, `i32`, `i64`, `f32`, and `f64`.
pub trait Scalar:
    NumAssign + Copy + Default + PartialOrd + Debug + Neg<Output = Self> + 'static
{
    /// The floating-point type that magnitudes of vectors with elements
    /// of type `Self` are computed in.
    ///
    /// This is `Self` for floating-point types, and `f32` for integers.
    type Real: Real;

    /// Converts `self` to [`Self::Real`], rounding if necessary.
    fn to_real(self) -> Self::Real;
}

/// Trait for floating-point scalars.
///
/// Implemented for `f32` and `f64`. Operations that only make sense for
/// real numbers, such as [`Vec3::normalize`][super::Vec3::normalize],
/// require their element type to be `Real`.
pub trait Real: Scalar<Real = Self> {
    /// Returns the square root of `self`.
    ///
    /// The result is NaN if `self` is negative.
    fn sqrt(self) -> Self;

    /// Returns the reciprocal `1 / self`.
    #[inline]
    fn recip(self) -> Self {
        Self::one() / self
    }
}

/// Multiplication and division by a scalar of a possibly different type.
///
/// Vectors can be scaled by a scalar of any [`Scalar`] type, not just their
/// own element type. The arithmetic follows a fixed conversion rule so that
/// the results are reproducible:
///
/// 1. Both operands are converted with `as` to their *common type*: the
///    floating-point type if exactly one of them is floating-point, and
///    otherwise the wider of the two types.
/// 2. The operation is performed in the common type.
/// 3. The result is converted back to the type of `self` with `as`, which
///    for float-to-integer conversions truncates toward zero and saturates
///    at the bounds of the integer type.
///
/// Integer overflow follows from this rule. If both operands have the same
/// integer type, the operation is ordinary integer arithmetic, which panics
/// on overflow in debug builds and wraps in release builds. If the common
/// type is a wider integer, the operation itself cannot overflow, but the
/// narrowing `as` conversion keeps only the low bits, so the result wraps
/// in all builds.
///
/// # Examples
/// ```
/// use glimmer_core::math::scalar::MixedOps;
///
/// // Computed in f32, then truncated
/// assert_eq!(5_i32.mixed_mul(0.5_f32), 2);
/// // Computed in f64, then narrowed
/// assert_eq!(3.0_f32.mixed_div(2.0_f64), 1.5);
/// // Computed in i64
/// assert_eq!(7_i32.mixed_div(2_i64), 3);
/// ```
pub trait MixedOps<Rhs>: Sized {
    /// Returns `self * rhs` computed in the common type.
    fn mixed_mul(self, rhs: Rhs) -> Self;
    /// Returns `self / rhs` computed in the common type.
    fn mixed_div(self, rhs: Rhs) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty => $real:ty),+) => {$(
        impl Scalar for $t {
            type Real = $real;

            #[inline]
            fn to_real(self) -> $real {
                self as $real
            }
        }
    )+};
}

impl_scalar!(i16 => f32, i32 => f32, i64 => f32, f32 => f32, f64 => f64);

macro_rules! impl_mixed_ops {
    ($($lhs:ty, $rhs:ty => $common:ty;)+) => {$(
        impl MixedOps<$rhs> for $lhs {
            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn mixed_mul(self, rhs: $rhs) -> Self {
                (self as $common * rhs as $common) as $lhs
            }
            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn mixed_div(self, rhs: $rhs) -> Self {
                (self as $common / rhs as $common) as $lhs
            }
        }
    )+};
}

impl_mixed_ops! {
    i16, i16 => i16;
    i16, i32 => i32;
    i16, i64 => i64;
    i16, f32 => f32;
    i16, f64 => f64;

    i32, i16 => i32;
    i32, i32 => i32;
    i32, i64 => i64;
    i32, f32 => f32;
    i32, f64 => f64;

    i64, i16 => i64;
    i64, i32 => i64;
    i64, i64 => i64;
    i64, f32 => f32;
    i64, f64 => f64;

    f32, i16 => f32;
    f32, i32 => f32;
    f32, i64 => f32;
    f32, f32 => f32;
    f32, f64 => f64;

    f64, i16 => f64;
    f64, i32 => f64;
    f64, i64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}

impl Real for f32 {
    #[inline]
    fn sqrt(self) -> f32 {
        super::float::f32::sqrt(self)
    }
}

impl Real for f64 {
    #[inline]
    fn sqrt(self) -> f64 {
        super::float::sqrt_f64(self)
    }
}
