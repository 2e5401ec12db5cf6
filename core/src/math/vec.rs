//! Generic 2-, 3-, and 4-vectors.
//!
//! Vectors are plain `Copy` aggregates of named components, generic over a
//! [`Scalar`] element type. They support the usual elementwise arithmetic
//! with vectors of the same shape, and multiplication and division by a
//! scalar of *any* `Scalar` type; see [`MixedOps`] for how the types are
//! reconciled.
//!
//! Equality and ordering are componentwise and lexicographic, `x` first.

use core::fmt::{self, Debug, Formatter};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub,
    SubAssign,
};

use num_traits::AsPrimitive;

use crate::math::approx::ApproxEq;
use crate::math::scalar::{MixedOps, Real, Scalar};

//
// Types
//

/// A 2-vector with components `x` and `y`.
#[repr(C)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

/// A 3-vector with components `x`, `y`, and `z`.
#[repr(C)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// A 4-vector with components `x`, `y`, `z`, and `w`.
///
/// Mostly used for homogeneous coordinates: `w` = 1 for points and
/// `w` = 0 for directions.
#[repr(C)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// A 2-vector with `i32` components, such as a window size.
pub type Vec2i = Vec2<i32>;
/// A 2-vector with `f32` components.
pub type Vec2f = Vec2<f32>;
/// A 3-vector with `i32` components.
pub type Vec3i = Vec3<i32>;
/// A 3-vector with `f32` components.
pub type Vec3f = Vec3<f32>;
/// A 4-vector with `f32` components.
pub type Vec4f = Vec4<f32>;

//
// Free fns
//

/// Returns a 2-vector with components `x` and `y`.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vec2 { x, y }
}

/// Returns a 3-vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vec3 { x, y, z }
}

/// Returns a 4-vector with components `x`, `y`, `z`, and `w`.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vec4 { x, y, z, w }
}

//
// Impls shared by all vector types
//

macro_rules! impl_vector {
    ($Vec:ident, $dim:literal, [$($i:literal => $f:ident),+]) => {

        impl<T> $Vec<T> {
            /// The number of components.
            pub const DIM: usize = $dim;

            /// Returns a vector with the given components.
            #[inline]
            pub const fn new($($f: T),+) -> Self {
                Self { $($f),+ }
            }

            /// Returns a vector with all components equal to `s`.
            #[inline]
            pub fn splat(s: T) -> Self
            where
                T: Copy,
            {
                Self { $($f: s),+ }
            }

            /// Returns the components of `self` as an array.
            #[inline]
            pub fn to_array(self) -> [T; $dim] {
                [$(self.$f),+]
            }

            /// Returns a vector with `f` applied to each component of `self`.
            #[inline]
            pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> $Vec<U> {
                $Vec { $($f: f(self.$f)),+ }
            }

            /// Returns a vector with `f` applied to each pair of components
            /// of `self` and `other`.
            #[inline]
            pub fn zip_map<U, V>(
                self,
                other: $Vec<U>,
                mut f: impl FnMut(T, U) -> V,
            ) -> $Vec<V> {
                $Vec { $($f: f(self.$f, other.$f)),+ }
            }

            /// Converts each component of `self` to element type `U`.
            ///
            /// The conversion is done component by component with `as`
            /// semantics: float-to-integer conversion truncates toward zero
            /// and saturates, and integer-to-float conversion rounds to the
            /// nearest representable value.
            #[inline]
            pub fn cast<U>(self) -> $Vec<U>
            where
                T: AsPrimitive<U>,
                U: Copy + 'static,
            {
                self.map(AsPrimitive::as_)
            }
        }

        impl<T: Scalar> $Vec<T> {
            /// Returns the dot product of `self` and `other`.
            #[inline]
            pub fn dot(&self, other: &Self) -> T {
                T::zero() $(+ self.$f * other.$f)+
            }

            /// Returns the squared length of `self`.
            ///
            /// The result has the element type, so for integer vectors it
            /// is exact.
            #[inline]
            pub fn len_sqr(&self) -> T {
                self.dot(self)
            }

            /// Returns the length (magnitude) of `self`.
            ///
            /// Computed in `T` itself for floating-point element types,
            /// and in `f32` for integer element types.
            #[inline]
            pub fn len(&self) -> T::Real {
                Real::sqrt(self.len_sqr().to_real())
            }

            /// Returns the squared Euclidean distance between `self` and
            /// `other`.
            #[inline]
            pub fn distance_sqr(&self, other: &Self) -> T {
                (*self - *other).len_sqr()
            }

            /// Returns the Euclidean distance between `self` and `other`.
            #[inline]
            pub fn distance(&self, other: &Self) -> T::Real {
                (*self - *other).len()
            }
        }

        impl<T: Real> $Vec<T> {
            /// Returns `self` scaled to unit length.
            ///
            /// Only available for floating-point element types. If `self`
            /// is the zero vector, the result has non-finite components.
            #[inline]
            #[must_use]
            pub fn normalize(&self) -> Self {
                let r = Real::recip(self.len());
                self.map(|c| c * r)
            }
        }

        //
        // Local trait impls
        //

        impl<E, T> ApproxEq<Self, E> for $Vec<T>
        where
            T: ApproxEq<T, E> + Copy,
        {
            fn approx_eq_eps(&self, other: &Self, eps: &E) -> bool {
                self.to_array().approx_eq_eps(&other.to_array(), eps)
            }
            fn relative_epsilon() -> E {
                T::relative_epsilon()
            }
        }

        //
        // Foreign trait impls
        //

        impl<T: Debug> Debug for $Vec<T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($Vec))?;
                f.debug_list()$(.entry(&self.$f))+.finish()
            }
        }

        impl<T> From<[T; $dim]> for $Vec<T> {
            #[inline]
            fn from([$($f),+]: [T; $dim]) -> Self {
                Self { $($f),+ }
            }
        }

        impl<T> From<$Vec<T>> for [T; $dim] {
            #[inline]
            fn from(v: $Vec<T>) -> Self {
                [$(v.$f),+]
            }
        }

        impl<T> Index<usize> for $Vec<T> {
            type Output = T;

            /// Returns the component with index `i`, `x` being 0.
            ///
            /// # Panics
            /// If `i` is greater than or equal to the dimension.
            #[inline]
            fn index(&self, i: usize) -> &T {
                match i {
                    $($i => &self.$f,)+
                    _ => panic!("index {i} out of bounds for {}", stringify!($Vec)),
                }
            }
        }

        impl<T> IndexMut<usize> for $Vec<T> {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut T {
                match i {
                    $($i => &mut self.$f,)+
                    _ => panic!("index {i} out of bounds for {}", stringify!($Vec)),
                }
            }
        }

        //
        // Arithmetic
        //

        impl_vector!(@elementwise $Vec [$($f),+]
            Add::add, AddAssign::add_assign, +=;
            Sub::sub, SubAssign::sub_assign, -=;
            Mul::mul, MulAssign::mul_assign, *=;
            Div::div, DivAssign::div_assign, /=;
        );

        impl<T: Scalar> Neg for $Vec<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                self.map(Neg::neg)
            }
        }

        impl<T, U> MulAssign<U> for $Vec<T>
        where
            T: Scalar + MixedOps<U>,
            U: Scalar,
        {
            /// Multiplies each component of `self` by `rhs`.
            ///
            /// See [`MixedOps`] for the conversion rules.
            #[inline]
            fn mul_assign(&mut self, rhs: U) {
                $(self.$f = self.$f.mixed_mul(rhs);)+
            }
        }

        impl<T, U> DivAssign<U> for $Vec<T>
        where
            T: Scalar + MixedOps<U>,
            U: Scalar,
        {
            /// Divides each component of `self` by `rhs`.
            ///
            /// See [`MixedOps`] for the conversion rules.
            #[inline]
            fn div_assign(&mut self, rhs: U) {
                $(self.$f = self.$f.mixed_div(rhs);)+
            }
        }

        impl<T, U> Mul<U> for $Vec<T>
        where
            T: Scalar + MixedOps<U>,
            U: Scalar,
        {
            type Output = Self;
            #[inline]
            fn mul(mut self, rhs: U) -> Self {
                self *= rhs;
                self
            }
        }

        impl<T, U> Div<U> for $Vec<T>
        where
            T: Scalar + MixedOps<U>,
            U: Scalar,
        {
            type Output = Self;
            #[inline]
            fn div(mut self, rhs: U) -> Self {
                self /= rhs;
                self
            }
        }

        impl_vector!(@scalar_lhs $Vec; i16, i32, i64, f32, f64);

        #[cfg(feature = "bytemuck")]
        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $Vec<T> {}

        #[cfg(feature = "bytemuck")]
        unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $Vec<T> {}
    };

    (@elementwise $Vec:ident $fields:tt
        $($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $assign:tt;)+
    ) => {$(
        impl_vector!(@binop $Vec $fields
            $Op::$op, $OpAssign::$op_assign, $assign);
    )+};

    (@binop $Vec:ident [$($f:ident),+]
        $Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $assign:tt
    ) => {
        impl<T: Scalar> $OpAssign for $Vec<T> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                $(self.$f $assign rhs.$f;)+
            }
        }

        impl<T: Scalar> $Op for $Vec<T> {
            type Output = Self;
            #[inline]
            fn $op(mut self, rhs: Self) -> Self {
                self $assign rhs;
                self
            }
        }
    };

    (@scalar_lhs $Vec:ident; $($s:ty),+) => {$(
        impl<T> Mul<$Vec<T>> for $s
        where
            T: Scalar + MixedOps<$s>,
        {
            type Output = $Vec<T>;
            #[inline]
            fn mul(self, rhs: $Vec<T>) -> $Vec<T> {
                rhs * self
            }
        }
    )+};
}

impl_vector!(Vec2, 2, [0 => x, 1 => y]);
impl_vector!(Vec3, 3, [0 => x, 1 => y, 2 => z]);
impl_vector!(Vec4, 4, [0 => x, 1 => y, 2 => z, 3 => w]);

//
// Inherent impls specific to a dimension
//

impl<T> Vec2<T> {
    /// Returns a 3-vector with the components of `self` and `z`.
    #[inline]
    pub fn extend(self, z: T) -> Vec3<T> {
        vec3(self.x, self.y, z)
    }
}

impl<T> Vec3<T> {
    /// Returns a 4-vector with the components of `self` and `w`.
    ///
    /// Use `w` = 1 to make a homogeneous point and `w` = 0 to make
    /// a homogeneous direction.
    #[inline]
    pub fn extend(self, w: T) -> Vec4<T> {
        vec4(self.x, self.y, self.z, w)
    }

    /// Returns the `x` and `y` components of `self`.
    #[inline]
    pub fn truncate(self) -> Vec2<T> {
        vec2(self.x, self.y)
    }
}

impl<T> Vec4<T> {
    /// Returns the `x`, `y`, and `z` components of `self`.
    #[inline]
    pub fn truncate(self) -> Vec3<T> {
        vec3(self.x, self.y, self.z)
    }
}

impl<T: Scalar> Vec3<T> {
    /// Returns the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both `self` and `other`, oriented by
    /// the right-hand rule, with length equal to the area of the
    /// parallelogram spanned by them.
    ///
    /// # Examples
    /// ```
    /// use glimmer_core::math::vec3;
    ///
    /// let x = vec3(1, 0, 0);
    /// let y = vec3(0, 1, 0);
    /// assert_eq!(x.cross(&y), vec3(0, 0, 1));
    /// assert_eq!(y.cross(&x), vec3(0, 0, -1));
    /// ```
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        let x = self.y * other.z - self.z * other.y;
        let y = self.z * other.x - self.x * other.z;
        let z = self.x * other.y - self.y * other.x;
        vec3(x, y, z)
    }
}
