//! Approximate equality of floating-point values.

use core::iter::zip;

/// Trait for comparing values up to a relative tolerance.
///
/// Transform matrices are built from sines, cosines, and square roots, so
/// results that are equal on paper rarely compare equal with `==`. Two
/// values are approximately equal if their difference is at most the
/// epsilon times the magnitude of `self`, or times one if `self` is less
/// than one in magnitude.
///
/// Without the `std` or `libm` features, the float functions are coarse
/// approximations, and the default epsilon is widened accordingly.
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = Self> {
    /// Returns whether `self` and `other` are approximately equal,
    /// using [`Self::relative_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the relative epsilon `rel_eps`.
    fn approx_eq_eps(&self, other: &Other, rel_eps: &Epsilon) -> bool;

    /// Returns the default relative epsilon.
    fn relative_epsilon() -> Epsilon;
}

macro_rules! impl_approx_eq {
    ($($t:ty: $eps:expr, $coarse_eps:expr);+) => {$(
        impl ApproxEq for $t {
            fn approx_eq_eps(&self, other: &Self, rel_eps: &Self) -> bool {
                (self - other).abs() <= *rel_eps * self.abs().max(1.0)
            }

            fn relative_epsilon() -> Self {
                if cfg!(any(feature = "std", feature = "libm")) {
                    $eps
                } else {
                    $coarse_eps
                }
            }
        }
    )+};
}

impl_approx_eq!(f32: 1e-6, 5e-3; f64: 1e-12, 5e-3);

/// Arrays are compared elementwise.
impl<E, T: ApproxEq<T, E>, const N: usize> ApproxEq<Self, E> for [T; N] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        zip(self, other).all(|(s, o)| s.approx_eq_eps(o, rel_eps))
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

/// Asserts that two values are approximately equal.
///
/// The left operand must implement [`ApproxEq`] for the right operand.
/// An explicit relative epsilon can be given with `eps = ...`, and a custom
/// panic message after it, as with `assert_eq`.
///
/// # Panics
/// If the values are not approximately equal.
///
/// # Examples
/// ```
/// use glimmer_core::assert_approx_eq;
/// use glimmer_core::math::{Mat4, scale, vec3};
///
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
///
/// assert_approx_eq!(100.0, 101.0, eps = 0.01);
///
/// let m = scale(vec3(0.1, 0.2, 0.3)) * scale(vec3(10.0, 5.0, 1.0 / 0.3));
/// assert_approx_eq!(m, Mat4::IDENTITY, "not identity: {m:?}");
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:literal) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}` (eps = {})", $eps
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:literal, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, &$eps),
                $fmt $(, $args)*
            )
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn signed_zeros_are_equal() {
        assert_approx_eq!(0.0_f32, -0.0);
        assert_approx_eq!(-0.0_f64, 0.0);
    }

    #[test]
    fn tolerance_is_absolute_below_one() {
        assert_approx_eq!(0.0_f32, 1e-7);
        assert_approx_eq!(-1e-7_f32, 0.0);
        assert_approx_eq!(0.9999999_f32, 1.0);
    }

    #[test]
    fn tolerance_is_relative_above_one() {
        assert_approx_eq!(1e7_f32, 1e7 + 1.0);
        assert_approx_eq!(-2.5e10_f32, -2.5000001e10);
    }

    #[test]
    fn explicit_epsilon() {
        assert_approx_eq!(0.0_f32, 0.001, eps = 0.01);
        assert_approx_eq!(100.0_f32, 99.5, eps = 0.01);
        assert_approx_eq!(1.0_f64, 1.0 + 1e-9, eps = 1e-8);
    }

    #[test]
    fn arrays_compare_elementwise() {
        assert_approx_eq!([1.0_f32, -2.0, 3.0], [1.0, -2.0000001, 3.0]);
        assert_approx_eq!([0.25_f32; 16], [0.25; 16]);
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    mod exact_backend {
        #[test]
        #[should_panic]
        fn one_is_not_one_and_a_bit() {
            assert_approx_eq!(1.0_f32, 1.00001);
        }

        #[test]
        #[should_panic]
        fn f64_is_tighter_than_f32() {
            assert_approx_eq!(1.0_f64, 1.0000001);
        }
    }

    #[test]
    #[should_panic]
    fn nan_is_not_equal_to_itself() {
        assert_approx_eq!(f32::NAN, f32::NAN);
    }

    #[test]
    #[should_panic]
    fn one_differing_element_fails() {
        assert_approx_eq!([1.0_f32, 2.0, 3.0], [1.0, 2.0, 3.1]);
    }
}
