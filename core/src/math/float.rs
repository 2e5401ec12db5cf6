//! Floating-point compatibility API.
//!
//! Most floating-point functions are unavailable in `no_std`. This module
//! provides the functions needed by the transform constructors using either
//! `std`, the `libm` crate, or the `micromath` crate, depending on which
//! feature is enabled, and re-exports the chosen backend as [`f32`][self].
//! Without any of the features, only a square root approximation is
//! available, and the trigonometric constructors are compiled out.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::sqrtf as sqrt;

    pub use libm::cosf as cos;
    pub use libm::sinf as sin;
    pub use libm::tanf as tan;

    #[inline]
    pub fn sin_cos(x: f32) -> (f32, f32) {
        (sin(x), cos(x))
    }
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext as mm;

    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        let y = mm::sqrt(x);
        // Two rounds of Newton's method
        let y = 0.5 * (y + (x / y));
        0.5 * (y + (x / y))
    }

    #[inline]
    pub fn sin(x: f32) -> f32 {
        mm::sin(x)
    }
    #[inline]
    pub fn cos(x: f32) -> f32 {
        mm::cos(x)
    }
    #[inline]
    pub fn sin_cos(x: f32) -> (f32, f32) {
        (mm::sin(x), mm::cos(x))
    }
    #[inline]
    pub fn tan(x: f32) -> f32 {
        mm::tan(x)
    }
}

pub mod fallback {
    use crate::math::float::fast_recip_sqrt;

    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        if x == 0.0 { 0.0 } else { 1.0 / fast_recip_sqrt(x) }
    }
}

/// Returns a fast approximation of the reciprocal square root of a number.
#[inline]
pub fn fast_recip_sqrt(x: f32) -> f32 {
    // https://en.wikipedia.org/wiki/Fast_inverse_square_root
    const MAGIC: u32 = 0x5f37_5a86;
    let mut y = f32::from_bits(MAGIC.saturating_sub(x.to_bits() >> 1));
    // Two rounds of Newton's method
    y = y * (1.5 - 0.5 * x * y * y);
    y * (1.5 - 0.5 * x * y * y)
}

/// Returns the square root of an `f64`.
///
/// Exact with `std` or `libm`; otherwise computed in `f32` precision.
#[inline]
pub fn sqrt_f64(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.sqrt()
    }
    #[cfg(all(feature = "libm", not(feature = "std")))]
    {
        ::libm::sqrt(x)
    }
    #[cfg(not(any(feature = "std", feature = "libm")))]
    {
        f32::sqrt(x as core::primitive::f32) as f64
    }
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use mm as f32;

#[cfg(not(feature = "fp"))]
pub use fallback as f32;
