//! Shared inputs for the `glimmer` benchmarks.

use glimmer_core::math::{Mat4, Vec3f, degs, rotate, translate, vec3};

/// Returns `n` assorted non-zero vectors with components in about ±1000.
///
/// The sequence is deterministic so that runs are comparable.
pub fn vectors(n: usize) -> Vec<Vec3f> {
    (0..n)
        .map(|i| {
            let i = i as f32;
            vec3(
                (i * 37.3) % 2000.0 - 999.5,
                (i * 71.9) % 1500.0 - 749.5,
                (i * 13.1) % 1000.0 + 0.5,
            )
        })
        .collect()
}

/// Returns `n` assorted rigid transforms.
pub fn transforms(n: usize) -> Vec<Mat4> {
    vectors(n)
        .into_iter()
        .enumerate()
        .map(|(i, v)| translate(v) * rotate(v, degs(i as f32 * 7.0)))
        .collect()
}
