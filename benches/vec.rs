//! Vector operation benchmarks.

use divan::counter::ItemsCount;
use divan::{Bencher, black_box};
use glimmer_benches::vectors;
use glimmer_core::math::{Vec2i, vec2};

const N: usize = 1024;

#[divan::bench]
fn normalize(b: Bencher) {
    let vs = vectors(N);
    b.counter(ItemsCount::new(N)).bench_local(|| {
        for v in &vs {
            black_box(v.normalize());
        }
    });
}

#[divan::bench]
fn len(b: Bencher) {
    let vs = vectors(N);
    b.counter(ItemsCount::new(N))
        .bench_local(|| vs.iter().map(|v| v.len()).sum::<f32>());
}

#[divan::bench]
fn dot(b: Bencher) {
    let vs = vectors(N);
    b.counter(ItemsCount::new(N - 1)).bench_local(|| {
        vs.windows(2).map(|w| w[0].dot(&w[1])).sum::<f32>()
    });
}

#[divan::bench]
fn cross(b: Bencher) {
    let vs = vectors(N);
    b.counter(ItemsCount::new(N - 1)).bench_local(|| {
        for w in vs.windows(2) {
            black_box(w[0].cross(&w[1]));
        }
    });
}

#[divan::bench]
fn scale_int_by_float(b: Bencher) {
    let dims: Vec<Vec2i> = (0..N as i32).map(|i| vec2(i * 16, i * 9)).collect();
    b.counter(ItemsCount::new(N)).bench_local(|| {
        for &d in &dims {
            black_box(d * 0.75_f32);
        }
    });
}

fn main() {
    divan::main()
}
