//! Benchmarks for the block transforms
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pixlab_image::gradient_gray;
use pixlab_transform::{
    coeff_plane_len, dct8x8_forward, dct8x8_forward_separable, dct_plane, dct_plane_par,
    dct_plane_separable, quant_table_for_quality, requantize_plane,
};

fn bench_block_dct(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT 8x8 block");

    let input: [f32; 64] = core::array::from_fn(|i| (i as f32) / 64.0);

    group.bench_function("reference", |b| {
        b.iter(|| {
            let mut output = [0.0f32; 64];
            dct8x8_forward(black_box(&input), black_box(&mut output));
        });
    });

    group.bench_function("separable", |b| {
        b.iter(|| {
            let mut output = [0.0f32; 64];
            dct8x8_forward_separable(black_box(&input), black_box(&mut output));
        });
    });

    group.finish();
}

fn bench_plane_dct(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT plane");

    for size in [64usize, 256, 512] {
        let plane = gradient_gray(size as u32, size as u32).unwrap();
        let samples = plane.as_slice().to_vec();

        group.bench_with_input(BenchmarkId::new("reference", size), &size, |b, &s| {
            let mut output = vec![0.0f32; coeff_plane_len(s, s)];
            b.iter(|| dct_plane(black_box(&samples), s, s, black_box(&mut output)));
        });

        group.bench_with_input(BenchmarkId::new("separable", size), &size, |b, &s| {
            let mut output = vec![0.0f32; coeff_plane_len(s, s)];
            b.iter(|| dct_plane_separable(black_box(&samples), s, s, black_box(&mut output)));
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |b, &s| {
            let mut output = vec![0.0f32; coeff_plane_len(s, s)];
            b.iter(|| dct_plane_par(black_box(&samples), s, s, black_box(&mut output)));
        });
    }

    group.finish();
}

fn bench_quantization(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quantization");

    let size = 256usize;
    let plane = gradient_gray(size as u32, size as u32).unwrap();
    let mut coeffs = vec![0.0f32; coeff_plane_len(size, size)];
    dct_plane_separable(plane.as_slice(), size, size, &mut coeffs);
    let table = quant_table_for_quality(90.0);

    group.bench_function("requantize_256x256", |b| {
        b.iter(|| {
            let mut work = coeffs.clone();
            requantize_plane(black_box(&mut work), size, size, black_box(&table));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_block_dct, bench_plane_dct, bench_quantization);
criterion_main!(benches);
