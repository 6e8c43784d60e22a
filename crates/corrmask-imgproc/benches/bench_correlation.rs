use corrmask_image::{Image, ImageSize};
use corrmask_imgproc::filter::{
    correlate2d, correlate2d_output_size, correlate3d, FilterConfig, Kernel2d, Kernel3d, PivotRule,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_correlation(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation");

    let size = ImageSize {
        width: 256,
        height: 256,
    };

    let channel = Image::<f32, 1>::new(
        size,
        (0..size.width * size.height).map(|x| (x % 255) as f32).collect(),
    )
    .unwrap();
    let kernel2d = Kernel2d::new([3, 3], vec![1.0, 2.0, 1.0, 0.0, 0.0, 0.0, -1.0, -2.0, -1.0]).unwrap();
    let config = FilterConfig::default();
    let out_size = correlate2d_output_size(size, &kernel2d, config.stride).unwrap();

    group.bench_function("correlate2d_3x3", |b| {
        let mut dst = Image::<f32, 1>::from_size_val(out_size, 0.0).unwrap();
        b.iter(|| {
            correlate2d(
                black_box(&channel),
                black_box(&mut dst),
                black_box(&kernel2d),
                black_box(&config),
            )
            .unwrap()
        })
    });

    let rgb = Image::<f32, 3>::new(
        size,
        (0..size.width * size.height * 3)
            .map(|x| (x % 255) as f32)
            .collect(),
    )
    .unwrap();
    let kernel3d = Kernel3d::new([3, 3, 3], vec![1.0 / 27.0; 27]).unwrap();

    group.bench_function("correlate3d_3x3x3", |b| {
        let mut dst = Image::<f32, 3>::from_size_val(size, 0.0).unwrap();
        b.iter(|| {
            correlate3d(
                black_box(&rgb),
                black_box(&mut dst),
                black_box(&kernel3d),
                black_box(PivotRule::RowParity),
            )
            .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_correlation);
criterion_main!(benches);
