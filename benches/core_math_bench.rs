use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trajplot::api::{TrajectoryPlotConfig, build_trajectory_figure};
use trajplot::core::{
    AxisLimits, PixelRect, Point3, TrajectoryTensor, ViewAngles, ViewProjection, equalize,
};
use trajplot::render::ColorSpec;

fn bench_equalize(c: &mut Criterion) {
    let x = AxisLimits::new(-12.5, 40.0);
    let y = AxisLimits::new(3.0, 4.0);
    let z = AxisLimits::new(-1_000.0, 250.0);

    c.bench_function("equalize_axis_limits", |b| {
        b.iter(|| equalize(black_box(x), black_box(y), black_box(z)))
    });
}

fn bench_projection_10k(c: &mut Criterion) {
    let projection = ViewProjection::new(
        ViewAngles::default(),
        [AxisLimits::new(-1.0, 1.0); 3],
        PixelRect::new(0.0, 0.0, 1920.0, 1080.0),
    )
    .expect("valid projection");

    let points: Vec<Point3> = (0..10_000)
        .map(|i| {
            let t = f64::from(i) * 1e-3;
            Point3::new(t.cos(), t.sin(), t.fract())
        })
        .collect();

    c.bench_function("projection_10k", |b| {
        b.iter(|| {
            let _ = projection
                .project_many(black_box(&points))
                .expect("projection should succeed");
        })
    });
}

fn bench_trajectory_frame(c: &mut Criterion) {
    let steps: Vec<Vec<[f64; 3]>> = (0..2_000)
        .map(|step| {
            let t = f64::from(step) * 0.01;
            (0..8)
                .map(|entity| {
                    let phase = f64::from(entity);
                    [(t + phase).cos(), (t + phase).sin(), t]
                })
                .collect()
        })
        .collect();
    let tensor = TrajectoryTensor::from_steps(&steps).expect("tensor");
    let labels: Vec<String> = (0..8).map(|entity| format!("body {entity}")).collect();
    let colors: Vec<ColorSpec> = (0..8).map(ColorSpec::cycle).collect();
    let config = TrajectoryPlotConfig::new(8.0, 6.0, true);

    c.bench_function("trajectory_frame_8x2000", |b| {
        b.iter(|| {
            let figure = build_trajectory_figure(&tensor, &labels, &colors, &config)
                .expect("figure");
            let _ = figure.build_render_frame().expect("frame");
        })
    });
}

criterion_group!(
    benches,
    bench_equalize,
    bench_projection_10k,
    bench_trajectory_frame
);
criterion_main!(benches);
