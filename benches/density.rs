use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use screen_dpi::core::{compute_density, Calibrator, Event};
use screen_dpi::config::CalibratorConfig;
use screen_dpi::math::aspect_ratio_label;
use screen_dpi::types::{CalibrationInput, LengthUnit, ScreenInfo};

const RESOLUTIONS: [(f64, f64); 5] = [
    (1366.0, 768.0),
    (1920.0, 1080.0),
    (2560.0, 1600.0),
    (3440.0, 1440.0),
    (3840.0, 2160.0),
];

/// Benchmark: both calibration paths on a Full HD screen
fn bench_compute_density(c: &mut Criterion) {
    let screen = ScreenInfo::new(1920.0, 1080.0, 1.0);
    let card = CalibrationInput::credit_card(324.0);
    let diagonal = CalibrationInput::diagonal(24.0, LengthUnit::Inch);

    c.bench_function("compute_density_card", |b| {
        b.iter(|| compute_density(black_box(&screen), black_box(&card)))
    });
    c.bench_function("compute_density_diagonal", |b| {
        b.iter(|| compute_density(black_box(&screen), black_box(&diagonal)))
    });
}

/// Benchmark: canonical shortcut versus GCD reduction
fn bench_aspect_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("aspect_ratio_label");
    for (width, height) in RESOLUTIONS {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &(width, height),
            |b, &(w, h)| b.iter(|| aspect_ratio_label(black_box(w), black_box(h))),
        );
    }
    group.finish();
}

/// Benchmark: a burst of resize notifications with a result to keep current
fn bench_resize_burst(c: &mut Criterion) {
    c.bench_function("calibrator_resize_burst", |b| {
        b.iter(|| {
            let mut calibrator =
                Calibrator::new(ScreenInfo::new(1920.0, 1080.0, 1.0), CalibratorConfig::default());
            calibrator.handle(Event::Calibrate);
            for (width, height) in RESOLUTIONS {
                calibrator.handle(Event::ScreenChanged(ScreenInfo::new(width, height, 1.0)));
            }
            black_box(calibrator.snapshot())
        })
    });
}

criterion_group!(benches, bench_compute_density, bench_aspect_ratio, bench_resize_burst);
criterion_main!(benches);
