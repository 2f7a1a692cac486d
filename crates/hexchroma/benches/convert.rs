use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexchroma::{convert, Cmyk, Hsl, Hsv, Lab, Lch, LinearRgb, Oklab, Oklch, Srgb, Xyz};

const COLORS: [&str; 4] = ["#FF5733", "3178ea", "#000000", "#808080"];

pub fn run_benchmarks(c: &mut Criterion) {
    c.bench_function("convert", |b| {
        b.iter(|| {
            for color in COLORS {
                let _ = black_box(convert(black_box(color)));
            }
        })
    });

    c.bench_function("cards", |b| {
        let conversions: Vec<_> = COLORS.iter().filter_map(|c| convert(c).ok()).collect();
        b.iter(|| {
            for conversion in &conversions {
                black_box(conversion.cards());
            }
        })
    });

    // Compare the two branches of the pipeline without parsing.
    let colors: Vec<Srgb> = COLORS.iter().filter_map(|c| c.parse().ok()).collect();
    let mut group = c.benchmark_group("branch");

    group.bench_function("cie", |b| {
        b.iter(|| {
            for srgb in &colors {
                let xyz = Xyz::from(LinearRgb::from(black_box(*srgb)));
                black_box(Lch::from(Lab::from(xyz)));
                black_box(Oklch::from(Oklab::from(xyz)));
            }
        })
    });

    group.bench_function("cylindrical", |b| {
        b.iter(|| {
            for srgb in &colors {
                let srgb = black_box(*srgb);
                black_box(Hsl::from(srgb));
                black_box(Hsv::from(srgb));
                black_box(Cmyk::from(srgb));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
