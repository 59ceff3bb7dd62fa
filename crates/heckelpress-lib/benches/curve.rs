use criterion::{criterion_group, criterion_main, Criterion};
use heckelpress_lib::{
    calculate, CalculationRequest, CurveConfig, CurveSampler, DensityInput, Geometry,
    MaterialConstants,
};
use once_cell::sync::Lazy;
use std::hint::black_box;

static MATERIAL: Lazy<MaterialConstants> =
    Lazy::new(|| MaterialConstants::new("Iron", 2.1e-3, 0.25, 7.87).expect("valid material"));

static REQUEST: Lazy<CalculationRequest> = Lazy::new(|| CalculationRequest {
    material: MATERIAL.clone(),
    geometry: Geometry::solid(10.0, 5.0),
    density: DensityInput::Relative { fraction: 0.85 },
    safety_factor: 1.2,
    curve: CurveConfig {
        start: 0.5,
        end: 0.99,
        samples: 300,
    },
});

fn benchmark_curve(c: &mut Criterion) {
    c.bench_function("curve_300_samples", |b| {
        b.iter(|| {
            let sampler = CurveSampler::new(
                &MATERIAL,
                78.54,
                1.2,
                CurveConfig {
                    start: 0.5,
                    end: 0.99,
                    samples: 300,
                },
            )
            .expect("valid sampler");
            black_box(sampler.count())
        });
    });

    c.bench_function("full_calculation", |b| {
        let request = &*REQUEST;
        b.iter(|| {
            let result = calculate(request).expect("valid request");
            black_box(result.tonnage)
        });
    });
}

criterion_group!(benches, benchmark_curve);
criterion_main!(benches);
