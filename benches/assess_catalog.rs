use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crop_risk_rust::{builtin_catalog, CurrentConditions, Month, PlotRequest, RiskEngine};
use std::sync::Arc;

fn bench_assess(c: &mut Criterion) {
    let engine = RiskEngine::new(Arc::new(builtin_catalog().unwrap())).unwrap();
    let planted = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let reference = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
    let conditions = CurrentConditions::new(Month::August, 27.0, 92.0).unwrap();

    c.bench_function("assess_builtin_catalog", |b| {
        b.iter(|| engine.assess_at(black_box(planted), black_box(&conditions), reference))
    });

    let plots: Vec<PlotRequest> = (0..1_000)
        .map(|i| PlotRequest {
            plot_id: format!("plot-{}", i),
            plantation_date: planted,
            conditions: CurrentConditions::new(Month::ALL[i % 12], 15.0 + (i % 20) as f64, (i % 100) as f64)
                .unwrap(),
        })
        .collect();

    c.bench_function("assess_1000_plots", |b| {
        b.iter(|| engine.assess_plots(black_box(&plots)))
    });
}

criterion_group!(benches, bench_assess);
criterion_main!(benches);
