use criterion::{Criterion, criterion_group, criterion_main};
use ohm_resistor::{ColorTable, calculate};
use serde_json::json;
use std::hint::black_box;

fn bench_calculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");
    let table = ColorTable::standard();

    let bodies = [
        ("four_band", json!({"firstBand": "red", "secondBand": "red", "exponentBand": "orange", "toleranceBand": "gold"})),
        (
            "five_band",
            json!({"firstBand": "green", "secondBand": "blue", "thirdBand": "black", "exponentBand": "black", "toleranceBand": "brown"}),
        ),
        ("invalid", json!({"firstBand": "transparent", "toleranceBand": 5})),
    ];

    for (label, body) in bodies {
        let fields = body.as_object().cloned().unwrap_or_default();
        group.bench_function(label, |b| {
            b.iter(|| {
                let _ = calculate(black_box(&table), black_box(&fields));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_calculate);
criterion_main!(benches);
