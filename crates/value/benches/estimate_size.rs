use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use warden_value::{DynamicValue, Property, ValueLimits, estimate_size, try_depth};

fn request_payload(width: usize) -> DynamicValue {
    let tags = DynamicValue::array((0..width).map(|i| DynamicValue::text(format!("tag-{i}"))));
    let attrs = DynamicValue::map(
        (0..width).map(|i| (format!("attr{i}"), DynamicValue::U64(i as u64))),
    );
    DynamicValue::class([
        Property::new("owner", "alice"),
        Property::immutable("tags", tags),
        Property::new("attrs", attrs),
        Property::new("scores", DynamicValue::FloatArray(vec![0.5; width])),
    ])
}

fn bench_estimate_size(c: &mut Criterion) {
    let small = request_payload(8);
    let large = request_payload(1_000);

    c.bench_function("estimate_size/small", |b| {
        b.iter(|| estimate_size(black_box(&small)));
    });
    c.bench_function("estimate_size/large", |b| {
        b.iter(|| estimate_size(black_box(&large)));
    });
    c.bench_function("try_depth/large", |b| {
        let limits = ValueLimits::strict();
        b.iter(|| try_depth(black_box(&large), &limits));
    });
}

criterion_group!(benches, bench_estimate_size);
criterion_main!(benches);
