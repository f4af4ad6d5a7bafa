use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rust_decimal::Decimal;
use stockpulse_analytics::compute_analytics;
use stockpulse_inventory::Item;

fn synthetic_items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| {
            Item::new(
                format!("Item-{i:05}"),
                format!("SKU-{i:05}"),
                format!("Category-{}", i % 12),
                (i % 200) as i64,
                10,
                Decimal::from((i % 90) as i64 + 1),
            )
        })
        .collect()
}

fn bench_snapshot_computation(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_computation");

    for &size in &[100usize, 1_000, 10_000] {
        let items = synthetic_items(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| compute_analytics(black_box(items), black_box(&[])));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_snapshot_computation);
criterion_main!(benches);
