//! Cell store benchmarks.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use letrec_mem::Store;

fn bench_alloc(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_alloc");

    for size in [100, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut store = Store::new();
                for i in 0..size {
                    black_box(store.alloc(i as i64));
                }
            });
        });
    }

    group.finish();
}

fn bench_load_store(c: &mut Criterion) {
    c.bench_function("store_load_store", |b| {
        let mut store = Store::new();
        let refs: Vec<_> = (0..1_000).map(|i| store.alloc(i as i64)).collect();

        b.iter(|| {
            for &r in &refs {
                let v = *store.load(r).unwrap_or(&0);
                black_box(store.store(r, v - 1).ok());
            }
        });
    });
}

criterion_group!(benches, bench_alloc, bench_load_store);
criterion_main!(benches);
