use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use cutlist::entities::Part;
use cutlist::util::{NestingConfig, SortStrategy};
use skyline::nest;

criterion_main!(benches);
criterion_group!(benches, nest_bench);

const N_PARTS: [usize; 3] = [50, 200, 800];

/// Deterministic mix of cabinet-sized parts
fn create_parts(n: usize) -> Vec<Part> {
    const SIZES: [(f32, f32); 6] = [
        (560.0, 720.0),
        (764.0, 560.0),
        (764.0, 100.0),
        (396.0, 715.0),
        (796.0, 176.0),
        (300.0, 300.0),
    ];
    (0..n)
        .map(|i| {
            let (w, h) = SIZES[i % SIZES.len()];
            Part::new(format!("p{i}"), w, h)
        })
        .collect()
}

/// Benchmark complete nesting runs for an increasing number of parts, for every sort strategy.
fn nest_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("nest");
    for strategy in SortStrategy::ALL {
        let config = NestingConfig {
            sort_strategy: strategy,
            ..NestingConfig::default()
        };
        for n in N_PARTS {
            let parts = create_parts(n);
            group.throughput(criterion::Throughput::Elements(n as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), n),
                &parts,
                |b, parts| b.iter(|| nest(parts, &config).unwrap()),
            );
        }
    }
    group.finish();
}
