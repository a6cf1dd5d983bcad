use std::hint::black_box;

use bench::apply_small_runtime_config;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use factorial::{FactorialError, MAX_INPUT, factorial, factorial_iterative};

fn bench_factorial(c: &mut Criterion) {
    const INPUTS: [i64; 4] = [5, 12, 20, MAX_INPUT];

    type FactorialFn = fn(i64) -> Result<u128, FactorialError>;
    let impls: [(&str, FactorialFn); 2] =
        [("recursive", factorial), ("iterative", factorial_iterative)];

    let mut group = c.benchmark_group("factorial");
    apply_small_runtime_config(&mut group);

    for &n in &INPUTS {
        for &(name, func) in &impls {
            group.bench_function(BenchmarkId::new(name, n), |bencher| {
                bencher.iter(|| black_box(func(black_box(n))))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_factorial);
criterion_main!(benches);
