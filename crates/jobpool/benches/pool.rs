//! Throughput benchmark: submit a chain and a wide fan-out/fan-in DAG
//! through the pool and measure wall-clock drain time.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jobpool::{JobId, Pool};

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("jobpool_chain");
    for n_threads in [1usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(n_threads), &n_threads, |b, &n_threads| {
            b.iter(|| {
                let mut pool = Pool::new(n_threads).unwrap();
                let mut prev: Option<JobId> = None;
                for _ in 0..1_000 {
                    let preds: Vec<JobId> = prev.into_iter().collect();
                    prev = Some(pool.add(|| {}, &preds).unwrap());
                }
                pool.wait();
            });
        });
    }
    group.finish();
}

fn bench_fan_out_fan_in(c: &mut Criterion) {
    let mut group = c.benchmark_group("jobpool_fan_out_fan_in");
    for n_threads in [1usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(n_threads), &n_threads, |b, &n_threads| {
            b.iter(|| {
                let mut pool = Pool::new(n_threads).unwrap();
                let root = pool.add(|| {}, &[]).unwrap();
                let mut middles = Vec::with_capacity(256);
                for _ in 0..256 {
                    middles.push(pool.add(|| {}, &[root]).unwrap());
                }
                pool.add(|| {}, &middles).unwrap();
                pool.wait();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chain, bench_fan_out_fan_in);
criterion_main!(benches);
