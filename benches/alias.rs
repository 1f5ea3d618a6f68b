use alias_sampler::{AliasSampler, FrequencyTable};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

fn gen_weights(n: usize) -> Vec<f64> {
    let mut rng = Pcg32::seed_from_u64(777);
    (0..n).map(|_| 0.1 + rng.random::<f64>()).collect()
}

fn bench_alias_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias_build");
    for &n in &[2usize, 8, 64, 256, 1024] {
        let weights = gen_weights(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("from_weights_n={n}"), |b| {
            b.iter(|| black_box(AliasSampler::from_weights(black_box(weights.iter().copied()))).unwrap());
        });

        let mut sampler = AliasSampler::from_weights(weights.iter().copied()).unwrap();
        group.bench_function(format!("refresh_n={n}"), |b| {
            b.iter(|| {
                sampler.refresh();
                black_box(sampler.len())
            });
        });
    }
    group.finish();
}

fn bench_alias_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias_sample");
    const DRAWS_PER_ITER: usize = 1024;

    for &n in &[2usize, 8, 64, 256, 1024] {
        let sampler = AliasSampler::from_weights(gen_weights(n)).unwrap();
        let table = FrequencyTable::from_pairs((0..n).zip(gen_weights(n))).unwrap();
        group.throughput(Throughput::Elements(DRAWS_PER_ITER as u64));

        group.bench_function(format!("sample_n={n}"), |b| {
            b.iter_batched_ref(
                || Pcg32::seed_from_u64(999),
                |rng| {
                    let mut s = 0usize;
                    for _ in 0..DRAWS_PER_ITER {
                        s ^= sampler.sample(rng).unwrap_or(0);
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("table_sample_n={n}"), |b| {
            b.iter_batched_ref(
                || Pcg32::seed_from_u64(1001),
                |rng| {
                    let mut s = 0usize;
                    for _ in 0..DRAWS_PER_ITER {
                        s ^= table.sample(rng).copied().unwrap_or(0);
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(alias, bench_alias_build, bench_alias_sample);
criterion_main!(alias);
