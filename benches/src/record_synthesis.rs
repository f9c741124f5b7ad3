use chrono::NaiveDate;
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use datagen::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

const SEED: u64 = 123_456;

fn fixed_transaction_synth() -> TransactionSynthesizer {
    let clock = NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    TransactionSynthesizer::with_clock(clock, 0.6, 1_000.0)
}

/// Benchmark fixed-width transaction synthesis throughput
fn bench_transaction_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("transaction_synthesis");
    let synth = fixed_transaction_synth();

    for count in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || StdRng::seed_from_u64(SEED),
                |mut rng| {
                    for _ in 0..count {
                        black_box(synth.synthesize(&mut rng));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark profile-row synthesis (master-data draws per field)
fn bench_profile_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile_synthesis");

    for count in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let synth = CustomerSynthesizer::with_clock(
                        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                    );
                    (synth, StdRng::seed_from_u64(SEED))
                },
                |(mut synth, mut rng)| {
                    let num_corporate = corporate_count(count, 0.05);
                    for index in 0..count {
                        let kind = CustomerKind::for_index(index, num_corporate);
                        black_box(synth.profile(&mut rng, kind));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Compare per-record id generation against a pregenerated batch
fn bench_id_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("id_strategies");
    let count = 10_000;

    group.bench_function("per_record", |b| {
        b.iter_batched(
            || (IdentitySynthesizer::new(), StdRng::seed_from_u64(SEED)),
            |(mut synth, mut rng)| {
                for _ in 0..count {
                    black_box(synth.identity(&mut rng, CustomerKind::Individual));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("precomputed_batch", |b| {
        b.iter_batched(
            || (IdentitySynthesizer::new(), StdRng::seed_from_u64(SEED)),
            |(mut synth, mut rng)| {
                let ids = synth.id_batch(&mut rng, count * 2);
                for index in 0..count {
                    black_box(synth.identity_from_pool(
                        &mut rng,
                        CustomerKind::Individual,
                        index,
                        &ids[index * 2],
                        &ids[index * 2 + 1],
                    ));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_transaction_synthesis,
    bench_profile_synthesis,
    bench_id_strategies
);
criterion_main!(benches);
