use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use streampool_engine::{PoolEngine, RewardAccumulator};
use streampool_nullables::NullCustody;
use streampool_types::{AccountId, PoolParams, Timestamp};

fn populated_pool(participants: usize) -> (PoolEngine, NullCustody, Timestamp) {
    let owner = AccountId::new("owner");
    let mut engine = PoolEngine::new(PoolParams::new(1_000), owner, Timestamp::new(0));
    let custody = NullCustody::new();
    custody.fund_rewards(u128::MAX / 4);

    for i in 0..participants {
        let id = AccountId::new(format!("participant-{i}"));
        custody.fund_account(&id, u128::MAX / 4);
        custody.approve(&id, u128::MAX / 4);
        engine
            .deposit(&custody, &id, 1_000 + i as u128, Timestamp::new(i as u64))
            .unwrap();
    }
    let now = Timestamp::new(participants as u64 + 1_000);
    (engine, custody, now)
}

/// Deposits must stay O(1) regardless of how many participants the pool
/// already tracks.
fn bench_deposit(c: &mut Criterion) {
    let mut group = c.benchmark_group("deposit");

    for participants in [100usize, 1_000, 10_000] {
        let (mut engine, custody, now) = populated_pool(participants);
        let id = AccountId::new("participant-0");

        group.bench_with_input(
            BenchmarkId::new("settle_and_stake", participants),
            &participants,
            |b, _| {
                b.iter(|| {
                    engine
                        .deposit(&custody, black_box(&id), black_box(1), now)
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_claim(c: &mut Criterion) {
    let mut group = c.benchmark_group("claim");

    for participants in [100usize, 1_000, 10_000] {
        let (mut engine, custody, now) = populated_pool(participants);
        let id = AccountId::new("participant-0");

        group.bench_with_input(
            BenchmarkId::new("settle_and_pay", participants),
            &participants,
            |b, _| {
                b.iter(|| engine.claim(&custody, black_box(&id), now).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_account_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("account_status");

    for participants in [100usize, 1_000, 10_000] {
        let (engine, _custody, now) = populated_pool(participants);
        let id = AccountId::new("participant-0");

        group.bench_with_input(
            BenchmarkId::new("read_only_settlement", participants),
            &participants,
            |b, _| {
                b.iter(|| black_box(engine.account_status(&id, &id, now).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_index_projection(c: &mut Criterion) {
    let mut acc = RewardAccumulator::new(1_000, Timestamp::new(0));
    acc.total_weight = 5_000_000;
    let now = Timestamp::new(100_000);

    c.bench_function("accumulator_index_at", |b| {
        b.iter(|| black_box(acc.index_at(black_box(now)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_deposit,
    bench_claim,
    bench_account_status,
    bench_index_projection,
);
criterion_main!(benches);
