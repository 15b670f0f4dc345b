use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_primer::variance::{simulate_bankroll, BankrollSimRequest};
use rand::{rngs::StdRng, SeedableRng};

fn bench_trial_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_bankroll");
    group.sample_size(20);
    for trials in [50, 500, 5_000] {
        let request = BankrollSimRequest::new().trial_count(trials);
        group.bench_with_input(
            BenchmarkId::new("trials", trials),
            &request,
            |b, request| {
                let mut rng = StdRng::seed_from_u64(2);
                b.iter(|| simulate_bankroll(request, &mut rng))
            },
        );
    }
    group.finish();
}

fn bench_long_trajectories(c: &mut Criterion) {
    let request = BankrollSimRequest::new().total_hands(100_000).trial_count(100);
    c.bench_function("simulate_bankroll_100k_hands", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        b.iter(|| simulate_bankroll(&request, &mut rng))
    });
}

criterion_group!(benches, bench_trial_count, bench_long_trajectories);
criterion_main!(benches);
