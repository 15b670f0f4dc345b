use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_primer::equity::{CardsToCome, EquityEstimator, EstimateMethod, OutsQuery};
use rand::{rngs::StdRng, SeedableRng};

fn bench_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_equity");
    let estimator = EquityEstimator::default();
    for method in EstimateMethod::all() {
        let query = OutsQuery {
            outs: 9,
            cards_to_come: CardsToCome::Two,
            method,
        };
        group.bench_with_input(BenchmarkId::from_parameter(method), &query, |b, query| {
            let mut rng = StdRng::seed_from_u64(420);
            b.iter(|| estimator.estimate(query, &mut rng))
        });
    }
    group.finish();
}

fn bench_monte_carlo_trials(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo_trials");
    for trials in [1_000, 20_000, 100_000] {
        let Ok(estimator) = EquityEstimator::new(trials) else {
            continue;
        };
        let query = OutsQuery {
            outs: 13,
            cards_to_come: CardsToCome::Two,
            method: EstimateMethod::MonteCarlo,
        };
        group.bench_with_input(BenchmarkId::from_parameter(trials), &query, |b, query| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| estimator.estimate(query, &mut rng))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_methods, bench_monte_carlo_trials);
criterion_main!(benches);
