use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nullsim::{Direction, HypothesisTest, Sample};

fn bench_null_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("null_distribution");
    group.sample_size(20);

    let numeric = Sample::numeric((0..100).map(|i| 200.0 + (i % 17) as f64).collect::<Vec<_>>());
    group.bench_function("mean_bootstrap_1k", |b| {
        b.iter(|| {
            let result = HypothesisTest::mean(205.0)
                .replicates(1_000)
                .seed(42)
                .run(black_box(&numeric))
                .unwrap();
            black_box(result.p_value)
        });
    });

    group.bench_function("median_bootstrap_1k", |b| {
        b.iter(|| {
            let result = HypothesisTest::median(205.0)
                .replicates(1_000)
                .seed(42)
                .run(black_box(&numeric))
                .unwrap();
            black_box(result.p_value)
        });
    });

    let categorical = Sample::categorical(
        (0..200).map(|i| if i % 10 == 0 { "died" } else { "survived" }),
    );
    group.bench_function("proportion_null_model_1k", |b| {
        b.iter(|| {
            let result = HypothesisTest::proportion(0.08, "died")
                .direction(Direction::Greater)
                .replicates(1_000)
                .seed(42)
                .run(black_box(&categorical))
                .unwrap();
            black_box(result.p_value)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_null_distributions);
criterion_main!(benches);
