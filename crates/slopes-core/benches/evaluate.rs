use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use slopes_core::evaluator::{evaluate, normalize};
use slopes_core::generator::{ProblemGenerator, RetryPolicy};
use slopes_core::{LinearProblem, ScoreState};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("clean", |b| b.iter(|| normalize(black_box("y= 2x + -5"))));

    group.bench_function("messy", |b| {
        b.iter(|| normalize(black_box("   y=\t\t 2x    +   -5   \n")))
    });

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let problem = LinearProblem::new(2, -5, 3).unwrap();
    let mut group = c.benchmark_group("evaluate");

    group.bench_function("correct", |b| {
        let mut score = ScoreState::new();
        b.iter(|| evaluate(black_box(&problem), black_box("y= -5 + 2x"), &mut score))
    });

    group.bench_function("incorrect", |b| {
        let mut score = ScoreState::new();
        b.iter(|| evaluate(black_box(&problem), black_box("y = 2x - 5"), &mut score))
    });

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for policy in [RetryPolicy::Single, RetryPolicy::Unbounded] {
        group.bench_function(policy.to_string(), |b| {
            let generator = ProblemGenerator::new(policy);
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| generator.generate(&mut rng))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_evaluate, bench_generate);
criterion_main!(benches);
