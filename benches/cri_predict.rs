use criterion::{criterion_group, criterion_main, Criterion};

use scorecast::predict::{predict_match, DEFAULT_K_MAX};
use scorecast::rate::{EnvironmentAdjustment, TeamForm};

fn criterion_benchmark(c: &mut Criterion) {
    let home = TeamForm::new("home", 1.8, 0.9).with_home_advantage_factor(1.12);
    let away = TeamForm::new("away", 1.2, 1.4);
    let env = EnvironmentAdjustment::default();

    // sanity check
    let prediction = predict_match(&home, &away, &env, &env, DEFAULT_K_MAX).unwrap();
    assert!(prediction.outcome_probs.home_win > prediction.outcome_probs.away_win);

    c.bench_function("cri_predict_10", |b| {
        b.iter(|| predict_match(&home, &away, &env, &env, DEFAULT_K_MAX));
    });
    c.bench_function("cri_predict_30", |b| {
        b.iter(|| predict_match(&home, &away, &env, &env, 30));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
