//! Benchmarks for the daily simulation step.
//!
//! Covers a full scripted game to victory and long idle stretches, the two
//! shapes of play that dominate the engine's runtime.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use hamlet::{Action, BuilderPolicy, SimConfig, Village};

/// A complete game that ends with a castle on day 72.
fn victory_script() -> Vec<Action> {
    let mut script = Vec::new();
    for (i, job) in ["farmer", "farmer", "lumberjack", "miner", "lumberjack", "builder"]
        .iter()
        .enumerate()
    {
        script.push(Action::add_worker(&format!("Robert{i}"), job));
    }
    script.extend(std::iter::repeat_n(Action::Day, 3));
    script.push(Action::add_project("House"));
    script.extend(std::iter::repeat_n(Action::Day, 3));
    script.push(Action::add_worker("Martin1", "miner"));
    script.push(Action::add_worker("Martin2", "miner"));
    script.push(Action::add_project("Woodmill"));
    script.extend(std::iter::repeat_n(Action::Day, 5));
    for _ in 0..2 {
        script.push(Action::add_project("Quarry"));
        script.extend(std::iter::repeat_n(Action::Day, 6));
    }
    script.push(Action::add_project("Castle"));
    script.extend(std::iter::repeat_n(Action::Day, 49));
    script
}

fn bench_victory_game(c: &mut Criterion) {
    let script = victory_script();

    c.bench_function("victory_game", |b| {
        b.iter(|| {
            let mut village = Village::new();
            let accepted = village.run(black_box(&script));
            black_box((accepted, village.is_game_over()))
        });
    });
}

fn bench_busy_days(c: &mut Criterion) {
    let config = SimConfig {
        builder_policy: BuilderPolicy::OnePerProject,
        ..SimConfig::default()
    };
    let mut seed = Village::with_config(config).expect("default config is valid");
    seed.set_food(1_000_000);
    seed.set_wood(1_000);
    seed.set_metal(1_000);
    for (i, job) in ["farmer", "builder", "builder", "lumberjack", "miner", "builder"]
        .iter()
        .enumerate()
    {
        seed.add_worker(&format!("W{i}"), job);
    }
    for project in ["House", "Farm", "Woodmill", "Quarry", "House"] {
        seed.add_project(project);
    }

    c.bench_function("busy_days_100", |b| {
        b.iter_batched(
            || seed.clone(),
            |mut village| {
                for _ in 0..100 {
                    black_box(village.day());
                }
                village
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_idle_days(c: &mut Criterion) {
    c.bench_function("idle_days_1000", |b| {
        b.iter(|| {
            let mut village = Village::new();
            for _ in 0..1000 {
                black_box(village.day());
            }
            black_box(village.days_gone())
        });
    });
}

criterion_group!(benches, bench_victory_game, bench_busy_days, bench_idle_days);
criterion_main!(benches);
