//! Battle loop throughput: time per battle for short, long and capped fights.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use pokebattle::combat::{run_battle, BattleConfig, Combatant, SeededOrder};

fn bench_battles(c: &mut Criterion) {
    let mut group = c.benchmark_group("battle");
    group.sample_size(100);

    // Typical base stats, a handful of rounds
    group.bench_function("starters", |b| {
        b.iter_batched(
            || {
                (
                    Combatant::new("charmander", 39, 52),
                    Combatant::new("squirtle", 44, 48),
                )
            },
            |(home, away)| {
                black_box(run_battle(
                    home,
                    away,
                    &mut SeededOrder::new(7),
                    &BattleConfig::default(),
                ))
            },
            BatchSize::SmallInput,
        )
    });

    // Blissey-like HP against a minimal attack stat: hundreds of rounds
    group.bench_function("long_attrition", |b| {
        b.iter_batched(
            || {
                (
                    Combatant::new("blissey", 255, 10),
                    Combatant::new("chansey", 250, 5),
                )
            },
            |(home, away)| {
                black_box(run_battle(
                    home,
                    away,
                    &mut SeededOrder::new(7),
                    &BattleConfig::default(),
                ))
            },
            BatchSize::SmallInput,
        )
    });

    // Zero attack on both sides runs to the round cap
    group.bench_function("stalemate_to_cap", |b| {
        b.iter_batched(
            || (Combatant::new("a", 10, 0), Combatant::new("b", 10, 0)),
            |(home, away)| {
                black_box(run_battle(
                    home,
                    away,
                    &mut SeededOrder::new(7),
                    &BattleConfig::default(),
                ))
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_battles);
criterion_main!(benches);
