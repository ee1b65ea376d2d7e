use criterion::{black_box, criterion_group, criterion_main, Criterion};

use abyssloot::data::defaults::{default_catalog, default_loot_table, default_zone_table};
use abyssloot::{roll_item, roll_zone, EnemyTier, LootRegistry};

fn bench_rolls(c: &mut Criterion) {
    let registry = LootRegistry::from_catalog(default_catalog());
    let table = default_loot_table();
    let zone = default_zone_table();

    c.bench_function("roll_item", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(roll_item(&registry, &table, 8, Some(seed)))
        })
    });

    c.bench_function("roll_zone_mini_boss", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(roll_zone(
                &registry,
                &zone,
                EnemyTier::MiniBoss,
                Some(seed),
                Some(seed ^ 0xABCD),
            ))
        })
    });
}

criterion_group!(benches, bench_rolls);
criterion_main!(benches);
