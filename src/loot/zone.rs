//! Zone drop orchestration
//!
//! Fans one spawn/drop event out into independent item rolls across the
//! zone and materials pools, with boss overrides for mini-boss encounters.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::items::{ItemDefinition, ItemInstance, RarityTier};
use crate::registry::LootRegistry;
use crate::rng::{derive_seed, rng_for};
use super::rarity::RarityWeights;
use super::roller::roll_for_item;
use super::tables::{EnemyTier, LevelRange, ZoneLootTable};

// Per-pool stream tags keep the two pools on disjoint seed streams even
// when the caller passes the same seed for both.
const ZONE_POOL_STREAM: u64 = 0x5a4f_4e45;
const MATERIALS_POOL_STREAM: u64 = 0x4d41_5453;

/// One produced drop. Legacy zones resolve authored definitions directly;
/// migrated zones produce rolled instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LootDrop {
    Legacy(ItemDefinition),
    Rolled(ItemInstance),
}

impl LootDrop {
    pub fn base_item_id(&self) -> &str {
        match self {
            LootDrop::Legacy(def) => &def.id,
            LootDrop::Rolled(inst) => &inst.base_item_id,
        }
    }

    pub fn is_rolled(&self) -> bool {
        matches!(self, LootDrop::Rolled(_))
    }
}

struct BatchPlan {
    zone_count: u32,
    materials_count: u32,
    floor: Option<RarityTier>,
}

fn plan_batch(table: &ZoneLootTable, tier: EnemyTier) -> BatchPlan {
    if tier == EnemyTier::MiniBoss && table.boss.enabled {
        BatchPlan {
            zone_count: table.boss.zone_rolls,
            materials_count: if table.roll_materials { table.boss.materials_rolls } else { 0 },
            floor: Some(table.boss.guaranteed_min_rarity),
        }
    } else {
        BatchPlan {
            zone_count: table.zone_rolls_for(tier),
            materials_count: table.materials_rolls_for(tier),
            floor: None,
        }
    }
}

/// Roll a full drop batch for one spawn/drop event. Each roll advances an
/// independently derived seed, so the zone and materials pools never share
/// random state and a fixed `(table, tier, seed_a, seed_b)` tuple always
/// reproduces the same batch.
pub fn roll_zone(
    registry: &LootRegistry,
    table: &ZoneLootTable,
    tier: EnemyTier,
    seed_a: Option<u64>,
    seed_b: Option<u64>,
) -> Vec<ItemInstance> {
    let plan = plan_batch(table, tier);
    let weights = table.weights_for(tier);
    let levels = table.item_levels_for(tier);

    let mut out = Vec::new();
    roll_pool(
        registry,
        &table.zone_pool,
        plan.zone_count,
        weights,
        plan.floor,
        &table.affix_pool_override,
        levels,
        seed_a,
        ZONE_POOL_STREAM,
        &mut out,
    );
    roll_pool(
        registry,
        &table.materials_pool,
        plan.materials_count,
        weights,
        plan.floor,
        &table.affix_pool_override,
        levels,
        seed_b,
        MATERIALS_POOL_STREAM,
        &mut out,
    );
    out
}

/// Legacy flat variant: the same fan-out, but each roll resolves a plain
/// definition with no rarity or affixes.
pub fn roll_zone_legacy(
    registry: &LootRegistry,
    table: &ZoneLootTable,
    tier: EnemyTier,
    seed_a: Option<u64>,
    seed_b: Option<u64>,
) -> Vec<ItemDefinition> {
    let plan = plan_batch(table, tier);

    let mut out = Vec::new();
    pick_pool_legacy(registry, &table.zone_pool, plan.zone_count, seed_a, ZONE_POOL_STREAM, &mut out);
    pick_pool_legacy(
        registry,
        &table.materials_pool,
        plan.materials_count,
        seed_b,
        MATERIALS_POOL_STREAM,
        &mut out,
    );
    out
}

/// Single entry point returning the drop sum type: dispatches on the
/// table's `legacy_mode` so callers pattern-match one shape.
pub fn roll_zone_drops(
    registry: &LootRegistry,
    table: &ZoneLootTable,
    tier: EnemyTier,
    seed_a: Option<u64>,
    seed_b: Option<u64>,
) -> Vec<LootDrop> {
    if table.legacy_mode {
        roll_zone_legacy(registry, table, tier, seed_a, seed_b)
            .into_iter()
            .map(LootDrop::Legacy)
            .collect()
    } else {
        roll_zone(registry, table, tier, seed_a, seed_b)
            .into_iter()
            .map(LootDrop::Rolled)
            .collect()
    }
}

#[allow(clippy::too_many_arguments)]
fn roll_pool(
    registry: &LootRegistry,
    pool: &[String],
    count: u32,
    weights: &RarityWeights,
    floor: Option<RarityTier>,
    affix_override: &[String],
    levels: LevelRange,
    seed: Option<u64>,
    stream: u64,
    out: &mut Vec<ItemInstance>,
) {
    if count == 0 {
        return;
    }

    let candidates = resolve_pool(registry, pool);
    if candidates.is_empty() {
        return;
    }

    for index in 0..count {
        let mut rng = pool_rng(seed, stream, index);

        let base_item = candidates[rng.gen_range(0..candidates.len())];
        let item_level = rng.gen_range(levels.clamp_min()..=levels.clamp_max());

        if let Some(inst) = roll_for_item(
            registry,
            base_item,
            weights,
            floor,
            affix_override,
            item_level,
            &mut rng,
        ) {
            out.push(inst);
        }
    }
}

fn pick_pool_legacy(
    registry: &LootRegistry,
    pool: &[String],
    count: u32,
    seed: Option<u64>,
    stream: u64,
    out: &mut Vec<ItemDefinition>,
) {
    if count == 0 {
        return;
    }

    let candidates = resolve_pool(registry, pool);
    if candidates.is_empty() {
        return;
    }

    for index in 0..count {
        let mut rng = pool_rng(seed, stream, index);
        out.push(candidates[rng.gen_range(0..candidates.len())].clone());
    }
}

fn resolve_pool<'a>(registry: &'a LootRegistry, pool: &[String]) -> Vec<&'a ItemDefinition> {
    let candidates: Vec<&ItemDefinition> =
        pool.iter().filter_map(|id| registry.item(id)).collect();
    if candidates.len() < pool.len() {
        log::debug!("{} pool entries did not resolve", pool.len() - candidates.len());
    }
    candidates
}

fn pool_rng(seed: Option<u64>, stream: u64, index: u32) -> rand::rngs::StdRng {
    match seed {
        Some(s) => rng_for(Some(derive_seed(s, stream, u64::from(index)))),
        None => rng_for(None),
    }
}
