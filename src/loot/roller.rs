//! Item rolling
//!
//! Composes the rarity selector and affix roller into a single rolled
//! instance for one base item drawn from a flat table.

use rand::Rng;

use crate::items::{ItemDefinition, ItemInstance, RarityTier};
use crate::registry::LootRegistry;
use crate::rng::rng_for;
use super::affixes::roll_affixes;
use super::rarity::{roll_rarity, RarityWeights};
use super::tables::LootTable;

/// Roll one item from a flat table. Returns `None` when the table has no
/// resolvable candidates or its rarity weights sum to zero; callers treat
/// that as a normal "nothing dropped" outcome.
pub fn roll_item(
    registry: &LootRegistry,
    table: &LootTable,
    item_level: u32,
    seed: Option<u64>,
) -> Option<ItemInstance> {
    let mut rng = rng_for(seed);
    roll_item_with(registry, table, item_level, None, None, &mut rng)
}

/// Table roll with optional rarity-weight override and guaranteed floor,
/// used by the zone orchestrator for boss batches.
pub(crate) fn roll_item_with(
    registry: &LootRegistry,
    table: &LootTable,
    item_level: u32,
    weights_override: Option<&RarityWeights>,
    floor: Option<RarityTier>,
    rng: &mut impl Rng,
) -> Option<ItemInstance> {
    let base_item = pick_base_item(registry, table, rng)?;
    let weights = weights_override.unwrap_or(&table.rarities);
    roll_for_item(
        registry,
        base_item,
        weights,
        floor,
        &table.affix_pool_override,
        item_level,
        rng,
    )
}

/// Roll rarity, base scalar, and affixes for an already-selected base item.
pub(crate) fn roll_for_item(
    registry: &LootRegistry,
    base_item: &ItemDefinition,
    weights: &RarityWeights,
    floor: Option<RarityTier>,
    affix_override: &[String],
    item_level: u32,
    rng: &mut impl Rng,
) -> Option<ItemInstance> {
    let tier = roll_rarity(weights, floor, rng)?;
    let rarity = registry.rarity_for_tier(tier)?;

    let (scalar_min, scalar_max) = rarity.scalar_range();
    let scalar = scalar_min + (scalar_max - scalar_min) * rng.gen::<f32>();

    let item_level = item_level.max(1);
    let affixes = roll_affixes(registry, base_item, rarity, affix_override, item_level, rng);

    log::debug!(
        "rolled {} ({}) ilvl={} affixes={}",
        base_item.label(),
        rarity.id,
        item_level,
        affixes.len()
    );

    Some(ItemInstance {
        base_item_id: base_item.id.clone(),
        rarity_id: rarity.id.clone(),
        item_level,
        base_scalar: scalar,
        affixes,
    })
}

fn pick_base_item<'a>(
    registry: &'a LootRegistry,
    table: &LootTable,
    rng: &mut impl Rng,
) -> Option<&'a ItemDefinition> {
    // Unresolvable ids and non-positive weights drop out of the draw.
    let candidates: Vec<(&ItemDefinition, f32)> = table
        .items
        .iter()
        .filter(|e| e.weight > 0.0)
        .filter_map(|e| registry.item(&e.item).map(|def| (def, e.weight)))
        .collect();

    let total: f32 = candidates.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        return None;
    }

    let mut remaining = rng.gen_range(0.0..total);
    let mut last = None;
    for (def, weight) in &candidates {
        last = Some(*def);
        remaining -= weight;
        if remaining < 0.0 {
            break;
        }
    }
    last
}
