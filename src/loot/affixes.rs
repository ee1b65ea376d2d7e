//! Affix rolling
//!
//! Tag-filtered, duplicate-free affix selection sized by rarity, with
//! item-level scaled magnitudes.

use std::collections::HashSet;

use rand::Rng;

use crate::items::{AffixDefinition, AffixRoll, ItemDefinition, RarityDefinition, StatType};
use crate::registry::LootRegistry;

/// Build the eligible affix pool for `item`: the override list when one is
/// authored, otherwise every registry affix. Ineligible entries (zero
/// weight, wrong slot, disjoint tags) and unresolvable ids are skipped.
pub fn eligible_affix_pool<'a>(
    registry: &'a LootRegistry,
    item: &ItemDefinition,
    override_ids: &[String],
) -> Vec<&'a AffixDefinition> {
    let mut pool: Vec<&AffixDefinition> = if override_ids.is_empty() {
        registry.all_affixes().filter(|a| a.applies_to(item)).collect()
    } else {
        override_ids
            .iter()
            .filter_map(|id| registry.affix(id))
            .filter(|a| a.applies_to(item))
            .collect()
    };

    // Map iteration order is not stable; sort so the weighted walk consumes
    // the seed stream identically on every run.
    pool.sort_by(|a, b| a.id.cmp(&b.id));
    pool
}

/// Roll the affix set for one item: a count drawn from the rarity's range
/// (clamped to the pool size), then weight-proportional sampling without
/// replacement. No two rolls share a stat, which also keeps affix ids
/// unique. An empty pool yields an empty list, not an error.
pub fn roll_affixes(
    registry: &LootRegistry,
    item: &ItemDefinition,
    rarity: &RarityDefinition,
    override_ids: &[String],
    item_level: u32,
    rng: &mut impl Rng,
) -> Vec<AffixRoll> {
    let (min, max) = rarity.affix_range();
    let count = rng.gen_range(u32::from(min)..=u32::from(max));
    if count == 0 {
        return Vec::new();
    }

    let pool = eligible_affix_pool(registry, item, override_ids);
    if pool.is_empty() {
        return Vec::new();
    }
    let count = (count as usize).min(pool.len());

    let mut used_stats: HashSet<StatType> = HashSet::new();
    let mut rolls = Vec::with_capacity(count);

    for _ in 0..count {
        let Some(affix) = pick_weighted(&pool, &used_stats, rng) else {
            break;
        };
        used_stats.insert(affix.stat);

        let unit: f32 = rng.gen();
        rolls.push(AffixRoll {
            affix_id: affix.id.clone(),
            value: affix.magnitude(item_level, unit),
        });
    }

    rolls
}

fn pick_weighted<'a>(
    pool: &[&'a AffixDefinition],
    used_stats: &HashSet<StatType>,
    rng: &mut impl Rng,
) -> Option<&'a AffixDefinition> {
    let mut total = 0.0f32;
    for affix in pool {
        if affix.weight <= 0.0 || used_stats.contains(&affix.stat) {
            continue;
        }
        total += affix.weight;
    }
    if total <= 0.0 {
        return None;
    }

    let mut remaining = rng.gen_range(0.0..total);
    let mut last = None;
    for affix in pool {
        if affix.weight <= 0.0 || used_stats.contains(&affix.stat) {
            continue;
        }
        last = Some(*affix);
        remaining -= affix.weight;
        if remaining < 0.0 {
            break;
        }
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::data::defaults::default_catalog;
    use crate::items::{AffixTag, EquipSlot, RarityTier};

    fn registry() -> LootRegistry {
        LootRegistry::from_catalog(default_catalog())
    }

    fn make_item(tags: Vec<AffixTag>) -> ItemDefinition {
        ItemDefinition {
            id: "Test_Blade".to_string(),
            display_name: "Test Blade".to_string(),
            description: String::new(),
            stackable: false,
            untradeable: false,
            slot: EquipSlot::RightHand,
            occupies_slots: Vec::new(),
            base_stats: Vec::new(),
            allowed_affix_tags: tags,
            set_id: None,
        }
    }

    fn rarity_def(registry: &LootRegistry, tier: RarityTier) -> RarityDefinition {
        registry.rarity(tier.id()).cloned().unwrap()
    }

    #[test]
    fn test_disjoint_tags_yield_no_affixes() {
        let registry = registry();
        // Ranged/magic affixes exist in the default pool, but nothing that
        // accepts a melee-only item once those tags are filtered out.
        let item = make_item(vec![AffixTag::WeaponRanged]);
        let pool = eligible_affix_pool(&registry, &item, &[]);
        assert!(pool.iter().all(|a| {
            a.tags.contains(&AffixTag::WeaponRanged) || a.tags.contains(&AffixTag::Any)
        }));

        // A pool override holding only foreign-tag affixes filters to empty.
        let melee_item = make_item(vec![AffixTag::WeaponMelee]);
        let override_ids = vec!["Precision".to_string(), "Sorcery".to_string()];
        let pool = eligible_affix_pool(&registry, &melee_item, &override_ids);
        assert!(pool.is_empty());

        let rarity = rarity_def(&registry, RarityTier::Rare);
        let mut rng = StdRng::seed_from_u64(7);
        let rolls = roll_affixes(&registry, &melee_item, &rarity, &override_ids, 5, &mut rng);
        assert!(rolls.is_empty());
    }

    #[test]
    fn test_counts_stay_in_rarity_range() {
        let registry = registry();
        let item = make_item(vec![AffixTag::WeaponMelee]);
        let rarity = rarity_def(&registry, RarityTier::Rare);
        let (min, max) = rarity.affix_range();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let rolls = roll_affixes(&registry, &item, &rarity, &[], 5, &mut rng);
            assert!(rolls.len() >= min as usize && rolls.len() <= max as usize);
        }
    }

    #[test]
    fn test_no_duplicate_affixes() {
        let registry = registry();
        let item = make_item(vec![AffixTag::WeaponMelee, AffixTag::Armor, AffixTag::Jewelry]);
        let rarity = rarity_def(&registry, RarityTier::Radiant);

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let rolls = roll_affixes(&registry, &item, &rarity, &[], 10, &mut rng);

            let mut ids: Vec<&str> = rolls.iter().map(|r| r.affix_id.as_str()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), rolls.len(), "duplicate affix in {:?}", rolls);
        }
    }

    #[test]
    fn test_count_clamps_to_pool_size() {
        let registry = registry();
        let item = make_item(vec![AffixTag::WeaponMelee]);
        // Radiant wants 5-7 affixes; restrict the pool to two entries.
        let rarity = rarity_def(&registry, RarityTier::Radiant);
        let override_ids = vec!["Power".to_string(), "Fury".to_string()];

        let mut rng = StdRng::seed_from_u64(11);
        let rolls = roll_affixes(&registry, &item, &rarity, &override_ids, 5, &mut rng);
        assert!(rolls.len() <= 2);
    }

    #[test]
    fn test_values_fall_within_band() {
        let registry = registry();
        let item = make_item(vec![AffixTag::WeaponMelee]);
        let rarity = rarity_def(&registry, RarityTier::Magic);

        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            for roll in roll_affixes(&registry, &item, &rarity, &[], 1, &mut rng) {
                let affix = registry.affix(&roll.affix_id).unwrap();
                let (min, max) = affix.roll_band(1);
                assert!(
                    roll.value >= min && roll.value <= max,
                    "{} rolled {} outside [{}, {}]",
                    roll.affix_id,
                    roll.value,
                    min,
                    max
                );
            }
        }
    }
}
