//! Built-in starter content
//!
//! The fallback catalog used when no authored RON files are present: the
//! full rarity ladder, ten affixes, the starter equipment set, and the
//! Zone1 tables.

use crate::items::{
    AffixDefinition, AffixTag, AffixTier, EquipSlot, ItemDefinition, RarityDefinition, RarityTier,
    StatMod, StatType,
};
use crate::loot::{
    BossOverrides, LevelRange, LootTable, RarityWeights, TierCounts, TierLevels, TierWeights,
    WeightedItemEntry, ZoneLootTable,
};
use super::loader::LootCatalog;

/// The full default catalog in one bundle.
pub fn default_catalog() -> LootCatalog {
    LootCatalog {
        items: default_items(),
        affixes: default_affixes(),
        rarities: default_rarities(),
    }
}

fn rarity(
    tier: RarityTier,
    affix_min: u8,
    affix_max: u8,
    scalar_min: f32,
    scalar_max: f32,
    is_special: bool,
) -> RarityDefinition {
    RarityDefinition {
        id: tier.id().to_string(),
        display_name: tier.id().to_string(),
        sort_order: tier.sort_value(),
        enabled_by_default: !is_special,
        affix_min,
        affix_max,
        scalar_min,
        scalar_max,
        is_special,
    }
}

pub fn default_rarities() -> Vec<RarityDefinition> {
    vec![
        rarity(RarityTier::Common, 0, 0, 1.0, 1.0, false),
        rarity(RarityTier::Uncommon, 0, 1, 1.0, 1.05, false),
        rarity(RarityTier::Magic, 1, 2, 1.05, 1.15, false),
        rarity(RarityTier::Rare, 2, 3, 1.1, 1.25, false),
        rarity(RarityTier::Epic, 3, 4, 1.2, 1.4, false),
        rarity(RarityTier::Legendary, 4, 5, 1.35, 1.6, false),
        rarity(RarityTier::Set, 4, 6, 1.4, 1.7, true),
        rarity(RarityTier::Radiant, 5, 7, 1.7, 2.2, true),
    ]
}

struct AffixSeedRow {
    id: &'static str,
    name: &'static str,
    stat: StatType,
    percent: bool,
    weight: f32,
    min_roll: f32,
    max_roll: f32,
    per_level: f32,
    tags: &'static [AffixTag],
}

fn affix(row: AffixSeedRow) -> AffixDefinition {
    AffixDefinition {
        id: row.id.to_string(),
        display_name: row.name.to_string(),
        tags: row.tags.to_vec(),
        allowed_slots: Vec::new(),
        weight: row.weight,
        stat: row.stat,
        percent: row.percent,
        min_roll: row.min_roll,
        max_roll: row.max_roll,
        per_level: row.per_level,
        tiers: Vec::new(),
    }
}

pub fn default_affixes() -> Vec<AffixDefinition> {
    let mut affixes = vec![
        affix(AffixSeedRow {
            id: "Power",
            name: "of Power",
            stat: StatType::MeleeDamage,
            percent: false,
            weight: 100.0,
            min_roll: 1.0,
            max_roll: 4.0,
            per_level: 0.05,
            tags: &[AffixTag::WeaponMelee],
        }),
        affix(AffixSeedRow {
            id: "Precision",
            name: "of Precision",
            stat: StatType::RangedDamage,
            percent: false,
            weight: 100.0,
            min_roll: 1.0,
            max_roll: 4.0,
            per_level: 0.05,
            tags: &[AffixTag::WeaponRanged],
        }),
        affix(AffixSeedRow {
            id: "Sorcery",
            name: "of Sorcery",
            stat: StatType::MagicDamage,
            percent: false,
            weight: 100.0,
            min_roll: 1.0,
            max_roll: 4.0,
            per_level: 0.05,
            tags: &[AffixTag::WeaponMagic],
        }),
        affix(AffixSeedRow {
            id: "Bulwark",
            name: "of Bulwark",
            stat: StatType::Defense,
            percent: false,
            weight: 100.0,
            min_roll: 1.0,
            max_roll: 4.0,
            per_level: 0.04,
            tags: &[AffixTag::Armor],
        }),
        affix(AffixSeedRow {
            id: "Swiftness",
            name: "of Swiftness",
            stat: StatType::MoveSpeed,
            percent: true,
            weight: 80.0,
            min_roll: 0.1,
            max_roll: 0.35,
            per_level: 0.0,
            tags: &[AffixTag::Armor, AffixTag::Jewelry],
        }),
        affix(AffixSeedRow {
            id: "Fury",
            name: "of Fury",
            stat: StatType::AttackSpeed,
            percent: true,
            weight: 80.0,
            min_roll: 0.1,
            max_roll: 0.35,
            per_level: 0.0,
            tags: &[AffixTag::WeaponMelee, AffixTag::WeaponRanged, AffixTag::WeaponMagic],
        }),
        affix(AffixSeedRow {
            id: "Strength",
            name: "of Strength",
            stat: StatType::Strength,
            percent: false,
            weight: 60.0,
            min_roll: 1.0,
            max_roll: 3.0,
            per_level: 0.03,
            tags: &[AffixTag::Any],
        }),
        affix(AffixSeedRow {
            id: "AttackSkill",
            name: "of the Duelist",
            stat: StatType::Attack,
            percent: false,
            weight: 100.0,
            min_roll: 1.0,
            max_roll: 3.0,
            per_level: 0.03,
            tags: &[AffixTag::WeaponMelee],
        }),
        affix(AffixSeedRow {
            id: "MagicSkill",
            name: "of the Arcanist",
            stat: StatType::MagicSkill,
            percent: false,
            weight: 100.0,
            min_roll: 1.0,
            max_roll: 3.0,
            per_level: 0.03,
            tags: &[AffixTag::WeaponMagic],
        }),
    ];

    // Health rolls step up in authored bands rather than scaling linearly.
    let mut fortitude = affix(AffixSeedRow {
        id: "Fortitude",
        name: "of Fortitude",
        stat: StatType::MaxHealth,
        percent: false,
        weight: 100.0,
        min_roll: 5.0,
        max_roll: 20.0,
        per_level: 0.0,
        tags: &[AffixTag::Armor, AffixTag::Jewelry],
    });
    fortitude.tiers = vec![
        AffixTier { min_item_level: 1, max_item_level: 10, min_roll: 5.0, max_roll: 20.0 },
        AffixTier { min_item_level: 11, max_item_level: 20, min_roll: 15.0, max_roll: 45.0 },
    ];
    affixes.push(fortitude);

    affixes
}

struct ItemSeedRow {
    id: &'static str,
    name: &'static str,
    slot: EquipSlot,
    two_handed: bool,
    base_stats: Vec<StatMod>,
    tags: &'static [AffixTag],
}

fn equipment(row: ItemSeedRow) -> ItemDefinition {
    ItemDefinition {
        id: row.id.to_string(),
        display_name: row.name.to_string(),
        description: String::new(),
        stackable: false,
        untradeable: false,
        slot: row.slot,
        occupies_slots: if row.two_handed {
            vec![EquipSlot::RightHand, EquipSlot::LeftHand]
        } else {
            Vec::new()
        },
        base_stats: row.base_stats,
        allowed_affix_tags: row.tags.to_vec(),
        set_id: None,
    }
}

fn material(id: &str, name: &str) -> ItemDefinition {
    ItemDefinition {
        id: id.to_string(),
        display_name: name.to_string(),
        description: String::new(),
        stackable: true,
        untradeable: false,
        slot: EquipSlot::None,
        occupies_slots: Vec::new(),
        base_stats: Vec::new(),
        allowed_affix_tags: Vec::new(),
        set_id: None,
    }
}

pub fn default_items() -> Vec<ItemDefinition> {
    vec![
        equipment(ItemSeedRow {
            id: "Starter_Sword",
            name: "Rusty Sword",
            slot: EquipSlot::RightHand,
            two_handed: false,
            base_stats: vec![StatMod::flat(StatType::MeleeDamage, 2.0)],
            tags: &[AffixTag::WeaponMelee],
        }),
        equipment(ItemSeedRow {
            id: "Starter_Bow",
            name: "Simple Bow",
            slot: EquipSlot::RightHand,
            two_handed: false,
            base_stats: vec![StatMod::flat(StatType::RangedDamage, 2.0)],
            tags: &[AffixTag::WeaponRanged],
        }),
        equipment(ItemSeedRow {
            id: "Greatsword_2H",
            name: "Greatsword",
            slot: EquipSlot::RightHand,
            two_handed: true,
            base_stats: vec![StatMod::flat(StatType::MeleeDamage, 4.0)],
            tags: &[AffixTag::WeaponMelee],
        }),
        equipment(ItemSeedRow {
            id: "Longbow_2H",
            name: "Longbow",
            slot: EquipSlot::RightHand,
            two_handed: true,
            base_stats: vec![StatMod::flat(StatType::RangedDamage, 4.0)],
            tags: &[AffixTag::WeaponRanged],
        }),
        equipment(ItemSeedRow {
            id: "Staff_2H",
            name: "Staff",
            slot: EquipSlot::RightHand,
            two_handed: true,
            base_stats: vec![StatMod::flat(StatType::MagicDamage, 4.0)],
            tags: &[AffixTag::WeaponMagic],
        }),
        equipment(ItemSeedRow {
            id: "Starter_Chest",
            name: "Worn Chestpiece",
            slot: EquipSlot::Chest,
            two_handed: false,
            base_stats: vec![
                StatMod::flat(StatType::Defense, 1.0),
                StatMod::flat(StatType::MaxHealth, 5.0),
            ],
            tags: &[AffixTag::Armor],
        }),
        equipment(ItemSeedRow {
            id: "Starter_Ring",
            name: "Bone Ring",
            slot: EquipSlot::Ring1,
            two_handed: false,
            base_stats: vec![StatMod::flat(StatType::MaxHealth, 2.0)],
            tags: &[AffixTag::Jewelry],
        }),
        material("Mat_AbyssalShard", "Abyssal Shard"),
        material("Mat_RoughHide", "Rough Hide"),
    ]
}

/// The flat starter table used by single-item QA rolls.
pub fn default_loot_table() -> LootTable {
    LootTable {
        id: "Starter".to_string(),
        items: vec![
            WeightedItemEntry { item: "Starter_Sword".to_string(), weight: 1.0 },
            WeightedItemEntry { item: "Starter_Bow".to_string(), weight: 1.0 },
            WeightedItemEntry { item: "Greatsword_2H".to_string(), weight: 0.5 },
            WeightedItemEntry { item: "Longbow_2H".to_string(), weight: 0.5 },
            WeightedItemEntry { item: "Staff_2H".to_string(), weight: 0.5 },
            WeightedItemEntry { item: "Starter_Chest".to_string(), weight: 1.0 },
            WeightedItemEntry { item: "Starter_Ring".to_string(), weight: 0.75 },
        ],
        rarities: RarityWeights {
            common: 70.0,
            uncommon: 22.0,
            magic: 6.0,
            rare: 1.8,
            epic: 0.18,
            legendary: 0.02,
            ..Default::default()
        },
        affix_pool_override: Vec::new(),
    }
}

/// The Zone1 tiered table: equipment in the zone pool, crafting drops in
/// the materials pool, boss overrides on.
pub fn default_zone_table() -> ZoneLootTable {
    ZoneLootTable {
        id: "Zone1".to_string(),
        zone_pool: vec![
            "Starter_Sword".to_string(),
            "Starter_Bow".to_string(),
            "Greatsword_2H".to_string(),
            "Longbow_2H".to_string(),
            "Staff_2H".to_string(),
            "Starter_Chest".to_string(),
            "Starter_Ring".to_string(),
        ],
        materials_pool: vec![
            "Mat_AbyssalShard".to_string(),
            "Mat_RoughHide".to_string(),
        ],
        tier_weights: TierWeights {
            trash: RarityWeights {
                common: 60.0,
                uncommon: 25.0,
                magic: 12.0,
                rare: 3.0,
                ..Default::default()
            },
            normal: RarityWeights {
                common: 55.0,
                uncommon: 25.0,
                magic: 14.0,
                rare: 5.0,
                epic: 0.8,
                legendary: 0.1,
                ..Default::default()
            },
            elite: RarityWeights {
                common: 45.0,
                uncommon: 28.0,
                magic: 17.0,
                rare: 8.0,
                epic: 1.8,
                legendary: 0.25,
                ..Default::default()
            },
            mini_boss: RarityWeights {
                common: 35.0,
                uncommon: 28.0,
                magic: 20.0,
                rare: 12.0,
                epic: 4.0,
                legendary: 1.0,
                set: 0.4,
                radiant: 0.02,
            },
        },
        zone_rolls: TierCounts { trash: 1, normal: 1, elite: 1, mini_boss: 2 },
        roll_materials: true,
        materials_rolls: TierCounts { trash: 0, normal: 0, elite: 1, mini_boss: 2 },
        item_levels: TierLevels {
            trash: LevelRange { min: 1, max: 5 },
            normal: LevelRange { min: 3, max: 8 },
            elite: LevelRange { min: 6, max: 12 },
            mini_boss: LevelRange { min: 10, max: 16 },
        },
        boss: BossOverrides {
            enabled: true,
            zone_rolls: 3,
            materials_rolls: 3,
            guaranteed_min_rarity: RarityTier::Rare,
        },
        legacy_mode: false,
        affix_pool_override: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rarities_cover_the_ladder() {
        let rarities = default_rarities();
        assert_eq!(rarities.len(), RarityTier::ALL.len());
        for (def, tier) in rarities.iter().zip(RarityTier::ALL) {
            assert_eq!(def.tier(), Some(tier));
            let (min, max) = def.affix_range();
            assert!(max >= min);
        }
    }

    #[test]
    fn test_default_tables_reference_known_ids() {
        let catalog = default_catalog();
        let known: Vec<&str> = catalog.items.iter().map(|i| i.id.as_str()).collect();

        for entry in default_loot_table().items {
            assert!(known.contains(&entry.item.as_str()), "unknown id {}", entry.item);
        }
        let zone = default_zone_table();
        for id in zone.zone_pool.iter().chain(&zone.materials_pool) {
            assert!(known.contains(&id.as_str()), "unknown id {}", id);
        }
    }

    #[test]
    fn test_two_handed_items_occupy_both_hands() {
        let items = default_items();
        let greatsword = items.iter().find(|i| i.id == "Greatsword_2H").unwrap();
        assert_eq!(
            greatsword.occupied_slots(),
            vec![EquipSlot::RightHand, EquipSlot::LeftHand]
        );
    }
}
