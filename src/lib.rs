//! Abyssloot - a registry-backed procedural loot engine
//!
//! Turns authored catalogs (items, affixes, rarities) plus a loot table
//! into concrete rolled instances with stable, resolvable identities.
//!
//! Every roller takes an explicit [`LootRegistry`] and an optional seed;
//! threading a seed end-to-end makes a roll bit-for-bit reproducible.

pub mod items;
pub mod loot;
pub mod registry;
pub mod data;
pub mod rng;

// Re-export commonly used types
pub use items::{
    AffixDefinition, AffixRoll, AffixTag, EquipSlot, ItemDefinition, ItemInstance,
    RarityDefinition, RarityTier, StatMod, StatType,
};
pub use loot::{
    roll_item, roll_zone, roll_zone_drops, roll_zone_legacy, EnemyTier, LootDrop, LootTable,
    RarityWeights, ZoneLootTable,
};
pub use registry::{LootRegistry, RolledInstanceId};
