//! Loot generation system
//!
//! Rarity selection, affix rolling, and the item/zone rollers that compose
//! them into rolled instances.

pub mod tables;
pub mod rarity;
pub mod affixes;
pub mod roller;
pub mod zone;

pub use tables::{
    BossOverrides, EnemyTier, LevelRange, LootTable, TierCounts, TierLevels, TierWeights,
    WeightedItemEntry, ZoneLootTable,
};
pub use rarity::{roll_rarity, RarityWeights};
pub use affixes::{eligible_affix_pool, roll_affixes};
pub use roller::roll_item;
pub use zone::{roll_zone, roll_zone_drops, roll_zone_legacy, LootDrop};
