//! Loot tables
//!
//! Flat weighted tables for single-item rolls and tiered zone tables for
//! the per-encounter fan-out.

use serde::{Deserialize, Serialize};

use crate::items::RarityTier;
use super::rarity::RarityWeights;

/// Enemy/encounter difficulty class. Selects which roll counts and rarity
/// weights apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyTier {
    Trash,
    Normal,
    Elite,
    MiniBoss,
}

fn default_item_weight() -> f32 {
    1.0
}

/// One base-item candidate in a flat table. Weights default to 1 so an
/// unweighted table rolls uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedItemEntry {
    pub item: String,
    #[serde(default = "default_item_weight")]
    pub weight: f32,
}

/// A flat loot table: weighted base items, rarity weights, and an optional
/// affix-pool override replacing the registry-wide pool.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LootTable {
    pub id: String,
    #[serde(default)]
    pub items: Vec<WeightedItemEntry>,
    #[serde(default)]
    pub rarities: RarityWeights,
    #[serde(default)]
    pub affix_pool_override: Vec<String>,
}

/// A per-tier roll count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TierCounts {
    #[serde(default)]
    pub trash: u32,
    #[serde(default)]
    pub normal: u32,
    #[serde(default)]
    pub elite: u32,
    #[serde(default)]
    pub mini_boss: u32,
}

impl TierCounts {
    pub fn for_tier(&self, tier: EnemyTier) -> u32 {
        match tier {
            EnemyTier::Trash => self.trash,
            EnemyTier::Normal => self.normal,
            EnemyTier::Elite => self.elite,
            EnemyTier::MiniBoss => self.mini_boss,
        }
    }
}

fn default_level() -> u32 {
    1
}

/// An inclusive item-level range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRange {
    #[serde(default = "default_level")]
    pub min: u32,
    #[serde(default = "default_level")]
    pub max: u32,
}

impl Default for LevelRange {
    fn default() -> Self {
        Self { min: 1, max: 1 }
    }
}

impl LevelRange {
    /// Lower bound, never below 1.
    pub fn clamp_min(&self) -> u32 {
        self.min.max(1)
    }

    /// Upper bound, never below the lower bound.
    pub fn clamp_max(&self) -> u32 {
        self.max.max(self.clamp_min())
    }
}

/// Per-tier item-level ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TierLevels {
    #[serde(default)]
    pub trash: LevelRange,
    #[serde(default)]
    pub normal: LevelRange,
    #[serde(default)]
    pub elite: LevelRange,
    #[serde(default)]
    pub mini_boss: LevelRange,
}

impl TierLevels {
    pub fn for_tier(&self, tier: EnemyTier) -> LevelRange {
        match tier {
            EnemyTier::Trash => self.trash,
            EnemyTier::Normal => self.normal,
            EnemyTier::Elite => self.elite,
            EnemyTier::MiniBoss => self.mini_boss,
        }
    }
}

/// Per-tier rarity weights.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TierWeights {
    #[serde(default)]
    pub trash: RarityWeights,
    #[serde(default)]
    pub normal: RarityWeights,
    #[serde(default)]
    pub elite: RarityWeights,
    #[serde(default)]
    pub mini_boss: RarityWeights,
}

impl TierWeights {
    pub fn for_tier(&self, tier: EnemyTier) -> &RarityWeights {
        match tier {
            EnemyTier::Trash => &self.trash,
            EnemyTier::Normal => &self.normal,
            EnemyTier::Elite => &self.elite,
            EnemyTier::MiniBoss => &self.mini_boss,
        }
    }
}

fn default_guaranteed_min() -> RarityTier {
    RarityTier::Rare
}

/// Boss substitutions applied when a `MiniBoss` encounter rolls with
/// overrides enabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BossOverrides {
    #[serde(default)]
    pub enabled: bool,
    /// Zone-pool rolls replacing the tier's normal count.
    #[serde(default)]
    pub zone_rolls: u32,
    /// Materials-pool rolls replacing the tier's normal count.
    #[serde(default)]
    pub materials_rolls: u32,
    /// Every rarity roll in the batch is promoted up to at least this tier.
    #[serde(default = "default_guaranteed_min")]
    pub guaranteed_min_rarity: RarityTier,
}

impl Default for BossOverrides {
    fn default() -> Self {
        Self {
            enabled: false,
            zone_rolls: 0,
            materials_rolls: 0,
            guaranteed_min_rarity: RarityTier::Rare,
        }
    }
}

fn default_roll_materials() -> bool {
    true
}

/// A tiered zone table: two independent item pools with per-tier rarity
/// weights, roll counts, and item-level ranges, plus boss overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneLootTable {
    pub id: String,

    /// Zone-wide drops (equipment and consumables).
    #[serde(default)]
    pub zone_pool: Vec<String>,
    /// Crafting materials, rolled separately when enabled.
    #[serde(default)]
    pub materials_pool: Vec<String>,

    #[serde(default)]
    pub tier_weights: TierWeights,
    #[serde(default)]
    pub zone_rolls: TierCounts,

    #[serde(default = "default_roll_materials")]
    pub roll_materials: bool,
    #[serde(default)]
    pub materials_rolls: TierCounts,

    #[serde(default)]
    pub item_levels: TierLevels,

    #[serde(default)]
    pub boss: BossOverrides,

    /// Legacy zones resolve plain definitions instead of rolling instances.
    #[serde(default)]
    pub legacy_mode: bool,

    /// Optional affix-pool override applied to every roll from this table.
    #[serde(default)]
    pub affix_pool_override: Vec<String>,
}

impl Default for ZoneLootTable {
    fn default() -> Self {
        Self {
            id: String::new(),
            zone_pool: Vec::new(),
            materials_pool: Vec::new(),
            tier_weights: TierWeights::default(),
            zone_rolls: TierCounts::default(),
            roll_materials: true,
            materials_rolls: TierCounts::default(),
            item_levels: TierLevels::default(),
            boss: BossOverrides::default(),
            legacy_mode: false,
            affix_pool_override: Vec::new(),
        }
    }
}

impl ZoneLootTable {
    pub fn weights_for(&self, tier: EnemyTier) -> &RarityWeights {
        self.tier_weights.for_tier(tier)
    }

    pub fn zone_rolls_for(&self, tier: EnemyTier) -> u32 {
        self.zone_rolls.for_tier(tier)
    }

    pub fn materials_rolls_for(&self, tier: EnemyTier) -> u32 {
        if !self.roll_materials {
            return 0;
        }
        self.materials_rolls.for_tier(tier)
    }

    pub fn item_levels_for(&self, tier: EnemyTier) -> LevelRange {
        self.item_levels.for_tier(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_counts_lookup() {
        let counts = TierCounts { trash: 1, normal: 1, elite: 2, mini_boss: 3 };
        assert_eq!(counts.for_tier(EnemyTier::Trash), 1);
        assert_eq!(counts.for_tier(EnemyTier::MiniBoss), 3);
    }

    #[test]
    fn test_materials_master_switch() {
        let table = ZoneLootTable {
            roll_materials: false,
            materials_rolls: TierCounts { trash: 2, normal: 2, elite: 2, mini_boss: 2 },
            ..Default::default()
        };
        assert_eq!(table.materials_rolls_for(EnemyTier::Elite), 0);
    }

    #[test]
    fn test_level_range_normalizes() {
        let range = LevelRange { min: 0, max: 0 };
        assert_eq!(range.clamp_min(), 1);
        assert_eq!(range.clamp_max(), 1);

        let inverted = LevelRange { min: 8, max: 3 };
        assert_eq!(inverted.clamp_max(), 8);
    }
}
