//! Affix definitions
//!
//! Rollable stat modifiers with selection weights, item-level roll bands,
//! and magnitude scaling.

use serde::{Deserialize, Serialize};

use super::definition::{AffixTag, EquipSlot, ItemDefinition};
use super::stats::StatType;

/// A roll range restricted to an item-level band. When an affix defines
/// tiers, the narrowest band containing the item level replaces the base
/// `min_roll`/`max_roll`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffixTier {
    pub min_item_level: u32,
    pub max_item_level: u32,
    pub min_roll: f32,
    pub max_roll: f32,
}

impl AffixTier {
    fn level_band(&self) -> (u32, u32) {
        let min = self.min_item_level.max(1);
        let max = self.max_item_level.max(1);
        if max < min {
            (max, min)
        } else {
            (min, max)
        }
    }

    fn contains(&self, level: u32) -> bool {
        let (min, max) = self.level_band();
        level >= min && level <= max
    }

    fn width(&self) -> u32 {
        let (min, max) = self.level_band();
        max - min
    }
}

fn default_weight() -> f32 {
    100.0
}

/// An authored affix. Read-only at roll time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffixDefinition {
    pub id: String,
    pub display_name: String,

    /// Tags this affix can roll on. Empty matches any item.
    #[serde(default)]
    pub tags: Vec<AffixTag>,
    /// When non-empty, the affix only rolls on items in one of these slots.
    #[serde(default)]
    pub allowed_slots: Vec<EquipSlot>,

    /// Relative likelihood when rolling affixes. 100 = baseline, 0 or less =
    /// never roll.
    #[serde(default = "default_weight")]
    pub weight: f32,

    pub stat: StatType,
    #[serde(default)]
    pub percent: bool,

    pub min_roll: f32,
    pub max_roll: f32,

    /// Linear magnitude growth per item level above 1. Clamped to >= 0 so
    /// rolled values never decrease as the level rises.
    #[serde(default)]
    pub per_level: f32,

    /// Optional tiered roll ranges by item level. If empty, `min_roll` and
    /// `max_roll` are used at every level.
    #[serde(default)]
    pub tiers: Vec<AffixTier>,
}

impl AffixDefinition {
    /// The roll range in effect at `item_level`: the narrowest matching tier
    /// band, or the base range when no tier matches.
    pub fn roll_band(&self, item_level: u32) -> (f32, f32) {
        let level = item_level.max(1);

        let mut best: Option<&AffixTier> = None;
        for tier in &self.tiers {
            if !tier.contains(level) {
                continue;
            }
            best = match best {
                Some(b) if tier.width() >= b.width() => Some(b),
                _ => Some(tier),
            };
        }

        match best {
            Some(t) => {
                let min = t.min_roll.min(t.max_roll);
                (min, t.min_roll.max(t.max_roll))
            }
            None => {
                let min = self.min_roll.min(self.max_roll);
                (min, self.min_roll.max(self.max_roll))
            }
        }
    }

    /// Magnitude for a unit draw in [0,1] at the given item level. Linear in
    /// the unit fraction within the band, then scaled linearly by level.
    pub fn magnitude(&self, item_level: u32, unit: f32) -> f32 {
        let level = item_level.max(1);
        let (min, max) = self.roll_band(level);
        let base = min + (max - min) * unit.clamp(0.0, 1.0);
        base * (1.0 + self.per_level.max(0.0) * (level - 1) as f32)
    }

    /// Whether this affix is eligible for the given item: positive weight,
    /// slot constraint satisfied, and tag sets intersecting. Empty tag lists
    /// (and `Any` on either side) are permissive.
    pub fn applies_to(&self, item: &ItemDefinition) -> bool {
        if self.weight <= 0.0 {
            return false;
        }

        if !self.allowed_slots.is_empty() && !self.allowed_slots.contains(&item.slot) {
            return false;
        }

        tags_intersect(&item.allowed_affix_tags, &self.tags)
    }
}

fn tags_intersect(item_tags: &[AffixTag], affix_tags: &[AffixTag]) -> bool {
    if affix_tags.is_empty() || item_tags.is_empty() {
        return true;
    }

    for &t in item_tags {
        if t == AffixTag::Any {
            return true;
        }
        for &a in affix_tags {
            if a == AffixTag::Any || a == t {
                return true;
            }
        }
    }

    false
}
