//! Rolled item instances
//!
//! The concrete output of a loot roll: a base item id, a rarity, an item
//! level, and the rolled affixes. Instances are immutable once created and
//! serialize as flat records; this is the only shape save data persists.

use serde::{Deserialize, Serialize};

use crate::registry::LootRegistry;
use super::stats::StatMod;

/// One rolled affix: the affix id and its rolled magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffixRoll {
    pub affix_id: String,
    pub value: f32,
}

/// A concrete rolled item, distinct from its authored definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInstance {
    pub base_item_id: String,
    pub rarity_id: String,
    pub item_level: u32,
    pub base_scalar: f32,
    /// Roll-ordered, no two entries share an `affix_id`.
    pub affixes: Vec<AffixRoll>,
}

impl ItemInstance {
    /// All stat modifiers this instance grants: the base item's stats (each
    /// scaled by `base_scalar`), then one modifier per affix in roll order.
    /// Unresolvable ids are skipped.
    pub fn all_stat_mods(&self, registry: &LootRegistry) -> Vec<StatMod> {
        let mut mods = Vec::with_capacity(16);

        if let Some(base_item) = registry.item(&self.base_item_id) {
            let scalar = self.base_scalar.max(0.0);
            for m in &base_item.base_stats {
                mods.push(StatMod {
                    stat: m.stat,
                    value: m.value * scalar,
                    percent: m.percent,
                });
            }
        }

        for roll in &self.affixes {
            let Some(affix) = registry.affix(&roll.affix_id) else {
                continue;
            };
            mods.push(StatMod {
                stat: affix.stat,
                value: roll.value,
                percent: affix.percent,
            });
        }

        mods
    }

    pub fn has_affixes(&self) -> bool {
        !self.affixes.is_empty()
    }
}
