//! Stat types
//!
//! The stat vocabulary shared by base items and affix rolls.

use serde::{Deserialize, Serialize};

/// Expandable list of supported stats for loot rolls.
///
/// Do not reorder existing entries; authored catalogs reference them by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatType {
    MeleeDamage,
    RangedDamage,
    MagicDamage,

    Defense,
    MaxHealth,
    AttackSpeed,
    MoveSpeed,

    Attack,
    Strength,
    DefenseSkill,
    RangedSkill,
    MagicSkill,

    // Skilling (primary stats)
    Alchemy,
    Mining,
    Woodcutting,
    Forging,
    Fishing,
    Cooking,
}

impl StatType {
    /// Canonical display name (note "Defence" spelling for the skill).
    pub fn display_name(&self) -> &'static str {
        match self {
            StatType::MeleeDamage => "Melee Damage",
            StatType::RangedDamage => "Ranged Damage",
            StatType::MagicDamage => "Magic Damage",
            StatType::Defense => "Defense",
            StatType::MaxHealth => "Max Health",
            StatType::AttackSpeed => "Attack Speed",
            StatType::MoveSpeed => "Move Speed",
            StatType::Attack => "Attack",
            StatType::Strength => "Strength",
            StatType::DefenseSkill => "Defence",
            StatType::RangedSkill => "Ranged",
            StatType::MagicSkill => "Magic",
            StatType::Alchemy => "Alchemy",
            StatType::Mining => "Mining",
            StatType::Woodcutting => "Woodcutting",
            StatType::Forging => "Forging",
            StatType::Fishing => "Fishing",
            StatType::Cooking => "Cooking",
        }
    }
}

/// A single stat modifier carried by a base item or resolved from an affix roll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatMod {
    pub stat: StatType,
    pub value: f32,
    /// Fractional multiplier when true, flat additive otherwise.
    #[serde(default)]
    pub percent: bool,
}

impl StatMod {
    pub fn flat(stat: StatType, value: f32) -> Self {
        Self { stat, value, percent: false }
    }

    pub fn percent(stat: StatType, value: f32) -> Self {
        Self { stat, value, percent: true }
    }
}
