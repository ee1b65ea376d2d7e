//! Item definitions
//!
//! Authored base items: equip slots, base stats, and affix constraints.

use serde::{Deserialize, Serialize};

use super::stats::StatMod;

/// Equipment slot for wearable items. `None` means not equippable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EquipSlot {
    #[default]
    None,
    Helm,
    Chest,
    Legs,
    Belt,
    Gloves,
    Cape,
    Ammo,
    LeftHand,
    RightHand,
    Ring1,
    Ring2,
    Amulet,
    Artifact,
}

/// Tag restricting which items an affix can roll on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AffixTag {
    /// Matches every other tag.
    Any,
    WeaponMelee,
    WeaponRanged,
    WeaponMagic,
    Armor,
    Jewelry,
}

fn default_stackable() -> bool {
    true
}

/// An authored base item. Read-only at roll time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,

    /// Multiple copies stack in one inventory slot when stored by base id.
    #[serde(default = "default_stackable")]
    pub stackable: bool,
    #[serde(default)]
    pub untradeable: bool,

    #[serde(default)]
    pub slot: EquipSlot,
    /// When set, the item occupies all of these slots (two-handed weapons
    /// take both hands). When empty, `slot` alone is used.
    #[serde(default)]
    pub occupies_slots: Vec<EquipSlot>,

    /// Ordered base stat modifiers, scaled by the rolled rarity scalar.
    #[serde(default)]
    pub base_stats: Vec<StatMod>,

    /// Tags this item accepts affixes from.
    #[serde(default)]
    pub allowed_affix_tags: Vec<AffixTag>,

    #[serde(default)]
    pub set_id: Option<String>,
}

impl ItemDefinition {
    pub fn is_equippable(&self) -> bool {
        self.slot != EquipSlot::None
    }

    /// Slots this item occupies when equipped.
    pub fn occupied_slots(&self) -> Vec<EquipSlot> {
        if self.occupies_slots.is_empty() {
            vec![self.slot]
        } else {
            self.occupies_slots.clone()
        }
    }

    pub fn has_tag(&self, tag: AffixTag) -> bool {
        self.allowed_affix_tags.contains(&tag)
    }

    /// Display name, falling back to the id.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.id
        } else {
            &self.display_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::stats::{StatMod, StatType};

    fn make_sword() -> ItemDefinition {
        ItemDefinition {
            id: "Starter_Sword".to_string(),
            display_name: "Rusty Sword".to_string(),
            description: String::new(),
            stackable: false,
            untradeable: false,
            slot: EquipSlot::RightHand,
            occupies_slots: Vec::new(),
            base_stats: vec![StatMod::flat(StatType::MeleeDamage, 2.0)],
            allowed_affix_tags: vec![AffixTag::WeaponMelee],
            set_id: None,
        }
    }

    #[test]
    fn test_occupied_slots_defaults_to_slot() {
        let sword = make_sword();
        assert_eq!(sword.occupied_slots(), vec![EquipSlot::RightHand]);
    }

    #[test]
    fn test_two_handed_occupies_both_hands() {
        let mut greatsword = make_sword();
        greatsword.occupies_slots = vec![EquipSlot::RightHand, EquipSlot::LeftHand];
        assert_eq!(
            greatsword.occupied_slots(),
            vec![EquipSlot::RightHand, EquipSlot::LeftHand]
        );
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let mut sword = make_sword();
        sword.display_name.clear();
        assert_eq!(sword.label(), "Starter_Sword");
    }
}
