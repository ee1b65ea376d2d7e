//! Loot registry
//!
//! The explicit context object backing every roll: indexed definition
//! catalogs plus the identity map for rolled instances. One registry per
//! session; tests and tools build as many as they need.

use std::collections::HashMap;

use uuid::Uuid;

use crate::data::loader::{load_catalog, LootCatalog};
use crate::items::{AffixDefinition, ItemDefinition, ItemInstance, RarityDefinition, RarityTier};

/// Opaque handle to a rolled instance. The only thing inventory, equipment,
/// and save data hold on to.
pub type RolledInstanceId = String;

/// Definition catalogs indexed by case-insensitive id, plus the rolled
/// instance map.
#[derive(Debug, Default)]
pub struct LootRegistry {
    items_by_id: HashMap<String, ItemDefinition>,
    rarities_by_id: HashMap<String, RarityDefinition>,
    affixes_by_id: HashMap<String, AffixDefinition>,

    // Rolled instances keyed by their issued id.
    instances_by_rolled_id: HashMap<String, ItemInstance>,

    built: bool,
}

fn key(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}

impl LootRegistry {
    /// An empty, unbuilt registry. Lookups miss until `build_if_needed` or
    /// an upsert populates it.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry built from an explicit catalog. The path tests and
    /// multi-session hosts use; no ambient state involved.
    pub fn from_catalog(catalog: LootCatalog) -> Self {
        let mut registry = Self::default();
        registry.built = true;
        registry.index_catalog(catalog);
        registry
    }

    /// Load and index the authored catalogs. Idempotent: repeat calls are
    /// no-ops, so any bootstrap path may call it freely.
    pub fn build_if_needed(&mut self) {
        if self.built {
            return;
        }
        self.built = true;

        let catalog = load_catalog();
        self.index_catalog(catalog);
        log::info!(
            "loot registry built: {} items, {} affixes, {} rarities",
            self.items_by_id.len(),
            self.affixes_by_id.len(),
            self.rarities_by_id.len()
        );
    }

    // First id wins on build; blank ids are skipped.
    fn index_catalog(&mut self, catalog: LootCatalog) {
        for item in catalog.items {
            if item.id.trim().is_empty() {
                continue;
            }
            self.items_by_id.entry(key(&item.id)).or_insert(item);
        }
        for rarity in catalog.rarities {
            if rarity.id.trim().is_empty() {
                continue;
            }
            self.rarities_by_id.entry(key(&rarity.id)).or_insert(rarity);
        }
        for affix in catalog.affixes {
            if affix.id.trim().is_empty() {
                continue;
            }
            self.affixes_by_id.entry(key(&affix.id)).or_insert(affix);
        }
    }

    /// Upsert an item definition by id (case-insensitive). Content tooling
    /// uses this for hot updates; last write wins.
    pub fn register_or_update_item(&mut self, item: ItemDefinition) {
        if item.id.trim().is_empty() {
            return;
        }
        self.items_by_id.insert(key(&item.id), item);
    }

    pub fn item(&self, id: &str) -> Option<&ItemDefinition> {
        self.items_by_id.get(&key(id))
    }

    pub fn rarity(&self, id: &str) -> Option<&RarityDefinition> {
        self.rarities_by_id.get(&key(id))
    }

    pub fn rarity_for_tier(&self, tier: RarityTier) -> Option<&RarityDefinition> {
        self.rarity(tier.id())
    }

    pub fn affix(&self, id: &str) -> Option<&AffixDefinition> {
        self.affixes_by_id.get(&key(id))
    }

    pub fn all_affixes(&self) -> impl Iterator<Item = &AffixDefinition> {
        self.affixes_by_id.values()
    }

    pub fn item_count(&self) -> usize {
        self.items_by_id.len()
    }

    pub fn affix_count(&self) -> usize {
        self.affixes_by_id.len()
    }

    pub fn rarity_count(&self) -> usize {
        self.rarities_by_id.len()
    }

    /// Store a rolled instance under a fresh unique id. No value-based
    /// deduplication: identical rolls get distinct ids.
    pub fn register_rolled_instance(&mut self, instance: ItemInstance) -> RolledInstanceId {
        let rolled_id = format!("ri_{}", Uuid::new_v4().simple());
        self.instances_by_rolled_id.insert(rolled_id.clone(), instance);
        rolled_id
    }

    pub fn rolled_instance(&self, rolled_id: &str) -> Option<&ItemInstance> {
        self.instances_by_rolled_id.get(rolled_id)
    }

    pub fn rolled_instance_count(&self) -> usize {
        self.instances_by_rolled_id.len()
    }

    /// Resolve the display name behind a rolled id, for inventory and
    /// tooltip collaborators.
    pub fn display_name(&self, rolled_id: &str) -> Option<String> {
        let instance = self.rolled_instance(rolled_id)?;
        let base_item = self.item(&instance.base_item_id)?;
        Some(base_item.label().to_string())
    }
}
