//! RON data loader
//!
//! Loads authored loot catalogs from external RON files, with fallback to
//! the built-in starter content.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::items::{AffixDefinition, ItemDefinition, RarityDefinition};
use crate::loot::{LootTable, ZoneLootTable};
use super::defaults;

/// Data-file failure. Roll paths never see these; a bad catalog file falls
/// back to defaults at load time.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// The three authored definition catalogs a registry indexes.
#[derive(Debug, Clone, Default)]
pub struct LootCatalog {
    pub items: Vec<ItemDefinition>,
    pub affixes: Vec<AffixDefinition>,
    pub rarities: Vec<RarityDefinition>,
}

/// Load the catalogs from `assets/data/`, falling back to starter content
/// per file.
pub fn load_catalog() -> LootCatalog {
    load_catalog_from(Path::new("assets/data"))
}

/// Load the catalogs from an explicit directory.
pub fn load_catalog_from(base_path: &Path) -> LootCatalog {
    LootCatalog {
        items: load_or(base_path.join("items.ron"), defaults::default_items),
        affixes: load_or(base_path.join("affixes.ron"), defaults::default_affixes),
        rarities: load_or(base_path.join("rarities.ron"), defaults::default_rarities),
    }
}

/// Load a flat loot table from a RON file.
pub fn load_loot_table(path: &Path) -> Result<LootTable, DataError> {
    load_file(path)
}

/// Load a zone loot table from a RON file.
pub fn load_zone_table(path: &Path) -> Result<ZoneLootTable, DataError> {
    load_file(path)
}

fn load_or<T, F>(path: PathBuf, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    if !path.exists() {
        return fallback();
    }
    match load_file(&path) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("failed to load {}: {}. Using defaults.", path.display(), e);
            fallback()
        }
    }
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|e| DataError::Io(e.to_string()))?;
    ron::from_str(&content).map_err(|e| DataError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_falls_back_to_defaults() {
        let catalog = load_catalog_from(Path::new("no/such/directory"));
        assert_eq!(catalog.items.len(), defaults::default_items().len());
        assert_eq!(catalog.affixes.len(), defaults::default_affixes().len());
        assert_eq!(catalog.rarities.len(), defaults::default_rarities().len());
    }

    #[test]
    fn test_parse_item_definition_ron() {
        let source = r#"
            [
                (
                    id: "Starter_Sword",
                    display_name: "Rusty Sword",
                    stackable: false,
                    slot: RightHand,
                    base_stats: [(stat: MeleeDamage, value: 2.0)],
                    allowed_affix_tags: [WeaponMelee],
                ),
            ]
        "#;
        let items: Vec<ItemDefinition> = ron::from_str(source).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "Starter_Sword");
        assert!(!items[0].stackable);
    }

    #[test]
    fn test_missing_table_is_an_error() {
        assert!(load_zone_table(Path::new("no/such/table.ron")).is_err());
    }

    #[test]
    fn test_shipped_assets_parse() {
        // Unit tests run from the crate root, where the shipped data lives.
        let base = Path::new("assets/data");
        if !base.exists() {
            return;
        }

        let items: Vec<ItemDefinition> = load_file(&base.join("items.ron")).unwrap();
        assert!(!items.is_empty());
        let affixes: Vec<AffixDefinition> = load_file(&base.join("affixes.ron")).unwrap();
        assert!(!affixes.is_empty());
        let rarities: Vec<RarityDefinition> = load_file(&base.join("rarities.ron")).unwrap();
        assert_eq!(rarities.len(), 8);

        assert!(load_zone_table(&base.join("tables/zone1.ron")).is_ok());
        assert!(load_loot_table(&base.join("tables/starter.ron")).is_ok());
    }
}
