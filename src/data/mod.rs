//! Data loading and authored content
//!
//! Loads loot catalogs and tables from external RON files, with built-in
//! starter content as the fallback.

pub mod loader;
pub mod defaults;

pub use loader::{load_catalog, load_catalog_from, load_loot_table, load_zone_table, DataError, LootCatalog};
