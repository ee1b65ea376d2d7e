//! Abyssloot - QA drop simulator
//!
//! Rolls a batch of drop events against a zone table and prints rarity and
//! affix histograms, so table tuning can be checked without a game session.
//!
//! Usage: abyssloot [EVENTS] [--tier trash|normal|elite|miniboss]
//!                  [--seed N] [--table path/to/zone.ron]

use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};

use abyssloot::data::defaults::default_zone_table;
use abyssloot::data::load_zone_table;
use abyssloot::rng::derive_seed;
use abyssloot::{roll_zone, EnemyTier, LootRegistry};

const ZONE_EVENT_STREAM: u64 = 1;
const MATERIALS_EVENT_STREAM: u64 = 2;

struct SimConfig {
    events: u64,
    tier: EnemyTier,
    seed: Option<u64>,
    table_path: Option<PathBuf>,
}

impl SimConfig {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = SimConfig {
            events: 200,
            tier: EnemyTier::Trash,
            seed: None,
            table_path: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tier" => {
                    let Some(value) = args.next() else {
                        bail!("--tier requires a value");
                    };
                    config.tier = parse_tier(&value)?;
                }
                "--seed" => {
                    let Some(value) = args.next() else {
                        bail!("--seed requires a value");
                    };
                    config.seed = Some(value.parse()?);
                }
                "--table" => {
                    let Some(value) = args.next() else {
                        bail!("--table requires a value");
                    };
                    config.table_path = Some(PathBuf::from(value));
                }
                other => match other.parse() {
                    Ok(events) => config.events = events,
                    Err(_) => bail!("unrecognized argument: {}", other),
                },
            }
        }

        Ok(config)
    }
}

fn parse_tier(value: &str) -> Result<EnemyTier> {
    match value.to_ascii_lowercase().as_str() {
        "trash" => Ok(EnemyTier::Trash),
        "normal" => Ok(EnemyTier::Normal),
        "elite" => Ok(EnemyTier::Elite),
        "miniboss" | "mini-boss" | "mini_boss" => Ok(EnemyTier::MiniBoss),
        other => bail!("unknown tier: {}", other),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::from_args(env::args().skip(1))?;

    log::info!("Starting abyssloot drop sim v{}", env!("CARGO_PKG_VERSION"));

    let mut registry = LootRegistry::new();
    registry.build_if_needed();

    let table = match &config.table_path {
        Some(path) => load_zone_table(path)?,
        None => default_zone_table(),
    };

    let mut rarity_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut affix_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut produced: u64 = 0;
    let mut empty_events: u64 = 0;

    for event in 0..config.events {
        let (seed_a, seed_b) = match config.seed {
            Some(s) => (
                Some(derive_seed(s, ZONE_EVENT_STREAM, event)),
                Some(derive_seed(s, MATERIALS_EVENT_STREAM, event)),
            ),
            None => (None, None),
        };

        let drops = roll_zone(&registry, &table, config.tier, seed_a, seed_b);
        if drops.is_empty() {
            empty_events += 1;
        }

        for instance in drops {
            *rarity_counts.entry(instance.rarity_id.clone()).or_default() += 1;
            for affix in &instance.affixes {
                *affix_counts.entry(affix.affix_id.clone()).or_default() += 1;
            }

            registry.register_rolled_instance(instance);
            produced += 1;
        }
    }

    println!(
        "Simulated {} {:?} drop events from '{}': {} instances ({} empty events)",
        config.events, config.tier, table.id, produced, empty_events
    );

    println!("Rarity counts:");
    for (id, count) in sorted_by_count(&rarity_counts) {
        println!("- {}: {}", id, count);
    }

    println!("Affix counts:");
    for (id, count) in sorted_by_count(&affix_counts) {
        println!("- {}: {}", id, count);
    }

    log::info!("{} rolled instances registered", registry.rolled_instance_count());

    Ok(())
}

fn sorted_by_count(counts: &BTreeMap<String, u64>) -> Vec<(&String, u64)> {
    let mut entries: Vec<(&String, u64)> = counts.iter().map(|(k, v)| (k, *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}
