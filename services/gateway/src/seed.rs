//! Startup seed data: the global item catalog and known identities
//!
//! Item and identity administration live outside the gateway; a JSON seed
//! file stands in for them when running against in-memory stores.

use anyhow::Context;
use reconciliation_engine::InMemoryStores;
use serde::Deserialize;
use std::path::Path;
use types::identity::Identity;
use types::ids::ItemId;
use types::item::Item;

#[derive(Debug, Clone, Deserialize)]
pub struct SeedItem {
    /// Fixed id, so tokens and clients can reference items across restarts
    #[serde(default)]
    pub id: Option<ItemId>,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub items: Vec<SeedItem>,
    #[serde(default)]
    pub identities: Vec<Identity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub items: usize,
    pub identities: usize,
}

impl SeedData {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing seed file {}", path.display()))
    }

    /// Load into the stores; a duplicate item id or name aborts the seed
    pub fn apply(self, stores: &InMemoryStores) -> anyhow::Result<SeedSummary> {
        let summary = SeedSummary {
            items: self.items.len(),
            identities: self.identities.len(),
        };

        for seed in self.items {
            let item = match seed.id {
                Some(id) => Item { id, name: seed.name },
                None => Item::new(seed.name),
            };
            stores.items.insert_item(item).context("seeding item catalog")?;
        }
        for identity in self.identities {
            stores.identities.register(identity);
        }

        Ok(summary)
    }
}
