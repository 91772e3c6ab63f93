//! Item and name-resolution types

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::ids::ItemId;

/// A sellable item in the global catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

impl Item {
    /// Create an item with a fresh identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
        }
    }
}

/// Authoritative name → identifier mapping handed to the resolver
///
/// Ordered so that anything derived from it is deterministic.
pub type NameIndex = BTreeMap<String, ItemId>;

/// Build a name index from `(id, name)` pairs
///
/// If a name appears twice the later pair wins; stores that enforce name
/// uniqueness never hit that case.
pub fn name_index<'a>(items: impl IntoIterator<Item = &'a Item>) -> NameIndex {
    items
        .into_iter()
        .map(|item| (item.name.clone(), item.id))
        .collect()
}

/// Partition of a requested name set against an authoritative mapping
///
/// Transient: produced by the resolver, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Identifiers of the requested names that exist, sorted by identifier
    pub resolved: BTreeSet<ItemId>,
    /// Requested names with no match, sorted by name
    pub unresolved: BTreeSet<String>,
}

impl ResolutionResult {
    /// True when every requested name resolved
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Resolved identifiers in canonical (ascending) order
    pub fn resolved_ids(&self) -> Vec<ItemId> {
        self.resolved.iter().copied().collect()
    }

    /// Unresolved names in canonical (ascending) order
    pub fn unresolved_names(&self) -> Vec<String> {
        self.unresolved.iter().cloned().collect()
    }
}
