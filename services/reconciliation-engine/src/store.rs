//! Store ports
//!
//! The engine treats persistence as an abstract queryable store. Adapters
//! implement these traits; `memory` ships the in-process ones.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;
use types::catalog::SellerCatalog;
use types::errors::StoreError;
use types::identity::{Identity, Role};
use types::ids::{AccountId, ItemId};
use types::item::{Item, NameIndex};
use types::order::Order;

/// Global item catalog (read-only from the engine's point of view)
#[async_trait]
pub trait ItemCatalogStore: Send + Sync {
    /// Full name → identifier mapping
    async fn name_index(&self) -> Result<NameIndex, StoreError>;

    /// Items for the given identifiers; unknown ids are simply absent
    async fn items_by_id(&self, ids: &[ItemId]) -> Result<HashMap<ItemId, Item>, StoreError>;
}

/// Per-seller catalogs
#[async_trait]
pub trait SellerCatalogRepository: Send + Sync {
    /// Replace the seller's item list, creating the catalog if needed
    ///
    /// Must be atomic per seller: concurrent upserts for one seller resolve
    /// to last-writer-wins, never to a mix of both lists.
    async fn upsert(
        &self,
        seller_id: AccountId,
        items: Vec<ItemId>,
        timestamp: i64,
    ) -> Result<SellerCatalog, StoreError>;

    /// Fails with `StoreError::NotFound` when the seller has no catalog
    async fn get(&self, seller_id: AccountId) -> Result<SellerCatalog, StoreError>;

    /// The seller's catalog joined against the item catalog, in stored order
    async fn lookup_joined(
        &self,
        seller_id: AccountId,
        items: &dyn ItemCatalogStore,
    ) -> Result<Vec<Item>, StoreError> {
        let catalog = self.get(seller_id).await?;
        let known = items.items_by_id(&catalog.items).await?;
        Ok(join_in_order(&catalog.items, &known))
    }
}

/// Identity store owned by the authentication layer
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    async fn find(&self, id: AccountId) -> Result<Option<Identity>, StoreError>;

    async fn list_by_role(&self, role: Role) -> Result<Vec<Identity>, StoreError>;
}

/// Order records (append-only)
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn insert(&self, order: Order) -> Result<(), StoreError>;

    /// Orders for one seller, oldest first
    async fn list_by_seller(&self, seller_id: AccountId) -> Result<Vec<Order>, StoreError>;
}

/// Handles to every store the engine talks to
#[derive(Clone)]
pub struct Stores {
    pub items: Arc<dyn ItemCatalogStore>,
    pub catalogs: Arc<dyn SellerCatalogRepository>,
    pub identities: Arc<dyn IdentityDirectory>,
    pub orders: Arc<dyn OrderRepository>,
}

/// Map identifiers to items, preserving `ids` order
///
/// Identifiers with no item behind them are dropped with a warning.
pub fn join_in_order(ids: &[ItemId], known: &HashMap<ItemId, Item>) -> Vec<Item> {
    ids.iter()
        .filter_map(|id| {
            let item = known.get(id).cloned();
            if item.is_none() {
                warn!(item_id = %id, "Dangling item reference skipped in join");
            }
            item
        })
        .collect()
}
