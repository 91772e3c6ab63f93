//! In-process store adapters
//!
//! DashMap-backed implementations of the store ports. Per-key operations
//! take the shard lock, which is what gives `upsert` its per-seller
//! atomicity.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use types::catalog::SellerCatalog;
use types::errors::StoreError;
use types::identity::{Identity, Role};
use types::ids::{AccountId, ItemId, OrderId};
use types::item::{Item, NameIndex};
use types::order::Order;

use crate::store::{
    IdentityDirectory, ItemCatalogStore, OrderRepository, SellerCatalogRepository, Stores,
};

/// Global item catalog with write-time name uniqueness
#[derive(Default)]
pub struct InMemoryItemCatalog {
    by_id: DashMap<ItemId, Item>,
    by_name: DashMap<String, ItemId>,
}

impl InMemoryItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item under a fresh identifier
    ///
    /// Fails with `DuplicateName` if the name is already taken.
    pub fn insert(&self, name: impl Into<String>) -> Result<Item, StoreError> {
        self.insert_item(Item::new(name))
    }

    /// Add an item with a caller-chosen identifier (seed data)
    ///
    /// Both the id and the name must be unused. The id shard is locked
    /// before the name shard on every insert.
    pub fn insert_item(&self, item: Item) -> Result<Item, StoreError> {
        let id_slot = match self.by_id.entry(item.id) {
            Entry::Occupied(_) => return Err(StoreError::DuplicateId(item.id)),
            Entry::Vacant(slot) => slot,
        };
        match self.by_name.entry(item.name.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateName(item.name)),
            Entry::Vacant(name_slot) => {
                id_slot.insert(item.clone());
                name_slot.insert(item.id);
                debug!(item_id = %item.id, name = %item.name, "Item added to catalog");
                Ok(item)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[async_trait]
impl ItemCatalogStore for InMemoryItemCatalog {
    async fn name_index(&self) -> Result<NameIndex, StoreError> {
        Ok(self
            .by_name
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect())
    }

    async fn items_by_id(&self, ids: &[ItemId]) -> Result<HashMap<ItemId, Item>, StoreError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.by_id.get(id).map(|item| (*id, item.clone())))
            .collect())
    }
}

/// Seller catalogs keyed by seller id
#[derive(Default)]
pub struct InMemorySellerCatalogs {
    catalogs: DashMap<AccountId, SellerCatalog>,
}

impl InMemorySellerCatalogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

#[async_trait]
impl SellerCatalogRepository for InMemorySellerCatalogs {
    async fn upsert(
        &self,
        seller_id: AccountId,
        items: Vec<ItemId>,
        timestamp: i64,
    ) -> Result<SellerCatalog, StoreError> {
        let catalog = match self.catalogs.entry(seller_id) {
            Entry::Occupied(mut existing) => {
                existing.get_mut().replace_items(items, timestamp);
                existing.get().clone()
            }
            Entry::Vacant(slot) => slot
                .insert(SellerCatalog::new(seller_id, items, timestamp))
                .clone(),
        };
        Ok(catalog)
    }

    async fn get(&self, seller_id: AccountId) -> Result<SellerCatalog, StoreError> {
        self.catalogs
            .get(&seller_id)
            .map(|catalog| catalog.clone())
            .ok_or_else(|| StoreError::NotFound(format!("catalog for seller {seller_id}")))
    }
}

/// Registered identities
#[derive(Default)]
pub struct InMemoryIdentities {
    identities: DashMap<AccountId, Identity>,
}

impl InMemoryIdentities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or re-register) an identity
    pub fn register(&self, identity: Identity) {
        self.identities.insert(identity.id, identity);
    }
}

#[async_trait]
impl IdentityDirectory for InMemoryIdentities {
    async fn find(&self, id: AccountId) -> Result<Option<Identity>, StoreError> {
        Ok(self.identities.get(&id).map(|identity| *identity))
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<Identity>, StoreError> {
        let mut matching: Vec<Identity> = self
            .identities
            .iter()
            .filter(|entry| entry.role == role)
            .map(|entry| *entry.value())
            .collect();
        matching.sort_by_key(|identity| identity.id);
        Ok(matching)
    }
}

/// Append-only order records
#[derive(Default)]
pub struct InMemoryOrders {
    orders: DashMap<OrderId, Order>,
}

impl InMemoryOrders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn insert(&self, order: Order) -> Result<(), StoreError> {
        self.orders.insert(order.order_id, order);
        Ok(())
    }

    async fn list_by_seller(&self, seller_id: AccountId) -> Result<Vec<Order>, StoreError> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|entry| entry.is_for_seller(&seller_id))
            .map(|entry| entry.value().clone())
            .collect();
        orders.sort_by_key(|order| (order.created_at, order.order_id));
        Ok(orders)
    }
}

/// The full set of in-process stores, with typed handles for seeding
#[derive(Clone, Default)]
pub struct InMemoryStores {
    pub items: Arc<InMemoryItemCatalog>,
    pub catalogs: Arc<InMemorySellerCatalogs>,
    pub identities: Arc<InMemoryIdentities>,
    pub orders: Arc<InMemoryOrders>,
}

impl InMemoryStores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type-erased handles for the engine
    pub fn stores(&self) -> Stores {
        Stores {
            items: self.items.clone(),
            catalogs: self.catalogs.clone(),
            identities: self.identities.clone(),
            orders: self.orders.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_item_catalog_rejects_duplicate_names() {
        let catalog = InMemoryItemCatalog::new();
        catalog.insert("apple").unwrap();

        let err = catalog.insert("apple").unwrap_err();
        assert_eq!(err, StoreError::DuplicateName("apple".to_string()));
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_item_catalog_rejects_reused_id() {
        let catalog = InMemoryItemCatalog::new();
        let apple = catalog.insert("apple").unwrap();

        let err = catalog
            .insert_item(Item {
                id: apple.id,
                name: "pear".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(apple.id));
        assert_eq!(catalog.len(), 1);

        let index = catalog.name_index().await.unwrap();
        assert!(!index.contains_key("pear"));
        let by_id = catalog.items_by_id(&[apple.id]).await.unwrap();
        assert_eq!(by_id[&apple.id].name, "apple");
    }

    #[tokio::test]
    async fn test_reused_id_cannot_break_seller_resolution() {
        let stores = InMemoryStores::new();
        let apple = stores.items.insert("apple").unwrap();
        assert!(stores
            .items
            .insert_item(Item {
                id: apple.id,
                name: "pear".to_string(),
            })
            .is_err());

        let seller = AccountId::new();
        stores.catalogs.upsert(seller, vec![apple.id], 1).await.unwrap();

        let joined = stores
            .catalogs
            .lookup_joined(seller, stores.items.as_ref())
            .await
            .unwrap();
        assert_eq!(joined, vec![apple]);
    }

    #[tokio::test]
    async fn test_item_catalog_name_index() {
        let catalog = InMemoryItemCatalog::new();
        let apple = catalog.insert("apple").unwrap();
        let banana = catalog.insert("banana").unwrap();

        let index = catalog.name_index().await.unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index["apple"], apple.id);
        assert_eq!(index["banana"], banana.id);
    }

    #[tokio::test]
    async fn test_upsert_creates_then_replaces() {
        let repo = InMemorySellerCatalogs::new();
        let seller = AccountId::new();
        let (a, b, c) = (ItemId::new(), ItemId::new(), ItemId::new());

        let first = repo.upsert(seller, vec![a, b], 1).await.unwrap();
        assert_eq!(first.version, 1);

        let second = repo.upsert(seller, vec![c], 2).await.unwrap();
        assert_eq!(second.items, vec![c]);
        assert_eq!(second.version, 2);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_catalog_is_not_found() {
        let repo = InMemorySellerCatalogs::new();
        let err = repo.get(AccountId::new()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_lookup_joined_preserves_order() {
        let stores = InMemoryStores::new();
        let apple = stores.items.insert("apple").unwrap();
        let banana = stores.items.insert("banana").unwrap();
        let seller = AccountId::new();
        stores
            .catalogs
            .upsert(seller, vec![banana.id, apple.id], 1)
            .await
            .unwrap();

        let joined = stores
            .catalogs
            .lookup_joined(seller, stores.items.as_ref())
            .await
            .unwrap();
        assert_eq!(joined, vec![banana, apple]);
    }

    #[tokio::test]
    async fn test_identities_list_by_role() {
        let identities = InMemoryIdentities::new();
        let seller = Identity::seller(AccountId::new());
        identities.register(Identity::buyer(AccountId::new()));
        identities.register(seller);

        let sellers = identities.list_by_role(Role::Seller).await.unwrap();
        assert_eq!(sellers, vec![seller]);
    }

    #[tokio::test]
    async fn test_orders_listed_per_seller_oldest_first() {
        let orders = InMemoryOrders::new();
        let seller = AccountId::new();
        let later = Order::new(seller, AccountId::new(), [ItemId::new()], 20);
        let earlier = Order::new(seller, AccountId::new(), [ItemId::new()], 10);
        let other = Order::new(AccountId::new(), AccountId::new(), [ItemId::new()], 5);
        for order in [later.clone(), earlier.clone(), other] {
            orders.insert(order).await.unwrap();
        }

        let listed = orders.list_by_seller(seller).await.unwrap();
        assert_eq!(listed, vec![earlier, later]);
    }
}
