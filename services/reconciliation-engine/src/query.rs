//! Read-side queries: seller order listings, seller catalogs, seller directory

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;
use types::errors::{ReconcileError, StoreError};
use types::identity::{Identity, Role};
use types::ids::{AccountId, ItemId, OrderId};
use types::item::Item;

use crate::config::EngineConfig;
use crate::guard;
use crate::store::{
    join_in_order, IdentityDirectory, ItemCatalogStore, OrderRepository, SellerCatalogRepository,
    Stores,
};
use crate::validation;

/// An order as the seller sees it: item names instead of identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerOrderView {
    pub order_id: OrderId,
    pub buyer_id: AccountId,
    pub items: Vec<String>,
    pub created_at: i64,
}

pub struct MarketQuery {
    items: Arc<dyn ItemCatalogStore>,
    catalogs: Arc<dyn SellerCatalogRepository>,
    identities: Arc<dyn IdentityDirectory>,
    orders: Arc<dyn OrderRepository>,
    config: EngineConfig,
}

impl MarketQuery {
    pub fn new(stores: &Stores, config: EngineConfig) -> Self {
        Self {
            items: stores.items.clone(),
            catalogs: stores.catalogs.clone(),
            identities: stores.identities.clone(),
            orders: stores.orders.clone(),
            config,
        }
    }

    /// Every order placed with `seller`, oldest first, items named
    pub async fn seller_orders(
        &self,
        seller: &Identity,
    ) -> Result<Vec<SellerOrderView>, ReconcileError> {
        validation::require_role(seller, Role::Seller)?;

        let orders = guard::bounded(self.config.store_timeout, self.orders.list_by_seller(seller.id))
            .await
            .map_err(|e| guard::surface("orders.list_by_seller", e))?;

        let referenced: Vec<ItemId> = orders
            .iter()
            .flat_map(|order| order.items.iter().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let known = guard::bounded(self.config.store_timeout, self.items.items_by_id(&referenced))
            .await
            .map_err(|e| guard::surface("items.items_by_id", e))?;

        debug!(seller_id = %seller.id, orders = orders.len(), "Seller orders loaded");

        Ok(orders
            .into_iter()
            .map(|order| SellerOrderView {
                order_id: order.order_id,
                buyer_id: order.buyer_id,
                items: join_in_order(&order.items, &known)
                    .into_iter()
                    .map(|item| item.name)
                    .collect(),
                created_at: order.created_at,
            })
            .collect())
    }

    /// The seller's catalog as `(id, name)` pairs; no catalog means empty
    pub async fn seller_catalog(&self, seller_id: &str) -> Result<Vec<Item>, ReconcileError> {
        let seller_id = AccountId::parse(seller_id, "seller_id")?;
        let lookup = self.catalogs.lookup_joined(seller_id, self.items.as_ref());

        match guard::bounded(self.config.store_timeout, lookup).await {
            Ok(items) => Ok(items),
            Err(StoreError::NotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(guard::surface("catalogs.lookup_joined", e)),
        }
    }

    /// All accounts holding the `seller` role, ordered by id
    pub async fn list_sellers(&self) -> Result<Vec<AccountId>, ReconcileError> {
        let sellers = guard::bounded(
            self.config.store_timeout,
            self.identities.list_by_role(Role::Seller),
        )
        .await
        .map_err(|e| guard::surface("identities.list_by_role", e))?;

        Ok(sellers.into_iter().map(|identity| identity.id).collect())
    }
}
