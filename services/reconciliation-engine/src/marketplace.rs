//! Marketplace facade
//!
//! Single entry point the gateway holds: catalog registration, order
//! placement, and the read-side queries, all over one set of stores.

use types::errors::ReconcileError;
use types::identity::Identity;
use types::ids::AccountId;
use types::item::Item;
use types::order::Order;

use crate::catalog_builder::{CatalogBuilder, CatalogReceipt};
use crate::config::EngineConfig;
use crate::order_builder::OrderBuilder;
use crate::query::{MarketQuery, SellerOrderView};
use crate::store::Stores;

pub struct Marketplace {
    catalogs: CatalogBuilder,
    orders: OrderBuilder,
    query: MarketQuery,
}

impl Marketplace {
    pub fn new(stores: Stores, config: EngineConfig) -> Self {
        Self {
            catalogs: CatalogBuilder::new(&stores, config),
            orders: OrderBuilder::new(&stores, config),
            query: MarketQuery::new(&stores, config),
        }
    }

    /// Register or fully replace the caller's catalog
    pub async fn register_catalog(
        &self,
        seller: &Identity,
        items: &[String],
    ) -> Result<CatalogReceipt, ReconcileError> {
        self.catalogs.build(seller, items).await
    }

    /// Place an order with `seller_id` on behalf of `buyer`
    pub async fn place_order(
        &self,
        buyer: &Identity,
        seller_id: &str,
        items: &[String],
    ) -> Result<Order, ReconcileError> {
        self.orders.build(buyer, seller_id, items).await
    }

    pub async fn seller_orders(
        &self,
        seller: &Identity,
    ) -> Result<Vec<SellerOrderView>, ReconcileError> {
        self.query.seller_orders(seller).await
    }

    pub async fn seller_catalog(&self, seller_id: &str) -> Result<Vec<Item>, ReconcileError> {
        self.query.seller_catalog(seller_id).await
    }

    pub async fn list_sellers(&self) -> Result<Vec<AccountId>, ReconcileError> {
        self.query.list_sellers().await
    }
}
