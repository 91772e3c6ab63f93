//! Order builder
//!
//! Validates a buyer's request against the *seller-scoped* catalog (the
//! seller's registered items joined with the item catalog) and writes one
//! order referencing only resolved identifiers.
//!
//! Consistency: the sequence seller check → catalog read → resolve → order
//! write is not one transaction. A seller may replace their catalog between
//! the read and the write, in which case the order reflects the catalog as
//! it was read. This is an accepted relaxation, not an oversight.

use std::sync::Arc;
use tracing::{debug, info, warn};
use types::errors::{ReconcileError, StoreError};
use types::identity::{Identity, Role};
use types::ids::AccountId;
use types::item::{name_index, NameIndex};
use types::order::Order;

use crate::config::EngineConfig;
use crate::guard;
use crate::resolver::resolve;
use crate::store::{
    IdentityDirectory, ItemCatalogStore, OrderRepository, SellerCatalogRepository, Stores,
};
use crate::validation;

pub struct OrderBuilder {
    items: Arc<dyn ItemCatalogStore>,
    catalogs: Arc<dyn SellerCatalogRepository>,
    identities: Arc<dyn IdentityDirectory>,
    orders: Arc<dyn OrderRepository>,
    config: EngineConfig,
}

impl OrderBuilder {
    pub fn new(stores: &Stores, config: EngineConfig) -> Self {
        Self {
            items: stores.items.clone(),
            catalogs: stores.catalogs.clone(),
            identities: stores.identities.clone(),
            orders: stores.orders.clone(),
            config,
        }
    }

    /// Place an order with `seller_id` for the requested item names
    ///
    /// `seller_id` is the raw caller-supplied value and is validated here.
    pub async fn build(
        &self,
        buyer: &Identity,
        seller_id: &str,
        requested: &[String],
    ) -> Result<Order, ReconcileError> {
        validation::require_role(buyer, Role::Buyer)?;
        let seller_id = AccountId::parse(seller_id, "seller_id")?;
        validation::requested_names(requested)?;

        self.ensure_seller(seller_id).await?;

        let index = self.seller_index(seller_id).await?;
        let resolution = resolve(requested, &index);
        debug!(
            %seller_id,
            buyer_id = %buyer.id,
            resolved = resolution.resolved.len(),
            unresolved = resolution.unresolved.len(),
            "Order names resolved"
        );

        if !resolution.is_complete() {
            let names = resolution.unresolved_names();
            warn!(%seller_id, buyer_id = %buyer.id, ?names, "Order rejected: items not in seller catalog");
            return Err(ReconcileError::RejectedUnavailable { names });
        }

        let order = Order::new(seller_id, buyer.id, resolution.resolved, guard::now_nanos());
        guard::bounded(self.config.store_timeout, self.orders.insert(order.clone()))
            .await
            .map_err(|e| guard::surface("orders.insert", e))?;

        info!(
            order_id = %order.order_id,
            %seller_id,
            buyer_id = %buyer.id,
            items = order.items.len(),
            "Order created"
        );
        Ok(order)
    }

    /// The referenced account must exist and hold the `seller` role
    async fn ensure_seller(&self, seller_id: AccountId) -> Result<(), ReconcileError> {
        let found = guard::bounded(self.config.store_timeout, self.identities.find(seller_id))
            .await
            .map_err(|e| guard::surface("identities.find", e))?;

        match found {
            Some(identity) if identity.is_seller() => Ok(()),
            _ => {
                warn!(%seller_id, "Order rejected: no such seller");
                Err(ReconcileError::RejectedNoSuchSeller {
                    seller_id: seller_id.to_string(),
                })
            }
        }
    }

    /// Seller-scoped name index; a seller without a catalog has an empty one
    async fn seller_index(&self, seller_id: AccountId) -> Result<NameIndex, ReconcileError> {
        let lookup = self.catalogs.lookup_joined(seller_id, self.items.as_ref());
        match guard::bounded(self.config.store_timeout, lookup).await {
            Ok(items) => Ok(name_index(&items)),
            Err(StoreError::NotFound(_)) => {
                debug!(%seller_id, "Seller has no catalog; treating as empty");
                Ok(NameIndex::new())
            }
            Err(e) => Err(guard::surface("catalogs.lookup_joined", e)),
        }
    }
}
