//! Catalog builder
//!
//! Registers a seller's catalog: resolves the requested names against the
//! global item catalog and replaces the seller's item list with the result.
//!
//! Stages: validating → resolving → {rejected | persisting → done}. All
//! rejections happen before the upsert, so a rejected build never touches
//! the stored catalog.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};
use types::errors::ReconcileError;
use types::identity::{Identity, Role};
use types::ids::{AccountId, ItemId};

use crate::config::EngineConfig;
use crate::guard;
use crate::resolver::resolve;
use crate::store::{ItemCatalogStore, SellerCatalogRepository, Stores};
use crate::validation;

/// Outcome of a successful catalog build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReceipt {
    pub seller_id: AccountId,
    /// Resolved identifiers in ascending order, as stored
    pub items: Vec<ItemId>,
    pub version: u64,
}

pub struct CatalogBuilder {
    items: Arc<dyn ItemCatalogStore>,
    catalogs: Arc<dyn SellerCatalogRepository>,
    config: EngineConfig,
}

impl CatalogBuilder {
    pub fn new(stores: &Stores, config: EngineConfig) -> Self {
        Self {
            items: stores.items.clone(),
            catalogs: stores.catalogs.clone(),
            config,
        }
    }

    /// Build (or fully replace) the seller's catalog
    ///
    /// The seller id comes from the authenticated identity, so it is
    /// well-formed by construction; only the role is checked here.
    /// Re-registration is not additive: callers resend the complete list.
    pub async fn build(
        &self,
        seller: &Identity,
        requested: &[String],
    ) -> Result<CatalogReceipt, ReconcileError> {
        validation::require_role(seller, Role::Seller)?;
        validation::requested_names(requested)?;

        let index = guard::bounded(self.config.store_timeout, self.items.name_index())
            .await
            .map_err(|e| guard::surface("items.name_index", e))?;

        let resolution = resolve(requested, &index);
        debug!(
            seller_id = %seller.id,
            resolved = resolution.resolved.len(),
            unresolved = resolution.unresolved.len(),
            "Catalog names resolved"
        );

        if !resolution.is_complete() {
            let names = resolution.unresolved_names();
            warn!(seller_id = %seller.id, ?names, "Catalog rejected: unknown items");
            return Err(ReconcileError::RejectedUnavailable { names });
        }

        let catalog = guard::bounded(
            self.config.store_timeout,
            self.catalogs
                .upsert(seller.id, resolution.resolved_ids(), guard::now_nanos()),
        )
        .await
        .map_err(|e| guard::surface("catalogs.upsert", e))?;

        info!(
            seller_id = %catalog.seller_id,
            items = catalog.items.len(),
            version = catalog.version,
            "Seller catalog stored"
        );

        Ok(CatalogReceipt {
            seller_id: catalog.seller_id,
            items: catalog.items,
            version: catalog.version,
        })
    }
}
