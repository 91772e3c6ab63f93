//! Seller catalog types

use serde::{Deserialize, Serialize};

use crate::ids::{AccountId, ItemId};

/// The set of items one seller offers
///
/// One catalog per seller. Re-registration replaces `items` wholesale and
/// bumps `version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerCatalog {
    pub seller_id: AccountId,
    pub items: Vec<ItemId>,
    pub version: u64,
    pub updated_at: i64, // Unix nanos
}

impl SellerCatalog {
    /// First registration for a seller
    pub fn new(seller_id: AccountId, items: Vec<ItemId>, timestamp: i64) -> Self {
        Self {
            seller_id,
            items,
            version: 1,
            updated_at: timestamp,
        }
    }

    /// Replace the item list (not a merge)
    pub fn replace_items(&mut self, items: Vec<ItemId>, timestamp: i64) {
        self.items = items;
        self.version += 1;
        self.updated_at = timestamp;
    }
}
