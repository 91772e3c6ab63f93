//! Order types
//!
//! An order is written once, after every requested name resolved against the
//! seller's catalog, and never updated afterwards.

use crate::ids::{AccountId, ItemId, OrderId};
use serde::{Deserialize, Serialize};

/// A buyer's validated order against one seller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub seller_id: AccountId,
    pub buyer_id: AccountId,
    /// Resolved item identifiers in ascending identifier order
    pub items: Vec<ItemId>,
    pub created_at: i64, // Unix nanos
}

impl Order {
    /// Create a new order
    ///
    /// `items` is sorted and deduplicated so the persisted record does not
    /// depend on request order.
    pub fn new(
        seller_id: AccountId,
        buyer_id: AccountId,
        items: impl IntoIterator<Item = ItemId>,
        timestamp: i64,
    ) -> Self {
        let mut items: Vec<ItemId> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();

        Self {
            order_id: OrderId::new(),
            seller_id,
            buyer_id,
            items,
            created_at: timestamp,
        }
    }

    pub fn is_for_seller(&self, seller_id: &AccountId) -> bool {
        self.seller_id == *seller_id
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn item_ids() -> impl Strategy<Value = Vec<ItemId>> {
        prop::collection::vec(0u128..16, 0..24)
            .prop_map(|raw| raw.into_iter().map(|n| ItemId::from_uuid(Uuid::from_u128(n))).collect())
    }

    proptest! {
        #[test]
        fn items_are_sorted_and_unique(ids in item_ids()) {
            let order = Order::new(AccountId::new(), AccountId::new(), ids.clone(), 0);

            prop_assert!(order.items.windows(2).all(|pair| pair[0] < pair[1]));
            for id in &ids {
                prop_assert!(order.items.contains(id));
            }
        }

        #[test]
        fn request_order_is_irrelevant(ids in item_ids()) {
            let mut reversed = ids.clone();
            reversed.reverse();

            let forward = Order::new(AccountId::new(), AccountId::new(), ids, 0);
            let backward = Order::new(AccountId::new(), AccountId::new(), reversed, 0);
            prop_assert_eq!(forward.items, backward.items);
        }
    }
}
