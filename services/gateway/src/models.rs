use reconciliation_engine::{CatalogReceipt, SellerOrderView};
use serde::{Deserialize, Serialize};
use types::ids::{AccountId, ItemId, OrderId};
use types::item::Item;
use types::order::Order;

/// Body of `POST /catalog` and `POST /order/{seller_id}`
///
/// A missing `items` field deserializes as empty and is rejected by the
/// engine with a descriptive message.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemsRequest {
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub message: String,
    pub seller_id: AccountId,
    pub items: Vec<ItemId>,
    pub version: u64,
}

impl From<CatalogReceipt> for CatalogResponse {
    fn from(receipt: CatalogReceipt) -> Self {
        Self {
            message: "successfully created catalog".to_string(),
            seller_id: receipt.seller_id,
            items: receipt.items,
            version: receipt.version,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub message: String,
    pub order_id: OrderId,
    pub items: Vec<ItemId>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            message: "order successfully created".to_string(),
            order_id: order.order_id,
            items: order.items,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SellerOrdersResponse {
    pub orders: Vec<SellerOrderView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SellerCatalogResponse {
    pub seller_id: String,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SellersResponse {
    pub sellers: Vec<AccountId>,
}
