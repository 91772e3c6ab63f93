//! End-to-end reconciliation scenarios
//!
//! Drives the `Marketplace` facade over in-memory stores the way the
//! gateway does: seller registers a catalog, buyers order against it.

use reconciliation_engine::{EngineConfig, InMemoryStores, Marketplace};
use reconciliation_engine::store::{ItemCatalogStore, OrderRepository, SellerCatalogRepository};
use types::errors::ReconcileError;
use types::identity::Identity;
use types::ids::AccountId;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

struct World {
    stores: InMemoryStores,
    market: Marketplace,
    seller: Identity,
    buyer: Identity,
}

fn world() -> World {
    init_tracing();
    let stores = InMemoryStores::new();
    for name in ["apple", "banana", "cherry"] {
        stores.items.insert(name).unwrap();
    }
    let seller = Identity::seller(AccountId::new());
    let buyer = Identity::buyer(AccountId::new());
    stores.identities.register(seller);
    stores.identities.register(buyer);

    let market = Marketplace::new(stores.stores(), EngineConfig::default());
    World {
        stores,
        market,
        seller,
        buyer,
    }
}

#[tokio::test]
async fn test_register_then_order_scenario() {
    let w = world();
    let index = w.stores.items.name_index().await.unwrap();
    let seller_id = w.seller.id.to_string();

    // Seller registers apple + banana
    let receipt = w
        .market
        .register_catalog(&w.seller, &names(&["apple", "banana"]))
        .await
        .unwrap();
    let mut expected = vec![index["apple"], index["banana"]];
    expected.sort();
    assert_eq!(receipt.items, expected);

    // cherry exists globally but not in the seller's catalog
    let err = w
        .market
        .place_order(&w.buyer, &seller_id, &names(&["apple", "cherry"]))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ReconcileError::RejectedUnavailable {
            names: names(&["cherry"])
        }
    );
    assert!(w.stores.orders.is_empty());

    // apple alone goes through
    let order = w
        .market
        .place_order(&w.buyer, &seller_id, &names(&["apple"]))
        .await
        .unwrap();
    assert_eq!(order.items, vec![index["apple"]]);
    assert_eq!(w.stores.orders.len(), 1);

    // Seller sees the order by item name
    let views = w.market.seller_orders(&w.seller).await.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].order_id, order.order_id);
    assert_eq!(views[0].items, names(&["apple"]));
}

#[tokio::test]
async fn test_reregistration_changes_what_buyers_can_order() {
    let w = world();
    let seller_id = w.seller.id.to_string();

    w.market
        .register_catalog(&w.seller, &names(&["apple", "banana"]))
        .await
        .unwrap();
    w.market
        .register_catalog(&w.seller, &names(&["cherry"]))
        .await
        .unwrap();

    let err = w
        .market
        .place_order(&w.buyer, &seller_id, &names(&["apple"]))
        .await
        .unwrap_err();
    assert!(matches!(err, ReconcileError::RejectedUnavailable { .. }));

    let order = w
        .market
        .place_order(&w.buyer, &seller_id, &names(&["cherry", "cherry"]))
        .await
        .unwrap();
    assert_eq!(order.items.len(), 1);

    let catalog = w.market.seller_catalog(&seller_id).await.unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].name, "cherry");
}

#[tokio::test]
async fn test_rejected_catalog_leaves_store_unchanged() {
    let w = world();

    let err = w
        .market
        .register_catalog(&w.seller, &names(&["apple", "mango", "kiwi"]))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ReconcileError::RejectedUnavailable {
            names: names(&["kiwi", "mango"])
        }
    );
    assert!(w.stores.catalogs.get(w.seller.id).await.is_err());
}

#[tokio::test]
async fn test_orders_for_unknown_seller() {
    let w = world();

    let err = w
        .market
        .place_order(&w.buyer, &AccountId::new().to_string(), &names(&["apple"]))
        .await
        .unwrap_err();
    assert!(matches!(err, ReconcileError::RejectedNoSuchSeller { .. }));
    assert!(w.stores.orders.list_by_seller(w.seller.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_sellers() {
    let w = world();
    let sellers = w.market.list_sellers().await.unwrap();
    assert_eq!(sellers, vec![w.seller.id]);
}
