use crate::handlers::{self, catalog, order, seller};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/catalog", post(catalog::create_catalog))
        .route("/catalog/{seller_id}", get(catalog::get_catalog))
        .route("/order/{seller_id}", post(order::create_order))
        .route("/orders", get(order::seller_orders))
        .route("/sellers", get(seller::list_sellers));

    Router::new()
        .nest("/v1", api_routes)
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
