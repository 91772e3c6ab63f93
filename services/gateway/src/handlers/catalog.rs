use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::models::{CatalogResponse, ItemsRequest, SellerCatalogResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

pub async fn create_catalog(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    payload: Result<Json<ItemsRequest>, JsonRejection>,
) -> Result<Json<CatalogResponse>, AppError> {
    state.rate_limiter.check(&user, "catalog_update")?;

    let Json(payload) = payload?;
    let receipt = state.market.register_catalog(&user, &payload.items).await?;

    Ok(Json(receipt.into()))
}

pub async fn get_catalog(
    State(state): State<AppState>,
    Path(seller_id): Path<String>,
) -> Result<Json<SellerCatalogResponse>, AppError> {
    let items = state.market.seller_catalog(&seller_id).await?;

    Ok(Json(SellerCatalogResponse { seller_id, items }))
}
