use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::models::{ItemsRequest, OrderResponse, SellerOrdersResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use types::errors::ReconcileError;

pub async fn create_order(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(seller_id): Path<String>,
    payload: Result<Json<ItemsRequest>, JsonRejection>,
) -> Result<Json<OrderResponse>, AppError> {
    state.rate_limiter.check(&user, "order_placement")?;

    let Json(payload) = payload?;
    let order = state
        .market
        .place_order(&user, &seller_id, &payload.items)
        .await?;

    Ok(Json(order.into()))
}

pub async fn seller_orders(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<SellerOrdersResponse>, AppError> {
    let orders = state
        .market
        .seller_orders(&user)
        .await
        .map_err(|err| match err {
            ReconcileError::RoleMismatch { required, .. } => {
                AppError::Unauthorized(format!("please login as a `{required}`"))
            }
            other => other.into(),
        })?;

    Ok(Json(SellerOrdersResponse { orders }))
}
