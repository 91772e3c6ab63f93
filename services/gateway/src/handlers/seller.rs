use crate::error::AppError;
use crate::models::SellersResponse;
use crate::state::AppState;
use axum::{Json, extract::State};

pub async fn list_sellers(State(state): State<AppState>) -> Result<Json<SellersResponse>, AppError> {
    let sellers = state.market.list_sellers().await?;

    Ok(Json(SellersResponse { sellers }))
}
