use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use cartoffer_core::OfferRepository;
use cartoffer_shared::{ApiResponse, ApplyOfferRequest, ApplyOfferResponse, Offer, OfferRequest};

use crate::error::AppError;
use crate::state::AppState;

/// POST /api/v1/offer
/// Register a merchant offer
pub async fn submit_offer(
    State(state): State<AppState>,
    payload: Result<Json<OfferRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, AppError> {
    let Json(req) = payload?;
    tracing::info!(
        restaurant_id = req.restaurant_id,
        offer_type = %req.offer_type,
        offer_value = req.offer_value,
        "Received offer"
    );

    state.offer_repo.submit(Offer::from(req)).await;

    Ok(Json(ApiResponse::success()))
}

/// POST /api/v1/cart/apply_offer
/// Price a cart with the first offer matching the user's segment
pub async fn apply_offer(
    State(state): State<AppState>,
    payload: Result<Json<ApplyOfferRequest>, JsonRejection>,
) -> Result<Json<ApplyOfferResponse>, AppError> {
    let Json(req) = payload?;
    Ok(Json(state.resolver.apply_offer(&req).await))
}
