use axum::{extract::State, http::StatusCode};
use cartoffer_core::OfferRepository;

use crate::state::AppState;

/// POST /api/v1/test/reset
/// Drop all registered offers. For test isolation only.
pub async fn reset_state(State(state): State<AppState>) -> StatusCode {
    state.offer_repo.clear().await;
    StatusCode::OK
}
