use std::sync::Arc;

use cartoffer_core::{OfferRepository, SegmentLookup};
use cartoffer_shared::{ApplyOfferRequest, ApplyOfferResponse};

use crate::rules;

/// Resolves which offer applies at checkout and prices the cart
#[derive(Clone)]
pub struct OfferResolver {
    repository: Arc<dyn OfferRepository>,
    segments: Arc<dyn SegmentLookup>,
}

impl OfferResolver {
    pub fn new(repository: Arc<dyn OfferRepository>, segments: Arc<dyn SegmentLookup>) -> Self {
        Self { repository, segments }
    }

    /// Apply the first matching offer to the cart.
    ///
    /// Never fails: a segment lookup error degrades to "no segment", which
    /// matches no offer, so the cart comes back unchanged. The returned value
    /// is never negative, whatever the request carries.
    pub async fn apply_offer(&self, req: &ApplyOfferRequest) -> ApplyOfferResponse {
        let original = req.cart_value.max(0);

        let segment = match self.segments.lookup_segment(req.user_id).await {
            Ok(segment) => segment,
            Err(e) => {
                tracing::warn!(user_id = req.user_id, "Error fetching segment: {}", e);
                String::new()
            }
        };

        let matched = self
            .repository
            .find_first_match(req.restaurant_id, &segment)
            .await;
        let Some(offer) = matched else {
            tracing::info!(
                user_id = req.user_id,
                restaurant_id = req.restaurant_id,
                "No matching offer found for user {} in segment {:?}",
                req.user_id,
                segment
            );
            return ApplyOfferResponse { cart_value: original };
        };

        let cart_value = rules::apply_discount(offer.kind, original, offer.offer_value);

        tracing::info!(
            offer_id = %offer.id,
            restaurant_id = req.restaurant_id,
            "Applied offer {} for segment {}: {} -> {}",
            offer.offer_type,
            segment,
            original,
            cart_value
        );

        ApplyOfferResponse { cart_value }
    }
}
