use async_trait::async_trait;
use cartoffer_shared::Offer;

/// Repository trait for offer storage.
///
/// Offers are kept in submission order; lookups return the earliest match.
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Append an offer. Never rejects.
    async fn submit(&self, offer: Offer);

    /// Drop every stored offer.
    async fn clear(&self);

    /// First offer, in submission order, for `restaurant_id` whose eligible
    /// segments contain `segment` exactly.
    async fn find_first_match(&self, restaurant_id: i64, segment: &str) -> Option<Offer>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
