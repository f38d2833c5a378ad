use async_trait::async_trait;
use cartoffer_core::OfferRepository;
use cartoffer_shared::Offer;
use tokio::sync::RwLock;

/// In-memory offer store, ordered by arrival
pub struct OfferRegistry {
    offers: RwLock<Vec<Offer>>,
}

impl OfferRegistry {
    pub fn new() -> Self {
        Self {
            offers: RwLock::new(Vec::new()),
        }
    }
}

impl Default for OfferRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OfferRepository for OfferRegistry {
    async fn submit(&self, offer: Offer) {
        tracing::debug!(
            offer_id = %offer.id,
            restaurant_id = offer.restaurant_id,
            offer_type = %offer.offer_type,
            created_at = %offer.created_at,
            "Registering offer"
        );
        self.offers.write().await.push(offer);
    }

    async fn clear(&self) {
        let mut offers = self.offers.write().await;
        let removed = offers.len();
        offers.clear();
        tracing::info!("Offer registry cleared ({} offers removed)", removed);
    }

    async fn find_first_match(&self, restaurant_id: i64, segment: &str) -> Option<Offer> {
        if segment.is_empty() {
            return None;
        }

        self.offers
            .read()
            .await
            .iter()
            .find(|o| o.restaurant_id == restaurant_id && o.is_eligible(segment))
            .cloned()
    }

    async fn len(&self) -> usize {
        self.offers.read().await.len()
    }
}
