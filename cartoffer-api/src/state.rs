use std::sync::Arc;
use cartoffer_core::{OfferRepository, SegmentLookup};
use cartoffer_offer::{OfferRegistry, OfferResolver};

#[derive(Clone)]
pub struct AppState {
    pub offer_repo: Arc<dyn OfferRepository>,
    pub resolver: OfferResolver,
}

impl AppState {
    pub fn new(offer_repo: Arc<dyn OfferRepository>, segments: Arc<dyn SegmentLookup>) -> Self {
        let resolver = OfferResolver::new(offer_repo.clone(), segments);
        Self { offer_repo, resolver }
    }

    /// Fresh in-memory registry wired to the given segment service
    pub fn in_memory(segments: Arc<dyn SegmentLookup>) -> Self {
        Self::new(Arc::new(OfferRegistry::new()), segments)
    }
}
