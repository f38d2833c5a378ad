use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Discount formula an offer applies, derived from the merchant's `offer_type` label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferKind {
    /// `FLATX`: a fixed amount off the cart
    FlatAmount,
    /// Any label containing `PERCENT` (`FLAT_PERCENT`, `PERCENTAGE`, ...)
    Percentage,
    /// Anything else. Matches normally but never changes the cart.
    Unknown,
}

impl OfferKind {
    /// Classify a raw offer type label. Case-sensitive.
    pub fn classify(offer_type: &str) -> Self {
        if offer_type == "FLATX" {
            OfferKind::FlatAmount
        } else if offer_type.contains("PERCENT") {
            OfferKind::Percentage
        } else {
            OfferKind::Unknown
        }
    }
}

/// Offer as submitted by a merchant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OfferRequest {
    pub restaurant_id: i64,
    pub offer_type: String,
    pub offer_value: i64,
    #[serde(default)]
    pub customer_segment: Option<Vec<String>>,
}

impl OfferRequest {
    pub fn new(
        restaurant_id: i64,
        offer_type: &str,
        offer_value: i64,
        customer_segment: Option<Vec<String>>,
    ) -> Self {
        Self {
            restaurant_id,
            offer_type: offer_type.to_string(),
            offer_value,
            customer_segment,
        }
    }
}

/// An offer held by the registry. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub restaurant_id: i64,
    pub offer_type: String,
    pub kind: OfferKind,
    pub offer_value: i64,
    pub eligible_segments: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Offer {
    /// Check whether this offer targets the given segment.
    /// An empty segment label never matches, even if listed.
    pub fn is_eligible(&self, segment: &str) -> bool {
        !segment.is_empty() && self.eligible_segments.iter().any(|s| s == segment)
    }
}

impl From<OfferRequest> for Offer {
    fn from(req: OfferRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            restaurant_id: req.restaurant_id,
            kind: OfferKind::classify(&req.offer_type),
            offer_type: req.offer_type,
            offer_value: req.offer_value,
            eligible_segments: req.customer_segment.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }
}
