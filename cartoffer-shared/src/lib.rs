pub mod models;

pub use models::cart::{ApiResponse, ApplyOfferRequest, ApplyOfferResponse};
pub use models::offer::{Offer, OfferKind, OfferRequest};
pub use models::segment::SegmentResponse;
