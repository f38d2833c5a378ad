pub mod repository;
pub mod segment;

pub use repository::OfferRepository;
pub use segment::{SegmentError, SegmentLookup};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
