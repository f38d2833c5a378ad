use async_trait::async_trait;

/// Why a segment lookup produced no usable label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    #[error("segment service unreachable: {0}")]
    Network(String),
    #[error("segment service returned HTTP {0}")]
    Status(u16),
    #[error("invalid segment payload: {0}")]
    Decode(String),
}

/// External service that maps a user to a cohort label
#[async_trait]
pub trait SegmentLookup: Send + Sync {
    async fn lookup_segment(&self, user_id: i64) -> Result<String, SegmentError>;
}
