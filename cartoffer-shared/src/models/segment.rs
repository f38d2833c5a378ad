use serde::{Deserialize, Serialize};

/// Body returned by the user segment service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SegmentResponse {
    #[serde(default)]
    pub segment: String,
}
