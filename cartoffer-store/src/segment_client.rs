use std::time::Duration;

use async_trait::async_trait;
use cartoffer_core::{CoreError, CoreResult, SegmentError, SegmentLookup};
use cartoffer_shared::SegmentResponse;
use reqwest::{header, Client};

use crate::app_config::SegmentServiceConfig;

/// HTTP client for the user segment service
pub struct HttpSegmentClient {
    client: Client,
    base_url: String,
}

impl HttpSegmentClient {
    pub fn new(config: &SegmentServiceConfig) -> CoreResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(CoreError::ValidationError(
                "segment_service.base_url must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| CoreError::InternalError(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SegmentLookup for HttpSegmentClient {
    async fn lookup_segment(&self, user_id: i64) -> Result<String, SegmentError> {
        let response = self
            .client
            .get(format!("{}/api/v1/user_segment", self.base_url))
            .query(&[("user_id", user_id)])
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SegmentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SegmentError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SegmentError::Network(e.to_string()))?;

        let parsed: SegmentResponse = serde_json::from_slice(&body)
            .map_err(|e| SegmentError::Decode(e.to_string()))?;

        tracing::debug!(user_id, segment = %parsed.segment, "Resolved user segment");
        Ok(parsed.segment)
    }
}
