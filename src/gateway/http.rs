//! HTTP implementation of the submission gateway.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::gateway::{SubmissionAck, SubmissionGateway, SubmissionRequest, TransportError};
use crate::model::{PixelPoint, PointLabel};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Configuration for the HTTP submission endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// URL the point submission is POSTed to
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GatewayConfig {
    /// Create a config for the given endpoint with the default timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Gateway that POSTs collected points as JSON to a configured endpoint.
#[derive(Debug)]
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    /// Build a gateway with its own HTTP client.
    pub fn new(config: GatewayConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Get the configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl SubmissionGateway for HttpGateway {
    fn submit(
        &self,
        source_id: &str,
        pixels: &[PixelPoint],
        labels: &[PointLabel],
    ) -> Result<SubmissionAck, TransportError> {
        let request = SubmissionRequest::new(source_id, pixels, labels)?;

        log::info!(
            "Submitting {} points for {} to {}",
            request.point_coords.len(),
            request.tif_link,
            self.config.endpoint
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(SubmissionAck {
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GatewayConfig::new("http://localhost:8000/segment");
        assert_eq!(config.endpoint, "http://localhost:8000/segment");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_config_timeout_setter() {
        let config = GatewayConfig::new("http://localhost:8000/segment").timeout_secs(5);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_config_deserializes_without_timeout() {
        let config: GatewayConfig =
            serde_json::from_str(r#"{"endpoint": "http://backend/segment"}"#).unwrap();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
