use async_trait::async_trait;
use reqwest::Client;

use crate::decoder::PixelArray;
use crate::engine::Engine;
use crate::error::GatewayError;
use crate::labels::{CLASS_NAMES, argmax};
use crate::types::{Classification, ServingRequest, ServingResponse};

/// Engine backed by a TensorFlow Serving REST endpoint.
///
/// One synchronous call per prediction, no retries and no explicit
/// timeout: a hung endpoint hangs the request task that is waiting on it.
pub struct ServingEngine {
    client: Client,
    endpoint: String,
}

impl ServingEngine {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl Engine for ServingEngine {
    #[tracing::instrument(
        skip(self, image),
        fields(height = image.height(), width = image.width(), channels = image.channels())
    )]
    async fn predict(&self, image: PixelArray) -> Result<Classification, GatewayError> {
        // The serving contract is batch-shaped even for a single image.
        let request = ServingRequest {
            instances: vec![image],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|err| GatewayError::Unexpected(err.to_string()))?;
        if body.get("predictions").is_none() {
            return Err(GatewayError::InvalidResponse);
        }
        let parsed: ServingResponse =
            serde_json::from_value(body).map_err(|err| GatewayError::Unexpected(err.to_string()))?;

        let scores = parsed
            .predictions
            .first()
            .ok_or_else(|| GatewayError::Unexpected("empty predictions array".to_string()))?;
        let (index, confidence) = argmax(scores)
            .ok_or_else(|| GatewayError::Unexpected("empty probability vector".to_string()))?;
        let class = CLASS_NAMES
            .get(index)
            .ok_or_else(|| GatewayError::Unexpected(format!("class index {index} out of range")))?;

        tracing::debug!(class, confidence, "Resolved prediction");
        Ok(Classification {
            class: (*class).to_string(),
            confidence,
        })
    }
}
