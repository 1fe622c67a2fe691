use serde::{Deserialize, Serialize};

use crate::decoder::PixelArray;
use crate::error::GatewayError;

/// Request body for the TensorFlow Serving REST predict API. Requests are
/// always batched; this gateway sends exactly one instance.
#[derive(Debug, Serialize)]
pub struct ServingRequest {
    pub instances: Vec<PixelArray>,
}

/// Response body from the predict API: one probability vector per
/// instance, in request order.
#[derive(Debug, Deserialize)]
pub struct ServingResponse {
    pub predictions: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub class: String,
    pub confidence: f64,
}

/// Body of a `/predict` response: either a classification or an error,
/// never both. The HTTP status is 200 in both cases.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Classified(Classification),
    Failed { error: String },
}

impl From<Result<Classification, GatewayError>> for PredictResponse {
    fn from(outcome: Result<Classification, GatewayError>) -> Self {
        match outcome {
            Ok(classification) => PredictResponse::Classified(classification),
            Err(err) => PredictResponse::Failed {
                error: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn classified_body_has_class_and_confidence_only() {
        let body = PredictResponse::Classified(Classification {
            class: "Tomato_healthy".to_string(),
            confidence: 0.93,
        });
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"class": "Tomato_healthy", "confidence": 0.93})
        );
    }

    #[test]
    fn failed_body_has_error_only() {
        let body = PredictResponse::from(Err(GatewayError::InvalidResponse));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"error": "Invalid response from TensorFlow Serving"})
        );
    }

    #[test]
    fn serving_request_wraps_instances() {
        let request = ServingRequest {
            instances: vec![PixelArray::new(vec![vec![vec![1, 2, 3]]])],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"instances": [[[[1, 2, 3]]]]})
        );
    }
}
