use thiserror::Error;

/// Failures on the prediction path. The `Display` strings are the exact
/// messages clients see in the `error` field of the response body.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The outbound call to the serving endpoint failed, including
    /// connection errors and non-2xx statuses.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The serving endpoint answered 2xx but the body had no
    /// `predictions` field.
    #[error("Invalid response from TensorFlow Serving")]
    InvalidResponse,

    /// Catch-all: undecodable upload, malformed response JSON, shape
    /// mismatches, an arg-max index past the label table.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<image::ImageError> for GatewayError {
    fn from(err: image::ImageError) -> Self {
        GatewayError::Unexpected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_carries_prefix_and_details() {
        let err = GatewayError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }

    #[test]
    fn invalid_response_message_is_fixed() {
        assert_eq!(
            GatewayError::InvalidResponse.to_string(),
            "Invalid response from TensorFlow Serving"
        );
    }

    #[test]
    fn unexpected_message_carries_prefix() {
        let err = GatewayError::Unexpected("boom".to_string());
        assert_eq!(err.to_string(), "Unexpected error: boom");
    }
}
