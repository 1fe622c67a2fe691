use async_trait::async_trait;

use crate::decoder::PixelArray;
use crate::error::GatewayError;
use crate::types::Classification;

/// A classifier that turns a decoded image into a labelled prediction.
/// Callers get a `Result` and must handle both outcomes; nothing on the
/// prediction path panics across this seam.
#[async_trait]
pub trait Engine: Send + Sync {
    async fn predict(&self, image: PixelArray) -> Result<Classification, GatewayError>;
}
