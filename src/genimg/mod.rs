//! Outbound side: the image-generation endpoint and the seam the flow calls.
pub mod client;

use async_trait::async_trait;

use crate::error::AppResult;

/// Anything that can turn a prompt into an image reference.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}
