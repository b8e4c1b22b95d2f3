//! Thin HTTP client for the image-generation endpoint.
//!
//! `generate` posts `{"value": <prompt>}` and expects a JSON array whose first
//! element is the URL of the produced image.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::genimg::ImageGenerator;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    value: &'a str,
}

#[derive(Clone, Debug)]
pub struct GenImgClient {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl GenImgClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        GenImgClient { client: Client::new(), endpoint: endpoint.into(), timeout: None }
    }

    /// Bound every request; without this the transport default applies.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a prompt and return the first image reference of the response.
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        tracing::info!("Sending prompt to image generator at URL: {}", self.endpoint);
        tracing::debug!("Prompt payload: {:?}", prompt);

        let mut request = self.client.post(&self.endpoint).json(&GenerateRequest { value: prompt });
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await.map_err(AppError::HttpClient)?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or_default().to_string();
            tracing::error!("Image generation failed. Status: {}", status);
            return Err(AppError::GenImg { status: status.as_u16(), reason });
        }

        // A body that is not JSON is the same protocol failure as a wrong shape.
        let body: Value = response.json().await.map_err(|e| {
            tracing::warn!("Image generator returned an unreadable body: {}", e);
            AppError::UnexpectedResponse
        })?;
        let image = first_image_reference(&body)?;
        tracing::info!("Image generated: {}", image);
        Ok(image)
    }
}

#[async_trait]
impl ImageGenerator for GenImgClient {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        GenImgClient::generate(self, prompt).await
    }
}

/// Extract the image URL from a successful response body.
pub fn first_image_reference(body: &Value) -> AppResult<String> {
    match body.as_array().and_then(|items| items.first()) {
        Some(Value::String(url)) => Ok(url.clone()),
        _ => {
            tracing::warn!("Unexpected response shape: {}", body);
            Err(AppError::UnexpectedResponse)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn takes_first_element_of_array() {
        let body = json!(["https://x/img.png", "https://x/other.png"]);
        assert_eq!(first_image_reference(&body).unwrap(), "https://x/img.png");
    }

    #[test]
    fn rejects_empty_array_and_non_arrays() {
        for body in [json!([]), json!({"url": "https://x/img.png"}), json!("https://x"), json!(null)] {
            assert!(matches!(first_image_reference(&body), Err(AppError::UnexpectedResponse)), "{body}");
        }
    }

    #[test]
    fn rejects_non_string_first_element() {
        let body = json!([{"url": "https://x/img.png"}]);
        assert!(matches!(first_image_reference(&body), Err(AppError::UnexpectedResponse)));
    }

    #[test]
    fn request_body_has_single_value_field() {
        let body = serde_json::to_value(GenerateRequest { value: "a red fox" }).unwrap();
        assert_eq!(body, json!({"value": "a red fox"}));
    }

    #[test]
    fn builder_keeps_endpoint() {
        let client = GenImgClient::new("http://localhost:3000/api/genimg")
            .with_timeout(Some(Duration::from_secs(3)));
        assert_eq!(client.endpoint(), "http://localhost:3000/api/genimg");
        assert_eq!(client.timeout, Some(Duration::from_secs(3)));
    }
}
