//! HTTP client for the CV generation backend.

use bytes::Bytes;
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{CvError, CvResult};
use crate::submission::{error_message, GenerateResponse, SubmissionPayload};

/// Talks to `/generate` and fetches generated documents.
///
/// No timeout is configured: a hung request keeps the form submitting.
#[derive(Debug, Clone)]
pub struct GenerateClient {
    client: Client,
    config: ClientConfig,
}

impl GenerateClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send the form and parse the generator's answer.
    pub async fn generate(&self, payload: SubmissionPayload) -> CvResult<GenerateResponse> {
        let url = self.config.generate_url()?;
        let parts = payload.part_names();
        let form = payload.into_form()?;

        tracing::info!(%url, ?parts, "Submitting CV form");
        let response = self.client.post(url).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = error_message(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), %message, "Generation rejected");
            return Err(CvError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let parsed: GenerateResponse = serde_json::from_slice(&body)?;
        tracing::info!(full_name = ?parsed.full_name, "CV generated");
        Ok(parsed)
    }

    /// Fetch a generated document. Relative URLs resolve against the backend.
    pub async fn download(&self, url: &str) -> CvResult<Bytes> {
        let url = self.config.resolve(url)?;
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(CvError::Backend {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!(%url, bytes = bytes.len(), "Downloaded document");
        Ok(bytes)
    }
}
