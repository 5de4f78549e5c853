use crate::errors::RelayError;
use crate::models::generation::GeneratePayload;
use actix_web::web::Bytes;
use log::{debug, error};
use reqwest::{Client, Response};
use serde::de::IgnoredAny;
use std::time::Duration;

pub struct OllamaService {
    client: Client,
    url: String,
}

/// Successful downstream answer. `body` holds the bytes exactly as received.
#[derive(Debug)]
pub struct DownstreamReply {
    pub status: u16,
    pub body: Bytes,
}

impl OllamaService {
    pub fn new(url: String, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn generate(&self, payload: &GeneratePayload) -> Result<DownstreamReply, RelayError> {
        debug!("Forwarding prompt for model {} to {}", payload.model, self.url);

        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|e| self.failed(RelayError::downstream(e)))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.failed(RelayError::downstream(e)))?;

        // Validated only; the original bytes go back to the caller.
        serde_json::from_slice::<IgnoredAny>(&body).map_err(|e| {
            self.failed(RelayError::Downstream(format!(
                "invalid JSON in response from {}: {}",
                self.url, e
            )))
        })?;

        Ok(DownstreamReply { status, body })
    }

    fn failed(&self, err: RelayError) -> RelayError {
        error!("Downstream request to {} failed: {}", self.url, err);
        err
    }
}
